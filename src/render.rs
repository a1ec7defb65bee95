use std::path::Path;
use std::thread;
use std::time::Instant;

use log::{debug, info, trace};
use ndarray::{Array2, ArrayViewMut2, Axis};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::camera::Camera;
use crate::colour::*;
use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::image::Framebuffer;
use crate::scene::Scene;

const ROWS: Axis = Axis(0);

// Configured -> Rendered -> Saved, never backwards. Rendering again while Rendered
// replaces the framebuffer; once Saved the renderer only saves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderState {
    Configured,
    Rendered,
    Saved,
}

// holds the scene borrowed, so it cannot change while a render is in progress
pub struct Renderer<'a> {
    scene: &'a Scene,
    config: RenderConfig,
    state: RenderState,
    framebuffer: Option<Framebuffer>,
}

// each row has its own generator so the output doesn't depend on how rows are shared out
fn row_rng(seed: u64, row: usize) -> StdRng {
    StdRng::seed_from_u64(seed ^ (row as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

fn shade_pixel(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
    rng: &mut StdRng,
    i: usize,
    j: usize,
) -> Result<Colour> {
    if config.samples == 1 {
	let ray = camera.cast(i as f64 + 0.5, j as f64 + 0.5)?;
	return Ok(scene.trace(&ray));
    }

    // equal weight linear average, summed as we go
    let mut total = BLACK;
    for _ in 0..config.samples {
	let ray = camera.cast(i as f64 + rng.gen::<f64>(), j as f64 + rng.gen::<f64>())?;
	total.accumulate(&scene.trace(&ray));
    }
    total.scale(1.0 / config.samples as f64, false);
    Ok(total)
}

fn render_band(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
    first_row: usize,
    mut rows: ArrayViewMut2<Colour>,
) -> Result<()> {
    trace!("rendering rows {}..{}", first_row, first_row + rows.nrows());
    for (offset, mut row) in rows.axis_iter_mut(ROWS).enumerate() {
	let j = first_row + offset;
	let mut rng = row_rng(config.seed, j);
	for (i, pixel) in row.iter_mut().enumerate() {
	    *pixel = shade_pixel(scene, camera, config, &mut rng, i, j)?;
	}
    }
    Ok(())
}

impl<'a> Renderer<'a> {
    pub fn new(scene: &'a Scene, config: RenderConfig) -> Self {
	Renderer {
	    scene,
	    config,
	    state: RenderState::Configured,
	    framebuffer: None,
	}
    }

    pub fn state(&self) -> RenderState {
	self.state
    }

    pub fn framebuffer(&self) -> Option<&Framebuffer> {
	self.framebuffer.as_ref()
    }

    pub fn into_framebuffer(self) -> Option<Framebuffer> {
	self.framebuffer
    }

    // one primary ray per pixel (or per sample), nearest hit wins; replaces any unsaved result
    pub fn render(&mut self) -> Result<&Framebuffer> {
	if self.state == RenderState::Saved {
	    return Err(Error::AlreadySaved);
	}
	self.config.validate()?;
	let camera = Camera::new(self.scene.camera_from(), self.scene.camera_at(), &self.config)?;

	let (width, height) = (self.config.width, self.config.height);
	let workers = self.config.workers();
	let rows_per_worker = height.div_ceil(workers);
	info!(
	    "rendering {} objects at {}x{} with {} samples per pixel",
	    self.scene.number_of_objects(),
	    width,
	    height,
	    self.config.samples
	);
	debug!("{} workers, {} rows each", workers, rows_per_worker);

	let timer = Instant::now();
	let mut pixels = Array2::from_elem((height, width), self.scene.background());
	let scene = self.scene;
	let config = &self.config;

	// every worker owns a disjoint band of rows, so no locking
	thread::scope(|s| -> Result<()> {
	    let mut threads = Vec::with_capacity(workers);
	    for (band, rows) in pixels.axis_chunks_iter_mut(ROWS, rows_per_worker).enumerate() {
		let camera = &camera;
		threads.push(s.spawn(move || {
		    render_band(scene, camera, config, band * rows_per_worker, rows)
		}));
	    }

	    for thread in threads {
		thread
		    .join()
		    .unwrap_or_else(|panic| std::panic::resume_unwind(panic))?;
	    }
	    Ok(())
	})?;

	info!("render took {}ms", timer.elapsed().as_millis());
	self.state = RenderState::Rendered;
	Ok(&*self.framebuffer.insert(Framebuffer::from_array(pixels)))
    }

    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<()> {
	let framebuffer = self.framebuffer.as_ref().ok_or(Error::NotRendered)?;
	framebuffer.save(path.as_ref())?;
	self.state = RenderState::Saved;
	Ok(())
    }
}
