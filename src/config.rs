use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderConfig {
    pub width: usize,
    pub height: usize,
    // horizontal, in degrees
    pub field_of_view: f64,
    // rays per pixel; one means a single ray through the pixel centre
    pub samples: u32,
    // worker threads, None for one per cpu
    pub threads: Option<usize>,
    // seeds the subpixel jitter so multisampled renders are reproducible
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
	RenderConfig {
	    width: 320,
	    height: 240,
	    field_of_view: 60.0,
	    samples: 1,
	    threads: None,
	    seed: 0,
	}
    }
}

impl RenderConfig {
    pub fn new(width: usize, height: usize) -> Self {
	RenderConfig {
	    width,
	    height,
	    ..Default::default()
	}
    }

    pub fn validate(&self) -> Result<()> {
	if self.width == 0 || self.height == 0 {
	    return Err(Error::InvalidSettings(format!(
		"image must be at least 1x1, got {}x{}",
		self.width, self.height
	    )));
	}
	if !(self.field_of_view > 0.0 && self.field_of_view < 180.0) {
	    return Err(Error::InvalidSettings(format!(
		"field of view must be between 0 and 180 degrees, got {}",
		self.field_of_view
	    )));
	}
	if self.samples == 0 {
	    return Err(Error::InvalidSettings("at least one sample per pixel is needed".into()));
	}
	if self.threads == Some(0) {
	    return Err(Error::InvalidSettings("at least one worker thread is needed".into()));
	}
	Ok(())
    }

    pub fn workers(&self) -> usize {
	self.threads.unwrap_or_else(num_cpus::get).clamp(1, self.height.max(1))
    }
}
