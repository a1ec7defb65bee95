use log::debug;

use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::ray::*;
use crate::vec3::*;

// +z is up in world space
pub const WORLD_UP: Vec3 = Vec3::Z;

// pinhole camera; the image plane sits one unit in front of the eye
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    position: Point3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    half_width: f64,
    half_height: f64,
    inverse_width: f64,
    inverse_height: f64,
}

impl Camera {
    pub fn new(from: Point3, at: Point3, config: &RenderConfig) -> Result<Camera> {
	let forward = (at - from)
	    .normalized()
	    .map_err(|_| Error::DegenerateCamera("from and at are the same point"))?;
	let right = forward
	    .cross(WORLD_UP)
	    .normalized()
	    .map_err(|_| Error::DegenerateCamera("looking straight along the up axis"))?;
	let up = right.cross(forward);

	// the only transcendental call, made once per render
	let half_width = (config.field_of_view.to_radians() / 2.0).tan();
	let half_height = half_width * config.height as f64 / config.width as f64;

	debug!(
	    "camera basis forward={} right={} up={} half extent {:.4}x{:.4}",
	    forward, right, up, half_width, half_height
	);

	Ok(Camera {
	    position: from,
	    forward,
	    right,
	    up,
	    half_width,
	    half_height,
	    inverse_width: 1.0 / config.width as f64,
	    inverse_height: 1.0 / config.height as f64,
	})
    }

    pub fn position(&self) -> Point3 {
	self.position
    }

    pub fn forward(&self) -> Vec3 {
	self.forward
    }

    pub fn right(&self) -> Vec3 {
	self.right
    }

    pub fn up(&self) -> Vec3 {
	self.up
    }

    // (u, v) in pixel units, row 0 at the top; (col + 0.5, row + 0.5) is a pixel centre
    pub fn cast(&self, u: f64, v: f64) -> Result<Ray> {
	let x = (2.0 * u * self.inverse_width - 1.0) * self.half_width;
	let y = (1.0 - 2.0 * v * self.inverse_height) * self.half_height;
	let direction = self.forward + self.right * x + self.up * y;
	Ray::new(self.position, direction)
    }
}
