use crate::error::{Error, Result};
use crate::vec3::*;

// an oriented line; the direction is kept as given, so t is measured in units of its length
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    origin: Point3,
    direction: Vec3,
}

impl Ray {
    pub fn new(origin: Point3, direction: Vec3) -> Result<Self> {
	direction.check_direction()?;
	Ok(Ray {
	    origin,
	    direction,
	})
    }

    pub fn origin(&self) -> Point3 {
	self.origin
    }

    pub fn direction(&self) -> Vec3 {
	self.direction
    }

    // origin + t * direction, whatever the direction's length
    pub fn distance_along(&self, t: f64) -> Point3 {
	self.origin + self.direction * t
    }

    // the foot of the perpendicular from point onto the infinite line, t may be negative
    pub fn closest(&self, point: Point3) -> Point3 {
	self.distance_along(self.parameter_of(point))
    }

    pub fn parameter_of(&self, point: Point3) -> f64 {
	(point - self.origin).dot(self.direction) / self.direction.quadrance()
    }

    pub fn distance(&self, point: Point3) -> f64 {
	(point - self.closest(point)).magnitude()
    }
}
