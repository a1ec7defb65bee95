use enum_dispatch::enum_dispatch;

use crate::colour::*;
use crate::error::{Error, Result};
use crate::ray::*;
use crate::vec3::*;

type Range = std::ops::Range<f64>;

// a ray whose cosine with the plane normal is below this runs alongside the plane
const PARALLEL_COSINE: f64 = 1e-6;

pub fn in_range(t: f64, range: &Range) -> Option<f64> {
    if range.contains(&t) {
	Some(t)
    } else {
	None
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub t: f64,
    pub point: Point3,
    // faces against the incoming ray
    pub normal: Vec3,
    pub backface: bool,
    pub colour: Colour,
}

impl Hit {
    pub fn with_ray(ray: &Ray, t: f64, outward: Vec3, colour: Colour) -> Self {
	let backface = ray.direction().dot(outward) > 0.0;
	Hit {
	    t,
	    point: ray.distance_along(t),
	    normal: if backface { -outward } else { outward },
	    backface,
	    colour,
	}
    }
}

#[enum_dispatch]
pub trait Object {
    fn position(&self) -> Point3;

    // rigid translation, nothing else changes
    fn move_by(&mut self, by: Vec3);

    fn colour(&self) -> Colour;

    fn set_colour(&mut self, colour: Colour);

    // nearest non-negative t along the ray, if any
    fn intersect(&self, ray: &Ray) -> Option<f64>;

    // nearest hit with t inside range
    fn hit(&self, ray: &Ray, range: Range) -> Option<Hit>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    center: Point3,
    radius: f64,
    colour: Colour,
}

impl Sphere {
    pub fn new(center: Point3, radius: f64) -> Result<Sphere> {
	if !(radius > 0.0 && radius.is_finite()) {
	    return Err(Error::InvalidRadius(radius));
	}
	Ok(Sphere {
	    center,
	    radius,
	    colour: WHITE,
	})
    }

    pub fn with_colour(mut self, colour: Colour) -> Sphere {
	self.colour = colour;
	self
    }

    pub fn radius(&self) -> f64 {
	self.radius
    }

    pub fn contains(&self, point: Point3) -> bool {
	self.center.quadrance_to(point) < self.radius * self.radius
    }

    pub fn normal_at(&self, point: Point3) -> Vec3 {
	(point - self.center) / self.radius
    }

    // both real roots of |o + t*d - c|^2 = r^2 in ascending order, equal when tangent
    pub fn roots(&self, ray: &Ray) -> Option<(f64, f64)> {
	let offset = ray.origin() - self.center;
	let direction = ray.direction();
	let a = direction.quadrance();
	let h = direction.dot(offset);
	let c = offset.quadrance() - self.radius * self.radius;
	let discriminant = h * h - a * c;
	if discriminant < 0.0 {
	    return None;
	}
	if discriminant == 0.0 {
	    let t = -h / a;
	    return Some((t, t));
	}
	// pick the sign that adds magnitudes, then recover the other root from the product c/a
	let q = -(h + discriminant.sqrt().copysign(h));
	let t0 = q / a;
	let t1 = c / q;
	Some((t0.min(t1), t0.max(t1)))
    }
}

impl Object for Sphere {
    fn position(&self) -> Point3 {
	self.center
    }

    fn move_by(&mut self, by: Vec3) {
	self.center += by;
    }

    fn colour(&self) -> Colour {
	self.colour
    }

    fn set_colour(&mut self, colour: Colour) {
	self.colour = colour;
    }

    fn intersect(&self, ray: &Ray) -> Option<f64> {
	let (near, far) = self.roots(ray)?;
	if near >= 0.0 {
	    Some(near)
	} else if far >= 0.0 {
	    // started inside
	    Some(far)
	} else {
	    None
	}
    }

    fn hit(&self, ray: &Ray, range: Range) -> Option<Hit> {
	let (near, far) = self.roots(ray)?;
	let t = in_range(near, &range).or_else(|| in_range(far, &range))?;
	let outward = self.normal_at(ray.distance_along(t));
	Some(Hit::with_ray(ray, t, outward, self.colour))
    }
}

// infinite and one sided only in the sense that the normal picks the outward face
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    point: Point3,
    normal: Vec3,
    colour: Colour,
}

impl Plane {
    pub fn new(point: Point3, normal: Vec3) -> Result<Plane> {
	Ok(Plane {
	    point,
	    normal: normal.normalized()?,
	    colour: WHITE,
	})
    }

    pub fn with_colour(mut self, colour: Colour) -> Plane {
	self.colour = colour;
	self
    }

    pub fn normal(&self) -> Vec3 {
	self.normal
    }

    // signed, positive on the side the normal points to
    pub fn distance(&self, point: Point3) -> f64 {
	(point - self.point).dot(self.normal)
    }

    fn solve(&self, ray: &Ray) -> Option<f64> {
	let direction = ray.direction();
	let denominator = direction.dot(self.normal);
	// normal is unit length
	if denominator.abs() < PARALLEL_COSINE * direction.magnitude() {
	    return None;
	}
	Some(-self.distance(ray.origin()) / denominator)
    }
}

impl Object for Plane {
    fn position(&self) -> Point3 {
	self.point
    }

    fn move_by(&mut self, by: Vec3) {
	self.point += by;
    }

    fn colour(&self) -> Colour {
	self.colour
    }

    fn set_colour(&mut self, colour: Colour) {
	self.colour = colour;
    }

    fn intersect(&self, ray: &Ray) -> Option<f64> {
	self.solve(ray).filter(|t| *t >= 0.0)
    }

    fn hit(&self, ray: &Ray, range: Range) -> Option<Hit> {
	let t = in_range(self.solve(ray)?, &range)?;
	Some(Hit::with_ray(ray, t, self.normal, self.colour))
    }
}

// closed set of solids the scene can hold; add a variant for each new shape
#[derive(Clone, Copy, Debug, PartialEq)]
#[enum_dispatch(Object)]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
}
