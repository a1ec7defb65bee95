use std::fmt;
use std::ops::*;

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    // out of range is an error, never a wraparound
    pub fn from_index(index: usize) -> Result<Axis> {
	match index {
	    0 => Ok(Axis::X),
	    1 => Ok(Axis::Y),
	    2 => Ok(Axis::Z),
	    _ => Err(Error::IndexOutOfRange(index)),
	}
    }
}

// shared component access for both the vector and the point
macro_rules! components {
    ($name:ident) => {
	impl $name {
	    // always three components
	    pub const fn len(&self) -> usize {
		3
	    }

	    pub const fn is_empty(&self) -> bool {
		false
	    }

	    pub fn get(&self, index: usize) -> Result<f64> {
		Ok(self[Axis::from_index(index)?])
	    }

	    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
		self[Axis::from_index(index)?] = value;
		Ok(())
	    }

	    pub fn is_finite(self) -> bool {
		self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
	    }
	}

	impl Index<Axis> for $name {
	    type Output = f64;

	    fn index(&self, index: Axis) -> &f64 {
		match index {
		    Axis::X => &self.x,
		    Axis::Y => &self.y,
		    Axis::Z => &self.z,
		}
	    }
	}

	impl IndexMut<Axis> for $name {
	    fn index_mut(&mut self, index: Axis) -> &mut f64 {
		match index {
		    Axis::X => &mut self.x,
		    Axis::Y => &mut self.y,
		    Axis::Z => &mut self.z,
		}
	    }
	}

	impl From<[f64; 3]> for $name {
	    fn from([x, y, z]: [f64; 3]) -> Self {
		$name::new(x, y, z)
	    }
	}
    };
}

// a displacement; has a length but no position
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

components!(Vec3);

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);
    pub const X: Vec3 = Vec3::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Vec3::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Vec3::new(0.0, 0.0, 1.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
	Vec3 { x, y, z }
    }

    pub fn dot(self, other: Self) -> f64 {
	self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Self) -> Self {
	Vec3::new(
	    self.y * other.z - self.z * other.y,
	    self.z * other.x - self.x * other.z,
	    self.x * other.y - self.y * other.x,
	)
    }

    // squared length, use this wherever only comparisons are needed; overflows past ~1e154
    pub fn quadrance(self) -> f64 {
	self.dot(self)
    }

    // largest absolute component
    pub fn extent(self) -> f64 {
	self.x.abs().max(self.y.abs()).max(self.z.abs())
    }

    // the extent of a vector that has a usable direction
    pub fn check_direction(self) -> Result<f64> {
	if !self.is_finite() {
	    return Err(Error::NonFinite);
	}
	let extent = self.extent();
	if extent == 0.0 {
	    return Err(Error::ZeroLength);
	}
	Ok(extent)
    }

    // rescaled so the largest component is 1 before squaring, then scaled back
    pub fn magnitude(self) -> f64 {
	let extent = self.extent();
	if extent == 0.0 || !extent.is_finite() {
	    return extent;
	}
	(self / extent).quadrance().sqrt() * extent
    }

    pub fn normalize(&mut self) -> Result<()> {
	let extent = self.check_direction()?;
	self.shrink(extent);
	let magnitude = self.quadrance().sqrt();
	self.shrink(magnitude);
	Ok(())
    }

    pub fn normalized(mut self) -> Result<Self> {
	self.normalize()?;
	Ok(self)
    }

    // rational analogue of sin^2 of the angle between the two vectors
    // scale invariant, so both sides are rescaled into [1, 3] quadrance first
    pub fn spread(self, other: Self) -> Result<f64> {
	let a = self / self.check_direction()?;
	let b = other / other.check_direction()?;
	let d = a.dot(b);
	Ok(1.0 - (d * d) / (a.quadrance() * b.quadrance()))
    }

    pub fn accumulate(&mut self, other: Self) {
	self.x += other.x;
	self.y += other.y;
	self.z += other.z;
    }

    pub fn deaccumulate(&mut self, other: Self) {
	self.x -= other.x;
	self.y -= other.y;
	self.z -= other.z;
    }

    pub fn scale(&mut self, factor: f64) {
	self.x *= factor;
	self.y *= factor;
	self.z *= factor;
    }

    // division rather than multiplying by the reciprocal so that scale then shrink round trips
    pub fn shrink(&mut self, divisor: f64) {
	self.x /= divisor;
	self.y /= divisor;
	self.z /= divisor;
    }

    pub fn scaled(mut self, factor: f64) -> Self {
	self.scale(factor);
	self
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	write!(f, "<raytrace.vector = X:{:.6} Y:{:.6} Z:{:.6}>", self.x, self.y, self.z)
    }
}

// operators are sugar over the named operations above
impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self {
	Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl Add<Vec3> for Vec3 {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
	self.accumulate(other);
	self
    }
}

impl AddAssign<Vec3> for Vec3 {
    fn add_assign(&mut self, other: Self) {
	self.accumulate(other);
    }
}

impl Sub<Vec3> for Vec3 {
    type Output = Self;

    fn sub(mut self, other: Self) -> Self {
	self.deaccumulate(other);
	self
    }
}

impl SubAssign<Vec3> for Vec3 {
    fn sub_assign(&mut self, other: Self) {
	self.deaccumulate(other);
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, other: f64) -> Self {
	self.scaled(other)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;

    fn mul(self, other: Vec3) -> Vec3 {
	other.scaled(self)
    }
}

impl MulAssign<f64> for Vec3 {
    fn mul_assign(&mut self, other: f64) {
	self.scale(other);
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;

    fn div(mut self, other: f64) -> Self {
	self.shrink(other);
	self
    }
}

impl DivAssign<f64> for Vec3 {
    fn div_assign(&mut self, other: f64) {
	self.shrink(other);
    }
}

// a location; only vectors can be added to it
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

components!(Point3);

impl Point3 {
    pub const ORIGIN: Point3 = Point3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
	Point3 { x, y, z }
    }

    pub fn zero(&mut self) {
	*self = Point3::ORIGIN;
    }

    pub fn scale(&mut self, factor: f64) {
	self.x *= factor;
	self.y *= factor;
	self.z *= factor;
    }

    pub fn translate(&mut self, by: Vec3) {
	self.x += by.x;
	self.y += by.y;
	self.z += by.z;
    }

    pub fn quadrance_to(self, other: Point3) -> f64 {
	(other - self).quadrance()
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	write!(f, "<raytrace.point = X:{:.6} Y:{:.6} Z:{:.6}>", self.x, self.y, self.z)
    }
}

impl Sub<Point3> for Point3 {
    type Output = Vec3;

    fn sub(self, other: Point3) -> Vec3 {
	Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Add<Vec3> for Point3 {
    type Output = Point3;

    fn add(mut self, other: Vec3) -> Point3 {
	self.translate(other);
	self
    }
}

impl Sub<Vec3> for Point3 {
    type Output = Point3;

    fn sub(mut self, other: Vec3) -> Point3 {
	self.translate(-other);
	self
    }
}

impl AddAssign<Vec3> for Point3 {
    fn add_assign(&mut self, other: Vec3) {
	self.translate(other);
    }
}

impl SubAssign<Vec3> for Point3 {
    fn sub_assign(&mut self, other: Vec3) {
	self.translate(-other);
    }
}

impl MulAssign<f64> for Point3 {
    fn mul_assign(&mut self, other: f64) {
	self.scale(other);
    }
}

pub fn dot(a: Vec3, b: Vec3) -> f64 {
    a.dot(b)
}

pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(b)
}

pub fn spread(a: Vec3, b: Vec3) -> Result<f64> {
    a.spread(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_dot_and_cross() {
	assert_eq!(dot(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)), 32.0);
	assert_eq!(cross(Vec3::X, Vec3::Y), Vec3::Z);
	assert_eq!(cross(Vec3::Y, Vec3::X), -Vec3::Z);
    }

    #[test]
    fn test_cross_is_orthogonal_with_parallelogram_area() {
	let a = Vec3::new(2.0, 0.0, 0.0);
	let b = Vec3::new(1.0, 3.0, 0.0);
	let c = cross(a, b);
	assert_eq!(dot(c, a), 0.0);
	assert_eq!(dot(c, b), 0.0);
	// base 2, height 3
	assert_relative_eq!(c.magnitude(), 6.0);
    }

    #[test]
    fn test_magnitude_squared_is_quadrance() {
	for v in [
	    Vec3::new(3.0, 4.0, 0.0),
	    Vec3::new(-1.5, 2.25, 7.0),
	    Vec3::new(1e-3, 1e3, -42.0),
	] {
	    assert_relative_eq!(v.magnitude().powi(2), v.quadrance(), max_relative = 1e-12);
	}
	assert_eq!(Vec3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
	assert_eq!(Vec3::new(1.0, 2.0, 2.0).quadrance(), 9.0);
    }

    #[test]
    fn test_normalize() {
	let mut v = Vec3::new(0.0, 3.0, 4.0);
	v.normalize().unwrap();
	assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-6);
	assert_abs_diff_eq!(v.y, 0.6, epsilon = 1e-6);
	assert_abs_diff_eq!(v.z, 0.8, epsilon = 1e-6);
	assert_relative_eq!(v.magnitude(), 1.0);
    }

    #[test]
    fn test_normalize_zero_is_an_error() {
	let mut v = Vec3::ZERO;
	assert!(matches!(v.normalize(), Err(Error::ZeroLength)));
	assert_eq!(v, Vec3::ZERO);
	assert!(matches!(
	    Vec3::new(f64::INFINITY, 0.0, 0.0).normalized(),
	    Err(Error::NonFinite)
	));
	assert!(matches!(Vec3::new(0.0, f64::NAN, 1.0).normalized(), Err(Error::NonFinite)));
    }

    #[test]
    fn test_huge_and_tiny_vectors_keep_their_length() {
	assert_eq!(Vec3::new(1e200, 0.0, 0.0).normalized().unwrap(), Vec3::X);
	assert_eq!(Vec3::new(1e-13, 0.0, 0.0).normalized().unwrap(), Vec3::X);
	assert_eq!(Vec3::new(0.0, -1e-310, 0.0).normalized().unwrap(), -Vec3::Y);

	let huge = Vec3::new(1e200, -1e200, 1e200).normalized().unwrap();
	assert_relative_eq!(huge.magnitude(), 1.0, max_relative = 1e-12);
	let tiny = Vec3::new(3e-170, 4e-170, 0.0).normalized().unwrap();
	assert_relative_eq!(tiny.y, 0.8, max_relative = 1e-12);

	assert_relative_eq!(Vec3::new(3e200, 4e200, 0.0).magnitude(), 5e200, max_relative = 1e-12);
	assert_relative_eq!(Vec3::new(0.0, 3e-200, 4e-200).magnitude(), 5e-200, max_relative = 1e-12);
    }

    #[test]
    fn test_spread_of_huge_and_tiny_vectors() {
	let v = Vec3::new(1e100, 1e100, 0.0);
	assert_eq!(v.spread(v).unwrap(), 0.0);
	assert_abs_diff_eq!(
	    spread(Vec3::new(1e200, 0.0, 0.0), Vec3::new(0.0, 1e-200, 0.0)).unwrap(),
	    1.0,
	    epsilon = 1e-12
	);
	let s = spread(Vec3::new(1e-150, 1e-150, 0.0), Vec3::new(1e150, 0.0, 0.0)).unwrap();
	assert_abs_diff_eq!(s, 0.5, epsilon = 1e-12);
	assert!(matches!(
	    spread(Vec3::new(f64::INFINITY, 0.0, 0.0), Vec3::X),
	    Err(Error::NonFinite)
	));
    }

    #[test]
    fn test_spread() {
	assert_abs_diff_eq!(spread(Vec3::X, Vec3::Y).unwrap(), 1.0, epsilon = 1e-6);
	let v = Vec3::new(1.0, 2.0, 3.0);
	assert_abs_diff_eq!(spread(v, v).unwrap(), 0.0, epsilon = 1e-12);
	assert_abs_diff_eq!(spread(v, -2.0 * v).unwrap(), 0.0, epsilon = 1e-12);

	let a = Vec3::new(2.0, 3.0, 4.0);
	let b = Vec3::new(5.0, 6.0, 7.0);
	assert_relative_eq!(spread(a, b).unwrap(), 1.0 - (56.0 * 56.0) / (29.0 * 110.0));
	assert_eq!(spread(a, b).unwrap(), spread(b, a).unwrap());
    }

    #[test]
    fn test_spread_zero_is_an_error() {
	assert!(matches!(spread(Vec3::ZERO, Vec3::X), Err(Error::ZeroLength)));
	assert!(matches!(spread(Vec3::X, Vec3::ZERO), Err(Error::ZeroLength)));
    }

    #[test]
    fn test_accumulate_operators() {
	let mut v = Vec3::new(1.0, 2.0, 3.0);
	v += Vec3::new(4.0, 5.0, 6.0);
	assert_eq!(v, Vec3::new(5.0, 7.0, 9.0));
	v -= Vec3::new(1.0, 2.0, 3.0);
	assert_eq!(v, Vec3::new(4.0, 5.0, 6.0));
	assert_eq!(Vec3::new(4.0, 5.0, 6.0) - Vec3::new(1.0, 2.0, 3.0), Vec3::new(3.0, 3.0, 3.0));
    }

    #[test]
    fn test_scale_then_divide_round_trips() {
	let original = Vec3::new(2.0, 4.0, 6.0);
	let mut v = original;
	v *= 0.5;
	assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
	v /= 0.5;
	assert_eq!(v, original);

	let mut w = Vec3::new(0.1, -7.3, 1e5);
	w *= 3.7;
	w /= 3.7;
	assert_relative_eq!(w.x, 0.1, max_relative = 1e-12);
	assert_relative_eq!(w.y, -7.3, max_relative = 1e-12);
	assert_relative_eq!(w.z, 1e5, max_relative = 1e-12);
    }

    #[test]
    fn test_indexed_access() {
	let mut v = Vec3::new(1.0, 2.0, 3.0);
	assert_eq!(v.len(), 3);
	assert_eq!(v.get(0).unwrap(), 1.0);
	assert_eq!(v.get(2).unwrap(), 3.0);
	assert!(matches!(v.get(3), Err(Error::IndexOutOfRange(3))));
	v.set(1, 9.0).unwrap();
	assert_eq!(v[Axis::Y], 9.0);
	assert!(v.set(7, 0.0).is_err());
    }

    #[test]
    fn test_point_operations() {
	let mut p = Point3::new(1.0, 2.0, 3.0);
	p.scale(2.0);
	assert_eq!(p, Point3::new(2.0, 4.0, 6.0));
	assert_eq!(p - Point3::new(1.0, 1.0, 1.0), Vec3::new(1.0, 3.0, 5.0));
	p += Vec3::new(1.0, 0.0, 0.0);
	assert_eq!(p.x, 3.0);
	p.set(2, -1.0).unwrap();
	assert_eq!(p[Axis::Z], -1.0);
	p.zero();
	assert_eq!(p, Point3::ORIGIN);
    }

    #[test]
    fn test_display() {
	let v = Vec3::new(1.0, 2.0, 3.0);
	assert_eq!(format!("{v}"), "<raytrace.vector = X:1.000000 Y:2.000000 Z:3.000000>");
    }
}
