use std::fmt;
use std::ops::*;

// linear rgb, nominally in [0, 1] but nothing stops a channel from leaving that range
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Colour {
    red: f64,
    green: f64,
    blue: f64,
}

pub const BLACK: Colour = Colour::new(0.0, 0.0, 0.0);
pub const WHITE: Colour = Colour::new(1.0, 1.0, 1.0);
pub const GREY: Colour = Colour::grey(0.5);
pub const RED: Colour = Colour::new(1.0, 0.0, 0.0);
pub const GREEN: Colour = Colour::new(0.0, 1.0, 0.0);
pub const BLUE: Colour = Colour::new(0.0, 0.0, 1.0);
pub const YELLOW: Colour = Colour::new(1.0, 1.0, 0.0);
pub const MAGENTA: Colour = Colour::new(1.0, 0.0, 1.0);
pub const CYAN: Colour = Colour::new(0.0, 1.0, 1.0);

fn clamp_channel(value: f64) -> f64 {
    // NaN goes to black rather than poisoning the quantizer
    if value.is_nan() {
	0.0
    } else {
	value.clamp(0.0, 1.0)
    }
}

impl Colour {
    pub const fn new(red: f64, green: f64, blue: f64) -> Colour {
	Colour {
	    red,
	    green,
	    blue,
	}
    }

    pub const fn grey(value: f64) -> Colour {
	Colour::new(value, value, value)
    }

    pub fn red(&self) -> f64 {
	self.red
    }

    pub fn green(&self) -> f64 {
	self.green
    }

    pub fn blue(&self) -> f64 {
	self.blue
    }

    // clamping only happens after the multiply, and only when asked
    pub fn scale(&mut self, factor: f64, clamp: bool) {
	self.red *= factor;
	self.green *= factor;
	self.blue *= factor;
	if clamp {
	    self.clamp();
	}
    }

    pub fn clamp(&mut self) {
	self.red = clamp_channel(self.red);
	self.green = clamp_channel(self.green);
	self.blue = clamp_channel(self.blue);
    }

    pub fn clamped(mut self) -> Colour {
	self.clamp();
	self
    }

    // summing samples, no clamping
    pub fn accumulate(&mut self, other: &Colour) {
	self.red += other.red;
	self.green += other.green;
	self.blue += other.blue;
    }

    // quantize for 8 bit image formats
    pub fn to_rgb8(self) -> [u8; 3] {
	let clamped = self.clamped();
	[
	    (clamped.red * 255.0).round() as u8,
	    (clamped.green * 255.0).round() as u8,
	    (clamped.blue * 255.0).round() as u8,
	]
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
	write!(f, "<raytrace.color = R:{:.6} G:{:.6} B:{:.6}>", self.red, self.green, self.blue)
    }
}

impl Add<Colour> for Colour {
    type Output = Colour;

    fn add(mut self, other: Colour) -> Colour {
	self.accumulate(&other);
	self
    }
}

impl AddAssign<Colour> for Colour {
    fn add_assign(&mut self, other: Colour) {
	self.accumulate(&other);
    }
}

impl Mul<f64> for Colour {
    type Output = Colour;

    fn mul(mut self, other: f64) -> Colour {
	self.scale(other, false);
	self
    }
}

impl MulAssign<f64> for Colour {
    fn mul_assign(&mut self, other: f64) {
	self.scale(other, false);
    }
}
