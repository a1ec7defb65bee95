use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use crate::colour::Colour;
use crate::config::RenderConfig;
use crate::error::Result;
use crate::objects::Sphere;
use crate::vec3::Point3;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
	match level {
	    LogLevel::Off => LevelFilter::Off,
	    LogLevel::Error => LevelFilter::Error,
	    LogLevel::Warn => LevelFilter::Warn,
	    LogLevel::Info => LevelFilter::Info,
	    LogLevel::Debug => LevelFilter::Debug,
	    LogLevel::Trace => LevelFilter::Trace,
	}
    }
}

fn parse_numbers<const N: usize>(text: &str, what: &str) -> std::result::Result<[f64; N], String> {
    let values = text
	.split(',')
	.map(|part| part.trim().parse::<f64>())
	.collect::<std::result::Result<Vec<_>, _>>()
	.map_err(|e| format!("bad {what} '{text}': {e}"))?;
    values
	.try_into()
	.map_err(|values: Vec<f64>| format!("{what} needs {N} comma separated numbers, got {}", values.len()))
}

// x,y,z
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointArg(pub Point3);

impl FromStr for PointArg {
    type Err = String;

    fn from_str(text: &str) -> std::result::Result<Self, String> {
	Ok(PointArg(Point3::from(parse_numbers::<3>(text, "point")?)))
    }
}

// r,g,b
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColourArg(pub Colour);

impl FromStr for ColourArg {
    type Err = String;

    fn from_str(text: &str) -> std::result::Result<Self, String> {
	let [r, g, b] = parse_numbers::<3>(text, "colour")?;
	Ok(ColourArg(Colour::new(r, g, b)))
    }
}

// x,y,z,radius or x,y,z,radius,r,g,b
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereArg {
    pub center: Point3,
    pub radius: f64,
    pub colour: Option<Colour>,
}

impl SphereArg {
    pub fn build(&self) -> Result<Sphere> {
	let sphere = Sphere::new(self.center, self.radius)?;
	Ok(match self.colour {
	    Some(colour) => sphere.with_colour(colour),
	    None => sphere,
	})
    }
}

impl FromStr for SphereArg {
    type Err = String;

    fn from_str(text: &str) -> std::result::Result<Self, String> {
	let count = text.split(',').count();
	if count == 7 {
	    let [x, y, z, radius, r, g, b] = parse_numbers::<7>(text, "sphere")?;
	    Ok(SphereArg {
		center: Point3::new(x, y, z),
		radius,
		colour: Some(Colour::new(r, g, b)),
	    })
	} else {
	    let [x, y, z, radius] = parse_numbers::<4>(text, "sphere")?;
	    Ok(SphereArg {
		center: Point3::new(x, y, z),
		radius,
		colour: None,
	    })
	}
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser, Debug)]
#[command(name = "rational-rt")]
#[command(about = "Flat shaded ray tracer built on rational trigonometry")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 320)]
    pub width: usize,

    /// Image height in pixels
    #[arg(long, default_value_t = 240)]
    pub height: usize,

    /// Horizontal field of view in degrees
    #[arg(long, default_value_t = 60.0)]
    pub fov: f64,

    /// Rays per pixel
    #[arg(long, short = 's', default_value_t = 1)]
    pub samples: u32,

    /// Worker threads, defaults to one per cpu
    #[arg(long, short = 'j')]
    pub threads: Option<usize>,

    /// Seed for the subpixel jitter
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Camera position as x,y,z
    #[arg(long, default_value = "0,-10,2", allow_hyphen_values = true)]
    pub from: PointArg,

    /// Camera target as x,y,z
    #[arg(long, default_value = "0,0,0", allow_hyphen_values = true)]
    pub at: PointArg,

    /// Add a sphere as x,y,z,radius[,r,g,b]; without any the demo scene is drawn
    #[arg(long = "sphere", allow_hyphen_values = true)]
    pub spheres: Vec<SphereArg>,

    /// Background colour as r,g,b
    #[arg(long, default_value = "0,0,0")]
    pub background: ColourArg,

    /// Output file, .tga or .ppm
    #[arg(short, long, default_value = "output.tga")]
    pub output: PathBuf,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    pub fn render_config(&self) -> RenderConfig {
	RenderConfig {
	    width: self.width,
	    height: self.height,
	    field_of_view: self.fov,
	    samples: self.samples,
	    threads: self.threads,
	    seed: self.seed,
	}
    }
}
