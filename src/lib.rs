//! A small ray tracing kernel.
//!
//! Points, vectors and rays with rational trigonometry (quadrance and spread in
//! place of length and angle), flat coloured spheres and planes, and a renderer
//! that casts one ray per pixel through a pinhole camera and writes TGA or PPM.

pub mod camera;
pub mod cli;
pub mod colour;
pub mod config;
pub mod error;
pub mod image;
pub mod logger;
pub mod objects;
pub mod ray;
pub mod render;
pub mod scene;
pub mod vec3;

pub use colour::Colour;
pub use config::RenderConfig;
pub use error::{Error, Result};
pub use image::Framebuffer;
pub use objects::{Hit, Object, Plane, Primitive, Sphere};
pub use ray::Ray;
pub use render::{RenderState, Renderer};
pub use scene::Scene;
pub use vec3::{cross, dot, spread, Axis, Point3, Vec3};
