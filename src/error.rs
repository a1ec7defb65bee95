//! Error types for the ray tracing kernel.

use thiserror::Error;

/// Errors reported by the algebra, geometry and rendering operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A vector with no length was used where a direction is required.
    #[error("vector has zero length")]
    ZeroLength,

    /// A vector with an infinite or NaN component was used where a direction is required.
    #[error("vector has a non-finite component")]
    NonFinite,

    /// Component access outside 0..=2.
    #[error("component index {0} is out of range 0..=2")]
    IndexOutOfRange(usize),

    /// Sphere radius was zero, negative or not finite.
    #[error("sphere radius must be positive, got {0}")]
    InvalidRadius(f64),

    /// The camera cannot build an image basis.
    #[error("degenerate camera: {0}")]
    DegenerateCamera(&'static str),

    /// Render settings were rejected.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// `save` was called before any successful `render`.
    #[error("nothing has been rendered yet")]
    NotRendered,

    /// `render` was called after the result was saved; build a new renderer instead.
    #[error("this render has already been saved")]
    AlreadySaved,

    /// The output path has an extension we cannot write.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for kernel operations.
pub type Result<T> = std::result::Result<T, Error>;
