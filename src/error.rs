//! Error type shared across the detector.
//!
//! Three failure classes exist, all raised up front before any pipeline
//! stage runs:
//! - configuration: mismatched gradient extents, invalid strided layouts,
//!   out-of-bounds regions, or a foreign tag in a persisted record;
//! - capability: the target lacks the 32-bit atomics the linking phases
//!   require;
//! - unsupported aperture: a derivative aperture the built-in Sobel stage
//!   cannot serve and no external filter is installed for.
use std::fmt;

/// Errors reported by [`CannyDetector`](crate::CannyDetector) entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CannyError {
    /// The two derivative grids passed to `detect_from_gradients` differ in extent.
    GradientSizeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
    /// Width, height, stride and buffer length do not describe a valid grid.
    InvalidImageLayout {
        width: usize,
        height: usize,
        stride: usize,
        len: usize,
    },
    /// The requested region does not fit inside the backing image.
    RoiOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        image_width: usize,
        image_height: usize,
    },
    /// A persisted configuration record carries a tag from another algorithm.
    ConfigTagMismatch { found: String },
    /// The target provides no 32-bit atomic operations.
    MissingAtomicSupport,
    /// Aperture size the detector cannot serve with its installed filters.
    UnsupportedAperture { aperture: u32 },
}

impl fmt::Display for CannyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CannyError::GradientSizeMismatch { expected, actual } => write!(
                f,
                "gradient size mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, actual.0, actual.1
            ),
            CannyError::InvalidImageLayout {
                width,
                height,
                stride,
                len,
            } => write!(
                f,
                "invalid image layout: {width}x{height}, stride {stride}, buffer len {len}"
            ),
            CannyError::RoiOutOfBounds {
                x,
                y,
                width,
                height,
                image_width,
                image_height,
            } => write!(
                f,
                "roi {width}x{height}+{x}+{y} out of bounds for {image_width}x{image_height} image"
            ),
            CannyError::ConfigTagMismatch { found } => {
                write!(f, "configuration record tag mismatch: found {found:?}")
            }
            CannyError::MissingAtomicSupport => {
                write!(f, "target lacks the 32-bit atomics required for edge linking")
            }
            CannyError::UnsupportedAperture { aperture } => {
                write!(f, "unsupported aperture size {aperture} (only 3 without an external derivative filter)")
            }
        }
    }
}

impl std::error::Error for CannyError {}
