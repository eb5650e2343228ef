#![doc = include_str!("../README.md")]

// Stable public surface.
pub mod detector;
pub mod error;
pub mod image;

// Stage internals – public so the linking phases can be driven directly,
// but with no stability promises.
pub mod edges;
pub mod link;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{CannyDetector, CannyParams, CannyResult, StageTimings};
pub use crate::image::EdgeMask;

// Persisted configuration record and its validation tag.
pub use crate::detector::{CannyConfigRecord, CONFIG_TAG};

// Error taxonomy shared by every fallible entry point.
pub use crate::error::CannyError;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use canny_detector::prelude::*;
///
/// # fn main() -> Result<(), CannyError> {
/// let (w, h) = (640usize, 480usize);
/// let gray = vec![128u8; w * h];
/// let img = ImageU8 { w, h, stride: w, data: &gray };
///
/// let mut det = CannyDetector::new(CannyParams {
///     low_threshold: 40.0,
///     high_threshold: 90.0,
///     ..Default::default()
/// });
///
/// let mask = det.detect(img)?;
/// println!("edges={} of {}", mask.count_edges(), w * h);
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{ImageU8, Roi};
    pub use crate::{CannyDetector, CannyError, CannyParams, CannyResult, EdgeMask};
}
