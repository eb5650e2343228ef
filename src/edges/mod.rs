//! Per-pixel edge stages: derivatives, classification, and mask extraction.
//!
//! These are the data-parallel passes of the pipeline that touch each pixel
//! independently:
//!
//! - Gradient computation (fixed 3×3 Sobel, or an external [`DerivFilter`])
//!   producing `dx`, `dy` and the magnitude field.
//! - Non-maximum suppression with a direction-aligned 4-neighborhood plus
//!   double thresholding into the shared [`ClassMap`].
//! - Extraction of the final 0/255 mask once linking has run.
//!
//! Design goals
//! - Favor clarity and cache-friendly row access over micro-optimizations.
//! - Handle borders by clamping indices (replicate) in the gradient pass and
//!   by leaving the 1-pixel frame unclassified afterwards.
//! - Keep the map the only shared mutable state, behind atomic cells.

pub mod classify;
pub mod extract;
pub mod grad;
pub mod map;

pub use classify::classify_edges;
pub use extract::extract_mask;
pub use grad::{DerivFilter, magnitude_into, sobel_gradients_into};
pub use map::{ClassMap, PixelClass};
