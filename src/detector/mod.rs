//! Canny detector orchestrating a massively parallel edge pipeline.
//!
//! Overview
//! - Computes per-pixel derivatives with a 3×3 Sobel stencil (or an external
//!   filter for wider apertures) and folds them into a gradient magnitude
//!   field, either Euclidean or L1.
//! - Classifies every interior pixel with non-maximum suppression along the
//!   quantised gradient direction plus a double threshold: strong edges,
//!   candidates awaiting support, or no edge.
//! - Links candidates to strong pixels by 8-connected hysteresis in two
//!   phases: tile-local flood fill, then cross-tile rounds over a ping-pong
//!   queue pair until a round promotes nothing.
//! - Extracts the surviving strong pixels into a dense 0/255 mask.
//!
//! Modules
//! - [`params`] – configuration, persisted record and tag validation.
//! - `pipeline` – the main [`CannyDetector`] implementation.
//! - `workspace` – reusable buffers that amortise allocations across frames.
//!
//! Key Ideas
//! - Pixel classes only ever move forward (no-edge → candidate → strong), so
//!   parallel promotion races are benign and the fixed point is unique no
//!   matter how tiles or rounds interleave.
//! - Every stage is a full barrier; the next stage starts only once the
//!   previous one has finished across the whole frame.
//!
//! See `README.md` for a gentle overview.

pub mod params;
mod pipeline;
mod workspace;

pub use params::{CannyConfigRecord, CannyParams, CONFIG_TAG};
pub use pipeline::{CannyDetector, CannyResult, StageTimings};
