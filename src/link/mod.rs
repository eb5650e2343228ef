//! Two-phase parallel hysteresis linking.
//!
//! Candidates become edges only when 8-connected to a strong pixel. The
//! connectivity closure runs in two phases over the shared classification
//! map:
//!
//! - [`local`] – tile-parallel worklist flood fill; resolves connectivity
//!   inside each tile and collects border handoffs.
//! - [`global`] – ping-pong queue rounds that walk the remaining chains
//!   across tile boundaries, one hop per round, until a round promotes
//!   nothing.
//!
//! Promotion is a compare-and-swap in the map, so the final strong set is
//! the same for any tile size and scheduling order.

pub mod global;
pub mod local;
pub mod queue;

pub use global::link_global;
pub use local::{TILE_EDGE, link_local};
pub use queue::PixelQueue;
