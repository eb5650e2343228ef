//! Detector-owned buffers reused across frames.
//!
//! Every intermediate of the pipeline lives here: the derivative grids, the
//! magnitude field, the classification map and both linking queues. Buffers
//! grow lazily to the largest frame processed so far and are re-dimensioned
//! per call; only the map cells and the queue lengths need actual zeroing.
use crate::edges::ClassMap;
use crate::image::{GridI32, ImageF32};
use crate::link::PixelQueue;

/// Workspace caching the pipeline buffers between detector calls.
pub struct DetectorWorkspace {
    pub(crate) dx: GridI32,
    pub(crate) dy: GridI32,
    pub(crate) mag: ImageF32,
    pub(crate) map: ClassMap,
    pub(crate) queue_a: PixelQueue,
    pub(crate) queue_b: PixelQueue,
}

impl DetectorWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepare every buffer for a `w × h` frame.
    pub fn reset(&mut self, w: usize, h: usize) {
        self.dx.reset(w, h);
        self.dy.reset(w, h);
        self.reset_shared(w, h);
    }

    /// Prepare the buffers shared with the precomputed-derivative entry
    /// point, leaving the unused derivative grids untouched.
    pub(crate) fn reset_shared(&mut self, w: usize, h: usize) {
        self.mag.reset(w, h);
        self.map.reset(w, h);
        self.queue_a.reset(w * h);
        self.queue_b.reset(w * h);
    }
}

impl Default for DetectorWorkspace {
    fn default() -> Self {
        Self {
            dx: GridI32::new(0, 0),
            dy: GridI32::new(0, 0),
            mag: ImageF32::new(0, 0),
            map: ClassMap::new(),
            queue_a: PixelQueue::new(),
            queue_b: PixelQueue::new(),
        }
    }
}
