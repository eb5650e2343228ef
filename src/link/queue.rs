//! Ping-pong work queue for cross-tile hysteresis.
//!
//! Entries are packed linear pixel indices (`y * width + x`). Producers
//! reserve a slot with an atomic counter increment and then store the index,
//! so many threads can append without locking. Capacity is the image area;
//! every pixel is queued at most once per generation, which keeps the
//! counter within bounds.
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

/// Lazily grown append-only queue of pixel indices.
pub struct PixelQueue {
    slots: Vec<AtomicU32>,
    len: AtomicUsize,
}

impl PixelQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grow to at least `capacity` slots and empty the queue.
    pub fn reset(&mut self, capacity: usize) {
        if self.slots.len() < capacity {
            self.slots.resize_with(capacity, || AtomicU32::new(0));
        }
        self.len.store(0, Ordering::Relaxed);
    }

    /// Empty the queue without touching the slots.
    pub fn clear(&self) {
        self.len.store(0, Ordering::Relaxed);
    }

    /// Append a pixel index. Callers guarantee one push per pixel per
    /// generation, so the reserved slot always exists.
    #[inline]
    pub fn push(&self, idx: u32) {
        let slot = self.len.fetch_add(1, Ordering::Relaxed);
        self.slots[slot].store(idx, Ordering::Relaxed);
    }

    pub fn len(&self) -> usize {
        self.len.load(Ordering::Relaxed).min(self.slots.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The filled prefix of the queue.
    pub fn entries(&self) -> &[AtomicU32] {
        &self.slots[..self.len()]
    }
}

impl Default for PixelQueue {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            len: AtomicUsize::new(0),
        }
    }
}
