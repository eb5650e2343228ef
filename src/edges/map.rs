//! Shared per-pixel classification map.
//!
//! Every stage after the gradient pass reads or writes this map. Cells hold
//! a [`PixelClass`] in a 32-bit atomic so the linking phases can promote
//! candidates from many threads at once. Promotion is monotone: a cell only
//! ever moves no-edge → candidate → strong, never back, and the
//! candidate→strong step goes through a compare-and-swap so exactly one
//! thread wins it.
//!
//! Stages are separated by fork-join barriers, so relaxed ordering is
//! sufficient for the individual cell accesses.
use std::sync::atomic::{AtomicU32, Ordering};

/// Tri-state pixel classification after NMS and double thresholding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum PixelClass {
    /// Suppressed or below the low threshold.
    NoEdge = 0,
    /// Passed NMS with magnitude in `[low, high)`; may still be promoted.
    Candidate = 1,
    /// Passed NMS with magnitude `>= high`, or promoted during linking.
    Strong = 2,
}

/// Atomic classification grid, grown lazily and reset per detector call.
pub struct ClassMap {
    w: usize,
    h: usize,
    cells: Vec<AtomicU32>,
}

impl ClassMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resize to `w × h` (keeping a larger allocation) and zero every cell.
    pub fn reset(&mut self, w: usize, h: usize) {
        self.w = w;
        self.h = h;
        let needed = w * h;
        if self.cells.len() < needed {
            self.cells.resize_with(needed, || AtomicU32::new(0));
        }
        for cell in &self.cells[..needed] {
            cell.store(0, Ordering::Relaxed);
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    /// Number of active cells (`width × height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.w * self.h
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert (x, y) to a linear cell index.
    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    pub fn get(&self, idx: usize) -> PixelClass {
        match self.cells[idx].load(Ordering::Relaxed) {
            1 => PixelClass::Candidate,
            2 => PixelClass::Strong,
            _ => PixelClass::NoEdge,
        }
    }

    #[inline]
    pub fn set(&self, idx: usize, class: PixelClass) {
        self.cells[idx].store(class as u32, Ordering::Relaxed);
    }

    /// Promote a candidate cell to strong. Returns true for the single
    /// caller that wins the compare-and-swap; false when the cell is not a
    /// candidate or another thread promoted it first.
    #[inline]
    pub fn promote(&self, idx: usize) -> bool {
        self.cells[idx]
            .compare_exchange(
                PixelClass::Candidate as u32,
                PixelClass::Strong as u32,
                Ordering::Relaxed,
                Ordering::Relaxed,
            )
            .is_ok()
    }

    /// Count active cells currently holding `class`.
    pub fn count(&self, class: PixelClass) -> usize {
        self.cells[..self.len()]
            .iter()
            .filter(|cell| cell.load(Ordering::Relaxed) == class as u32)
            .count()
    }
}

impl Default for ClassMap {
    fn default() -> Self {
        Self {
            w: 0,
            h: 0,
            cells: Vec::new(),
        }
    }
}
