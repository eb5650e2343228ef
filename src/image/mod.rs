//! Pixel containers and views used across the pipeline.
pub mod f32;
pub mod i32;
pub mod io;
pub mod mask;
pub mod traits;
pub mod u8;

pub use self::f32::ImageF32;
pub use self::i32::{GradientI32, GridI32};
pub use self::mask::EdgeMask;
pub use self::traits::{ImageView, ImageViewMut};
pub use self::u8::{ImageU8, Roi};

/// True when a `w × h` grid whose rows start `stride` elements apart fits
/// in a buffer of `len` elements. The extent math is overflow-checked, so
/// a fabricated header whose minimal length wraps `usize` does not fit.
pub(crate) fn strided_layout_fits(w: usize, h: usize, stride: usize, len: usize) -> bool {
    if stride < w {
        return false;
    }
    let Some(rows_above_last) = h.checked_sub(1) else {
        return true;
    };
    rows_above_last
        .checked_mul(stride)
        .and_then(|last_row_start| last_row_start.checked_add(w))
        .is_some_and(|required| required <= len)
}
