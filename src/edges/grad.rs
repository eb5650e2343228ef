//! Derivative and magnitude stage.
//!
//! - Evaluates a fixed 3×3 Sobel stencil against the backing image with the
//!   region offset applied, so a region-of-interest input samples its real
//!   neighbours; index clamping (replicate) happens only at the true image
//!   border.
//! - Magnitude is either Euclidean `sqrt(dx² + dy²)` or L1 `|dx| + |dy|`,
//!   selected by the detector's `l2_gradient` flag. Thresholds downstream
//!   compare against this magnitude directly in both modes.
//! - [`DerivFilter`] is the seam for external separable filters serving
//!   aperture sizes the built-in stencil does not.
//!
//! Rows are processed in parallel; each output row touches three input rows.
use crate::error::CannyError;
use crate::image::{GradientI32, GridI32, ImageF32, ImageU8, ImageView, Roi};
use rayon::prelude::*;

/// External derivative filter used for aperture sizes other than 3.
///
/// Implementations fill `dx`/`dy`, which are pre-sized to the region extent.
/// Sampling follows the same contract as the built-in stencil: taps outside
/// the region read the backing image, taps outside the image replicate the
/// border.
pub trait DerivFilter {
    fn derivatives(
        &self,
        whole: &ImageU8<'_>,
        roi: Roi,
        aperture_size: u32,
        dx: &mut GridI32,
        dy: &mut GridI32,
    ) -> Result<(), CannyError>;
}

/// Compute 3×3 Sobel derivatives of `roi` into pre-sized `dx`/`dy` grids.
pub fn sobel_gradients_into(whole: &ImageU8<'_>, roi: Roi, dx: &mut GridI32, dy: &mut GridI32) {
    let w = roi.w;
    let h = roi.h;
    debug_assert_eq!((dx.w, dx.h), (w, h));
    debug_assert_eq!((dy.w, dy.h), (w, h));
    if w == 0 || h == 0 {
        return;
    }

    dx.data[..w * h]
        .par_chunks_mut(w)
        .zip(dy.data[..w * h].par_chunks_mut(w))
        .enumerate()
        .for_each(|(y, (dx_row, dy_row))| {
            let cy = roi.y + y;
            let y_idx = [cy.saturating_sub(1), cy, (cy + 1).min(whole.h - 1)];
            let rows = [whole.row(y_idx[0]), whole.row(y_idx[1]), whole.row(y_idx[2])];
            for x in 0..w {
                let cx = roi.x + x;
                let left = cx.saturating_sub(1);
                let right = (cx + 1).min(whole.w - 1);

                let tl = rows[0][left] as i32;
                let tc = rows[0][cx] as i32;
                let tr = rows[0][right] as i32;
                let ml = rows[1][left] as i32;
                let mr = rows[1][right] as i32;
                let bl = rows[2][left] as i32;
                let bc = rows[2][cx] as i32;
                let br = rows[2][right] as i32;

                dx_row[x] = (tr + 2 * mr + br) - (tl + 2 * ml + bl);
                dy_row[x] = (bl + 2 * bc + br) - (tl + 2 * tc + tr);
            }
        });
}

/// Combine derivative grids into a magnitude field.
pub fn magnitude_into(dx: &GradientI32<'_>, dy: &GradientI32<'_>, l2: bool, mag: &mut ImageF32) {
    let w = mag.w;
    let h = mag.h;
    debug_assert_eq!((dx.w, dx.h), (w, h));
    debug_assert_eq!((dy.w, dy.h), (w, h));
    if w == 0 || h == 0 {
        return;
    }

    mag.data[..w * h]
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, out)| {
            let dx_row = dx.row(y);
            let dy_row = dy.row(y);
            if l2 {
                for x in 0..w {
                    let gx = dx_row[x] as f64;
                    let gy = dy_row[x] as f64;
                    out[x] = (gx * gx + gy * gy).sqrt() as f32;
                }
            } else {
                for x in 0..w {
                    let sum = (dx_row[x] as i64).unsigned_abs() + (dy_row[x] as i64).unsigned_abs();
                    out[x] = sum as f32;
                }
            }
        });
}
