//! Edge classification: non-maximum suppression plus double thresholding.
//!
//! For each interior pixel the gradient direction is quantized to one of
//! four orientations from the sign and ratio of `dx`/`dy`, and the magnitude
//! is compared against the two neighbours along that direction. Survivors
//! are written to the classification map as strong (`mag >= high`) or
//! candidate (`low <= mag < high`); everything else stays no-edge.
//!
//! The outermost 1-pixel frame is never classified, which keeps neighbour
//! lookups in this pass and in the linking phases free of bounds checks.
//! Rows are processed in parallel; the map is written through relaxed
//! atomic stores.
use crate::edges::map::{ClassMap, PixelClass};
use crate::image::{GradientI32, ImageF32, ImageView};
use rayon::prelude::*;

const TAN_22_5_DEG: f32 = 0.41421356237;

/// Classify every interior pixel of `mag` into the map.
pub fn classify_edges(
    dx: &GradientI32<'_>,
    dy: &GradientI32<'_>,
    mag: &ImageF32,
    map: &ClassMap,
    low: f32,
    high: f32,
) {
    let w = mag.w;
    let h = mag.h;
    debug_assert_eq!((dx.w, dx.h), (w, h));
    debug_assert_eq!((dy.w, dy.h), (w, h));
    debug_assert_eq!((map.width(), map.height()), (w, h));
    if w < 3 || h < 3 {
        return;
    }

    (1..h - 1).into_par_iter().for_each(|y| {
        let mag_prev = mag.row(y - 1);
        let mag_row = mag.row(y);
        let mag_next = mag.row(y + 1);
        let dx_row = dx.row(y);
        let dy_row = dy.row(y);

        for x in 1..w - 1 {
            let m = mag_row[x];
            if m < low {
                continue;
            }

            let gx = dx_row[x];
            let gy = dy_row[x];
            let abs_gx = gx.unsigned_abs() as f32;
            let abs_gy = gy.unsigned_abs() as f32;
            let same_sign = (gx >= 0 && gy >= 0) || (gx <= 0 && gy <= 0);

            // neighbor1 sits on the lesser-coordinate side of the gradient
            // direction and is compared strictly; a tie against neighbor2
            // keeps the pixel. Equal-magnitude plateau pairs thus keep
            // exactly one winner.
            let (neighbor1, neighbor2) = if abs_gx >= abs_gy {
                if abs_gy <= abs_gx * TAN_22_5_DEG {
                    (mag_row[x - 1], mag_row[x + 1])
                } else if same_sign {
                    (mag_prev[x - 1], mag_next[x + 1])
                } else {
                    (mag_next[x - 1], mag_prev[x + 1])
                }
            } else if abs_gx <= abs_gy * TAN_22_5_DEG {
                (mag_prev[x], mag_next[x])
            } else if same_sign {
                (mag_prev[x - 1], mag_next[x + 1])
            } else {
                (mag_next[x - 1], mag_prev[x + 1])
            };

            if m <= neighbor1 || m < neighbor2 {
                continue;
            }

            let class = if m >= high {
                PixelClass::Strong
            } else {
                PixelClass::Candidate
            };
            map.set(y * w + x, class);
        }
    });
}
