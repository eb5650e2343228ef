//! Final extraction of the binary mask from the classification map.
//!
//! Strong cells become 255, candidates that were never promoted are
//! suppressed along with no-edge cells. The pass is a pure function of the
//! map, so running it twice yields the same mask.
use crate::edges::map::{ClassMap, PixelClass};
use rayon::prelude::*;

use crate::image::EdgeMask;

/// Fill `mask` with 0/255 from the final classification.
pub fn extract_mask(map: &ClassMap, mask: &mut EdgeMask) {
    let w = map.width();
    let h = map.height();
    debug_assert_eq!((mask.w, mask.h), (w, h));
    if w == 0 || h == 0 {
        return;
    }

    mask.data[..w * h]
        .par_chunks_mut(w)
        .enumerate()
        .for_each(|(y, row)| {
            let base = y * w;
            for (x, out) in row.iter_mut().enumerate() {
                *out = if map.get(base + x) == PixelClass::Strong {
                    255
                } else {
                    0
                };
            }
        });
}
