//! Hysteresis phase one: intra-tile candidate promotion.
//!
//! The classification map is partitioned into square tiles processed in
//! parallel. Each tile seeds a worklist with its strong pixels and flood
//! fills 8-connected candidates within the tile; the compare-and-swap in
//! the map guarantees every promoted pixel re-enters the worklist exactly
//! once. Strong pixels that still see a candidate neighbour outside the
//! tile (which places them on the tile border ring) are handed to the
//! cross-tile queue for phase two, once each.
use crate::edges::map::{ClassMap, PixelClass};
use crate::link::queue::PixelQueue;
use rayon::prelude::*;

/// Tile edge used by the detector pipeline.
pub const TILE_EDGE: usize = 32;

/// Run phase one over every tile, filling `cross` with border handoffs.
pub fn link_local(map: &ClassMap, cross: &PixelQueue, tile_edge: usize) {
    let w = map.width();
    let h = map.height();
    debug_assert!(tile_edge >= 1);
    if w == 0 || h == 0 {
        return;
    }

    let tiles_x = w.div_ceil(tile_edge);
    let tiles_y = h.div_ceil(tile_edge);
    (0..tiles_x * tiles_y).into_par_iter().for_each(|tile| {
        let tx = tile % tiles_x;
        let ty = tile / tiles_x;
        link_tile(map, cross, tile_edge, tx, ty);
    });
}

fn link_tile(map: &ClassMap, cross: &PixelQueue, tile_edge: usize, tx: usize, ty: usize) {
    let w = map.width();
    let h = map.height();
    let x0 = tx * tile_edge;
    let y0 = ty * tile_edge;
    let x1 = (x0 + tile_edge).min(w);
    let y1 = (y0 + tile_edge).min(h);

    let mut work: Vec<u32> = Vec::with_capacity((x1 - x0) * (y1 - y0));
    for y in y0..y1 {
        let base = y * w;
        for x in x0..x1 {
            if map.get(base + x) == PixelClass::Strong {
                work.push((base + x) as u32);
            }
        }
    }

    // Every strong pixel of the tile passes through the worklist exactly
    // once: seeds are scanned once, and promotions are pushed only by the
    // thread that won the compare-and-swap.
    while let Some(idx) = work.pop() {
        let idx = idx as usize;
        let x = idx % w;
        let y = idx / w;

        let mut candidate_outside = false;
        for ny in y.saturating_sub(1)..=(y + 1).min(h - 1) {
            for nx in x.saturating_sub(1)..=(x + 1).min(w - 1) {
                if nx == x && ny == y {
                    continue;
                }
                let nidx = ny * w + nx;
                if nx >= x0 && nx < x1 && ny >= y0 && ny < y1 {
                    if map.get(nidx) == PixelClass::Candidate && map.promote(nidx) {
                        work.push(nidx as u32);
                    }
                } else if map.get(nidx) == PixelClass::Candidate {
                    // Out-of-tile neighbour, so this pixel sits on the ring.
                    candidate_outside = true;
                }
            }
        }
        if candidate_outside {
            cross.push(idx as u32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_with(w: usize, h: usize, strong: &[(usize, usize)], cand: &[(usize, usize)]) -> ClassMap {
        let mut map = ClassMap::new();
        map.reset(w, h);
        for &(x, y) in strong {
            map.set(map.idx(x, y), PixelClass::Strong);
        }
        for &(x, y) in cand {
            map.set(map.idx(x, y), PixelClass::Candidate);
        }
        map
    }

    #[test]
    fn promotes_chain_within_tile() {
        let map = map_with(8, 8, &[(1, 1)], &[(2, 2), (3, 3), (4, 4), (6, 6)]);
        let mut cross = PixelQueue::new();
        cross.reset(64);
        link_local(&map, &cross, 8);

        for (x, y) in [(2, 2), (3, 3), (4, 4)] {
            assert_eq!(map.get(map.idx(x, y)), PixelClass::Strong, "({x},{y})");
        }
        // (6,6) is not 8-connected to the chain.
        assert_eq!(map.get(map.idx(6, 6)), PixelClass::Candidate);
        assert!(cross.is_empty(), "single tile produces no handoffs");
    }

    #[test]
    fn hands_off_ring_pixels_with_outside_candidates() {
        // Two 4-wide tiles; the strong pixel promotes up to the tile edge
        // and the chain continues in the right tile.
        let map = map_with(8, 4, &[(1, 1)], &[(2, 1), (3, 1), (4, 1), (5, 1)]);
        let mut cross = PixelQueue::new();
        cross.reset(32);
        link_local(&map, &cross, 4);

        assert_eq!(map.get(map.idx(3, 1)), PixelClass::Strong);
        assert_eq!(
            map.get(map.idx(4, 1)),
            PixelClass::Candidate,
            "phase one never crosses the tile boundary"
        );
        assert_eq!(cross.len(), 1, "exactly one ring handoff");
    }

    #[test]
    fn isolated_candidates_stay_candidates() {
        let map = map_with(6, 6, &[], &[(2, 2), (3, 2)]);
        let mut cross = PixelQueue::new();
        cross.reset(36);
        link_local(&map, &cross, 6);

        assert_eq!(map.count(PixelClass::Strong), 0);
        assert_eq!(map.count(PixelClass::Candidate), 2);
        assert!(cross.is_empty());
    }
}
