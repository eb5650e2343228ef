//! Hysteresis phase two: cross-tile propagation over ping-pong queues.
//!
//! Each round drains the input queue in parallel and promotes candidate
//! neighbours of the queued pixels one neighbourhood hop outward; the
//! compare-and-swap winners append the promoted pixels to the output queue
//! for the next round. Rounds are separated by the fork-join barrier of the
//! parallel drain. The phase ends when a round promotes nothing. Total work
//! stays bounded by the image area because every pixel is promoted, and
//! therefore queued, at most once.
use crate::edges::map::{ClassMap, PixelClass};
use crate::link::queue::PixelQueue;
use log::debug;
use rayon::prelude::*;
use std::sync::atomic::Ordering;

/// Run phase two until the fixed point. Returns the number of executed
/// rounds, including the final round that promoted nothing.
pub fn link_global(map: &ClassMap, queue_a: &PixelQueue, queue_b: &PixelQueue) -> usize {
    let w = map.width();
    let h = map.height();
    let mut input = queue_a;
    let mut output = queue_b;
    let mut rounds = 0usize;

    while !input.is_empty() {
        rounds += 1;
        output.clear();
        input.entries().par_iter().for_each(|slot| {
            let idx = slot.load(Ordering::Relaxed) as usize;
            let x = idx % w;
            let y = idx / w;
            for ny in y.saturating_sub(1)..=(y + 1).min(h - 1) {
                for nx in x.saturating_sub(1)..=(x + 1).min(w - 1) {
                    if nx == x && ny == y {
                        continue;
                    }
                    let nidx = ny * w + nx;
                    if map.get(nidx) == PixelClass::Candidate && map.promote(nidx) {
                        output.push(nidx as u32);
                    }
                }
            }
        });
        debug!("Hysteresis: round {rounds} promoted {}", output.len());
        std::mem::swap(&mut input, &mut output);
    }

    rounds
}
