//! Detector pipeline driving edge detection end-to-end.
//!
//! [`CannyDetector`] exposes a simple API: feed an 8-bit grayscale image
//! (or precomputed derivative grids) and get a binary edge mask. Internally
//! it validates the inputs, sizes the workspace, and runs the stages in
//! order: derivatives, magnitude, classification, tile-local linking,
//! global linking, extraction. Each stage finishes across the whole frame
//! before the next starts, and a failing call never produces a partial
//! mask.
//!
//! Typical usage:
//! ```no_run
//! use canny_detector::{CannyDetector, CannyParams};
//! use canny_detector::image::ImageU8;
//!
//! # fn example(gray: ImageU8) -> Result<(), canny_detector::CannyError> {
//! let mut detector = CannyDetector::new(CannyParams::default());
//! let mask = detector.detect(gray)?;
//! println!("edge pixels: {}", mask.count_edges());
//! # Ok(())
//! # }
//! ```
use super::params::CannyParams;
use super::workspace::DetectorWorkspace;
use crate::edges::{
    ClassMap, DerivFilter, PixelClass, classify_edges, extract_mask, magnitude_into,
    sobel_gradients_into,
};
use crate::error::CannyError;
use crate::image::{EdgeMask, GradientI32, ImageF32, ImageU8, Roi, strided_layout_fits};
use crate::link::{PixelQueue, TILE_EDGE, link_global, link_local};
use log::debug;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Per-stage wall-clock timings for one detector call.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTimings {
    /// Derivative filtering plus magnitude.
    pub gradient_ms: f64,
    pub classify_ms: f64,
    pub link_local_ms: f64,
    pub link_global_ms: f64,
    pub extract_ms: f64,
    pub total_ms: f64,
}

/// Mask plus diagnostics returned by [`CannyDetector::detect_with_trace`].
#[derive(Debug)]
pub struct CannyResult {
    pub mask: EdgeMask,
    pub timings: StageTimings,
    /// Rounds executed by the global linking phase, including the closing
    /// round that promoted nothing.
    pub global_rounds: usize,
}

/// Canny edge detector with reusable internal buffers.
///
/// The detector owns every intermediate grid and queue, so one instance
/// processes a stream of frames without reallocating once the largest
/// resolution has been seen.
pub struct CannyDetector {
    params: CannyParams,
    workspace: DetectorWorkspace,
    deriv_filter: Option<Box<dyn DerivFilter>>,
}

impl CannyDetector {
    /// Create a detector with the supplied parameters.
    pub fn new(params: CannyParams) -> Self {
        Self {
            params,
            workspace: DetectorWorkspace::new(),
            deriv_filter: None,
        }
    }

    /// Create a detector that delegates derivative filtering to `filter`
    /// for aperture sizes other than 3.
    pub fn with_deriv_filter(params: CannyParams, filter: Box<dyn DerivFilter>) -> Self {
        Self {
            params,
            workspace: DetectorWorkspace::new(),
            deriv_filter: Some(filter),
        }
    }

    /// Current parameters.
    pub fn params(&self) -> &CannyParams {
        &self.params
    }

    /// Update the lower hysteresis threshold.
    pub fn set_low_threshold(&mut self, low: f64) {
        self.params.low_threshold = low;
    }

    /// Update the upper hysteresis threshold.
    pub fn set_high_threshold(&mut self, high: f64) {
        self.params.high_threshold = high;
    }

    /// Update the derivative aperture size.
    pub fn set_aperture_size(&mut self, aperture: u32) {
        self.params.aperture_size = aperture;
    }

    /// Switch between Euclidean and absolute-sum gradient magnitude.
    pub fn set_l2_gradient(&mut self, l2: bool) {
        self.params.l2_gradient = l2;
    }

    /// Replace the whole parameter set, e.g. after restoring a record.
    pub fn set_params(&mut self, params: CannyParams) {
        self.params = params;
    }

    /// Detect edges over a whole image.
    pub fn detect(&mut self, image: ImageU8<'_>) -> Result<EdgeMask, CannyError> {
        let roi = Roi::full(image.w, image.h);
        Ok(self.run(&image, roi)?.mask)
    }

    /// Detect edges over `roi` of a larger backing image.
    ///
    /// The mask has the region's extent. Derivative taps just outside the
    /// region read real pixels of the backing image, so results near the
    /// region boundary match a full-frame run; border replication applies
    /// only at the true image border.
    pub fn detect_roi(&mut self, whole: ImageU8<'_>, roi: Roi) -> Result<EdgeMask, CannyError> {
        Ok(self.run(&whole, roi)?.mask)
    }

    /// Detect edges and report per-stage timings and linking rounds.
    pub fn detect_with_trace(&mut self, image: ImageU8<'_>) -> Result<CannyResult, CannyError> {
        let roi = Roi::full(image.w, image.h);
        self.run(&image, roi)
    }

    /// Detect edges from caller-supplied derivative grids, skipping the
    /// filtering stage. The aperture setting is not consulted on this path.
    pub fn detect_from_gradients(
        &mut self,
        dx: GradientI32<'_>,
        dy: GradientI32<'_>,
    ) -> Result<EdgeMask, CannyError> {
        ensure_linking_support()?;
        // Views can be built from public fields, bypassing `from_slice`, so
        // their layout is checked here as well.
        validate_gradient(&dx)?;
        validate_gradient(&dy)?;
        if (dx.w, dx.h) != (dy.w, dy.h) {
            return Err(CannyError::GradientSizeMismatch {
                expected: (dx.w, dx.h),
                actual: (dy.w, dy.h),
            });
        }
        ensure_indexable(dx.w, dx.h, dx.stride, dx.data.len())?;

        let total_start = Instant::now();
        let ws = &mut self.workspace;
        ws.reset_shared(dx.w, dx.h);
        let (mask, _, rounds) = run_linked_stages(
            &dx,
            &dy,
            &self.params,
            &mut ws.mag,
            &ws.map,
            &ws.queue_a,
            &ws.queue_b,
        );
        debug!(
            "CannyDetector::detect_from_gradients: {}x{} rounds={} in {:.3} ms",
            dx.w,
            dx.h,
            rounds,
            total_start.elapsed().as_secs_f64() * 1000.0
        );
        Ok(mask)
    }

    fn run(&mut self, whole: &ImageU8<'_>, roi: Roi) -> Result<CannyResult, CannyError> {
        ensure_linking_support()?;
        validate_image(whole)?;
        if !roi.fits(whole.w, whole.h) {
            return Err(CannyError::RoiOutOfBounds {
                x: roi.x,
                y: roi.y,
                width: roi.w,
                height: roi.h,
                image_width: whole.w,
                image_height: whole.h,
            });
        }
        ensure_indexable(roi.w, roi.h, whole.stride, whole.data.len())?;
        let aperture = self.params.aperture_size;
        if !matches!(aperture, 3 | 5 | 7) {
            return Err(CannyError::UnsupportedAperture { aperture });
        }

        let total_start = Instant::now();
        let ws = &mut self.workspace;
        ws.reset(roi.w, roi.h);

        let deriv_start = Instant::now();
        if aperture == 3 {
            sobel_gradients_into(whole, roi, &mut ws.dx, &mut ws.dy);
        } else {
            let filter = self
                .deriv_filter
                .as_ref()
                .ok_or(CannyError::UnsupportedAperture { aperture })?;
            filter.derivatives(whole, roi, aperture, &mut ws.dx, &mut ws.dy)?;
        }
        let deriv_ms = deriv_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "CannyDetector::detect: derivatives {}x{} aperture={} in {:.3} ms",
            roi.w, roi.h, aperture, deriv_ms
        );

        let dx_view = ws.dx.as_view();
        let dy_view = ws.dy.as_view();
        let (mask, mut timings, global_rounds) = run_linked_stages(
            &dx_view,
            &dy_view,
            &self.params,
            &mut ws.mag,
            &ws.map,
            &ws.queue_a,
            &ws.queue_b,
        );
        timings.gradient_ms += deriv_ms;
        timings.total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "CannyDetector::detect: done edges={} rounds={} latency_ms={:.3}",
            mask.count_edges(),
            global_rounds,
            timings.total_ms
        );

        Ok(CannyResult {
            mask,
            timings,
            global_rounds,
        })
    }
}

/// Magnitude, classification, both linking phases and extraction. Shared by
/// the image entry points and [`CannyDetector::detect_from_gradients`].
fn run_linked_stages(
    dx: &GradientI32<'_>,
    dy: &GradientI32<'_>,
    params: &CannyParams,
    mag: &mut ImageF32,
    map: &ClassMap,
    queue_a: &PixelQueue,
    queue_b: &PixelQueue,
) -> (EdgeMask, StageTimings, usize) {
    let (low, high) = params.effective_thresholds();
    let (low, high) = (low as f32, high as f32);
    let (w, h) = (dx.w, dx.h);

    let mag_start = Instant::now();
    magnitude_into(dx, dy, params.l2_gradient, mag);
    let gradient_ms = mag_start.elapsed().as_secs_f64() * 1000.0;

    let classify_start = Instant::now();
    classify_edges(dx, dy, mag, map, low, high);
    let classify_ms = classify_start.elapsed().as_secs_f64() * 1000.0;
    debug!(
        "CannyDetector::classify: strong={} candidates={}",
        map.count(PixelClass::Strong),
        map.count(PixelClass::Candidate)
    );

    let local_start = Instant::now();
    link_local(map, queue_a, TILE_EDGE);
    let link_local_ms = local_start.elapsed().as_secs_f64() * 1000.0;
    debug!(
        "CannyDetector::link_local: handoffs={} strong={}",
        queue_a.len(),
        map.count(PixelClass::Strong)
    );

    let global_start = Instant::now();
    let global_rounds = link_global(map, queue_a, queue_b);
    let link_global_ms = global_start.elapsed().as_secs_f64() * 1000.0;

    let extract_start = Instant::now();
    let mut mask = EdgeMask::new(w, h);
    extract_mask(map, &mut mask);
    let extract_ms = extract_start.elapsed().as_secs_f64() * 1000.0;

    let timings = StageTimings {
        gradient_ms,
        classify_ms,
        link_local_ms,
        link_global_ms,
        extract_ms,
        total_ms: 0.0,
    };
    (mask, timings, global_rounds)
}

fn ensure_linking_support() -> Result<(), CannyError> {
    if cfg!(target_has_atomic = "32") {
        Ok(())
    } else {
        Err(CannyError::MissingAtomicSupport)
    }
}

fn validate_image(img: &ImageU8<'_>) -> Result<(), CannyError> {
    if strided_layout_fits(img.w, img.h, img.stride, img.data.len()) {
        Ok(())
    } else {
        Err(CannyError::InvalidImageLayout {
            width: img.w,
            height: img.h,
            stride: img.stride,
            len: img.data.len(),
        })
    }
}

fn validate_gradient(grad: &GradientI32<'_>) -> Result<(), CannyError> {
    if strided_layout_fits(grad.w, grad.h, grad.stride, grad.data.len()) {
        Ok(())
    } else {
        Err(CannyError::InvalidImageLayout {
            width: grad.w,
            height: grad.h,
            stride: grad.stride,
            len: grad.data.len(),
        })
    }
}

/// Work-queue entries pack pixel indices into 32 bits; reject frames whose
/// area leaves that index domain.
fn ensure_indexable(w: usize, h: usize, stride: usize, len: usize) -> Result<(), CannyError> {
    let indexable = w
        .checked_mul(h)
        .is_some_and(|area| u32::try_from(area).is_ok());
    if indexable {
        Ok(())
    } else {
        Err(CannyError::InvalidImageLayout {
            width: w,
            height: h,
            stride,
            len,
        })
    }
}
