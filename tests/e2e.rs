mod common;

use canny_detector::edges::DerivFilter;
use canny_detector::image::{GridI32, ImageU8, ImageViewMut, Roi};
use canny_detector::{CannyConfigRecord, CannyDetector, CannyError, CannyParams};
use common::synthetic_image::{checkerboard_u8, uniform_u8, vertical_step_u8};

fn image<'a>(w: usize, h: usize, data: &'a [u8]) -> ImageU8<'a> {
    ImageU8 {
        w,
        h,
        stride: w,
        data,
    }
}

#[test]
fn uniform_image_produces_no_edges() {
    let width = 64usize;
    let height = 48usize;
    let buffer = uniform_u8(width, height, 128);

    let mut detector = CannyDetector::new(CannyParams::default());
    let mask = detector.detect(image(width, height, &buffer)).unwrap();

    assert_eq!((mask.w, mask.h), (width, height));
    assert_eq!(mask.count_edges(), 0, "flat input must stay edge-free");
}

#[test]
fn vertical_step_yields_single_edge_column() {
    let width = 8usize;
    let height = 8usize;
    // Step between columns 3 and 4; the Sobel response is an
    // equal-magnitude pair of columns and suppression keeps the left one.
    let buffer = vertical_step_u8(width, height, 4, 0, 40);

    let mut detector = CannyDetector::new(CannyParams {
        low_threshold: 10.0,
        high_threshold: 30.0,
        ..Default::default()
    });
    let mask = detector.detect(image(width, height, &buffer)).unwrap();

    for y in 0..height {
        for x in 0..width {
            let expected = if x == 3 && (1..=6).contains(&y) {
                255
            } else {
                0
            };
            assert_eq!(mask.get(x, y), expected, "pixel ({x},{y})");
        }
    }
}

#[test]
fn threshold_order_does_not_matter() {
    let width = 16usize;
    let height = 16usize;
    let buffer = vertical_step_u8(width, height, 8, 10, 90);

    let mut forward = CannyDetector::new(CannyParams {
        low_threshold: 50.0,
        high_threshold: 100.0,
        ..Default::default()
    });
    let mut reversed = CannyDetector::new(CannyParams {
        low_threshold: 100.0,
        high_threshold: 50.0,
        ..Default::default()
    });

    let mask_fwd = forward.detect(image(width, height, &buffer)).unwrap();
    let mask_rev = reversed.detect(image(width, height, &buffer)).unwrap();
    assert_eq!(mask_fwd, mask_rev);
}

#[test]
fn repeated_detection_reuses_buffers() {
    let step = vertical_step_u8(16, 16, 8, 10, 90);
    let board = checkerboard_u8(64, 48, 8);

    let mut detector = CannyDetector::new(CannyParams {
        low_threshold: 50.0,
        high_threshold: 100.0,
        ..Default::default()
    });

    let first = detector.detect(image(16, 16, &step)).unwrap();
    let second = detector.detect(image(16, 16, &step)).unwrap();
    assert_eq!(first, second, "same input must give the same mask");

    // A larger frame grows the workspace; the original frame must then
    // still produce the original mask.
    let big = detector.detect(image(64, 48, &board)).unwrap();
    assert_eq!((big.w, big.h), (64, 48));
    assert!(big.count_edges() > 0);

    let third = detector.detect(image(16, 16, &step)).unwrap();
    assert_eq!(first, third, "mask must not change after a larger frame");
}

#[test]
fn region_detection_matches_expected_column() {
    let width = 24usize;
    let height = 24usize;
    let buffer = vertical_step_u8(width, height, 12, 10, 90);

    let roi = Roi {
        x: 4,
        y: 4,
        w: 16,
        h: 16,
    };
    let mut detector = CannyDetector::new(CannyParams {
        low_threshold: 50.0,
        high_threshold: 100.0,
        ..Default::default()
    });
    let mask = detector
        .detect_roi(image(width, height, &buffer), roi)
        .unwrap();

    assert_eq!((mask.w, mask.h), (roi.w, roi.h));
    // The step sits at backing columns 11/12, i.e. local column 7.
    for y in 0..roi.h {
        for x in 0..roi.w {
            let expected = if x == 7 && (1..=14).contains(&y) {
                255
            } else {
                0
            };
            assert_eq!(mask.get(x, y), expected, "local pixel ({x},{y})");
        }
    }
}

/// Central-difference stand-in for a real separable derivative filter.
struct CentralDiff;

impl DerivFilter for CentralDiff {
    fn derivatives(
        &self,
        whole: &ImageU8<'_>,
        roi: Roi,
        _aperture_size: u32,
        dx: &mut GridI32,
        dy: &mut GridI32,
    ) -> Result<(), CannyError> {
        for y in 0..roi.h {
            let cy = (roi.y + y) as isize;
            for x in 0..roi.w {
                let cx = (roi.x + x) as isize;
                let left = whole.get_clamped(cx - 1, cy) as i32;
                let right = whole.get_clamped(cx + 1, cy) as i32;
                let up = whole.get_clamped(cx, cy - 1) as i32;
                let down = whole.get_clamped(cx, cy + 1) as i32;
                dx.row_mut(y)[x] = right - left;
                dy.row_mut(y)[x] = down - up;
            }
        }
        Ok(())
    }
}

#[test]
fn external_filter_serves_wider_apertures() {
    let width = 16usize;
    let height = 16usize;
    let buffer = vertical_step_u8(width, height, 8, 10, 90);

    let params = CannyParams {
        low_threshold: 30.0,
        high_threshold: 60.0,
        aperture_size: 5,
        ..Default::default()
    };
    let mut detector = CannyDetector::with_deriv_filter(params, Box::new(CentralDiff));
    let mask = detector.detect(image(width, height, &buffer)).unwrap();

    for y in 0..height {
        for x in 0..width {
            let expected = if x == 7 && (1..=14).contains(&y) {
                255
            } else {
                0
            };
            assert_eq!(mask.get(x, y), expected, "pixel ({x},{y})");
        }
    }
}

#[test]
fn invalid_aperture_is_rejected_even_with_a_filter() {
    let buffer = uniform_u8(8, 8, 0);
    let params = CannyParams {
        aperture_size: 4,
        ..Default::default()
    };
    let mut detector = CannyDetector::with_deriv_filter(params, Box::new(CentralDiff));
    assert_eq!(
        detector.detect(image(8, 8, &buffer)).unwrap_err(),
        CannyError::UnsupportedAperture { aperture: 4 }
    );
}

#[test]
fn precomputed_gradients_follow_weak_chains() {
    let width = 20usize;
    let height = 48usize;
    // One strong seed above a long run of weak responses in the same
    // column; the run crosses the internal tile boundary.
    let mut dx = GridI32::new(width, height);
    let dy = GridI32::new(width, height);
    for (y, row) in dx.rows_mut().enumerate() {
        if y == 2 {
            row[10] = 500;
        } else if (3..=40).contains(&y) {
            row[10] = 50;
        }
    }

    let mut detector = CannyDetector::new(CannyParams {
        low_threshold: 30.0,
        high_threshold: 400.0,
        ..Default::default()
    });
    let mask = detector
        .detect_from_gradients(dx.as_view(), dy.as_view())
        .unwrap();

    for y in 0..height {
        for x in 0..width {
            let expected = if x == 10 && (2..=40).contains(&y) {
                255
            } else {
                0
            };
            assert_eq!(mask.get(x, y), expected, "pixel ({x},{y})");
        }
    }

    // With the low threshold above the weak responses the chain never
    // forms and only the seed survives.
    detector.set_low_threshold(60.0);
    let broken = detector
        .detect_from_gradients(dx.as_view(), dy.as_view())
        .unwrap();
    assert_eq!(broken.count_edges(), 1);
    assert_eq!(broken.get(10, 2), 255);
}

#[test]
fn trace_matches_plain_detection() {
    let _ = env_logger::builder().is_test(true).try_init();

    let width = 64usize;
    let height = 48usize;
    let buffer = checkerboard_u8(width, height, 8);

    let mut traced = CannyDetector::new(CannyParams::default());
    let result = traced
        .detect_with_trace(image(width, height, &buffer))
        .unwrap();

    let mut plain = CannyDetector::new(CannyParams::default());
    let mask = plain.detect(image(width, height, &buffer)).unwrap();

    assert_eq!(result.mask, mask);
    assert!(result.mask.count_edges() > 0);
    assert!(result.timings.total_ms > 0.0);
}

#[test]
fn config_record_round_trips_through_json() {
    let params = CannyParams {
        low_threshold: 25.5,
        high_threshold: 75.25,
        aperture_size: 3,
        l2_gradient: true,
    };

    let json = serde_json::to_string(&params.to_record()).unwrap();
    let record: CannyConfigRecord = serde_json::from_str(&json).unwrap();
    let restored = CannyParams::from_record(&record).unwrap();
    assert_eq!(restored, params);

    let mut foreign = params.to_record();
    foreign.name = "other-tool".to_string();
    assert_eq!(
        CannyParams::from_record(&foreign).unwrap_err(),
        CannyError::ConfigTagMismatch {
            found: "other-tool".to_string(),
        }
    );
}
