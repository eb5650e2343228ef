use canny_detector::image::ImageU8;
use canny_detector::{CannyDetector, CannyParams};

fn main() {
    // Demo stub: runs the detector over a synthetic step image
    let w = 640usize;
    let h = 480usize;
    let stride = w; // tightly packed
    let mut gray = vec![0u8; w * h];
    for row in gray.chunks_mut(stride) {
        for v in &mut row[w / 2..] {
            *v = 200;
        }
    }
    let img = ImageU8 {
        w,
        h,
        stride,
        data: &gray,
    };

    let mut det = CannyDetector::new(CannyParams {
        low_threshold: 40.0,
        high_threshold: 120.0,
        ..Default::default()
    });
    match det.detect_with_trace(img) {
        Ok(res) => println!(
            "edges={} rounds={} latency_ms={:.3}",
            res.mask.count_edges(),
            res.global_rounds,
            res.timings.total_ms
        ),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
