use canny_detector::image::ImageU8;
use canny_detector::{CannyDetector, CannyParams};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn build_slanted_u8(width: usize, height: usize) -> Vec<u8> {
    let theta = 20.0f32.to_radians();
    let nx = theta.cos();
    let ny = theta.sin();
    let t = nx * (0.5 * width as f32) + ny * (0.5 * height as f32);

    let mut data = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let d = nx * x as f32 + ny * y as f32 - t;
            data[y * width + x] = if d >= 0.0 { 220 } else { 30 };
        }
    }
    data
}

fn bench_detect_u8(c: &mut Criterion) {
    let width = 1280usize;
    let height = 1024usize;
    let data = build_slanted_u8(width, height);
    let mut det = CannyDetector::new(CannyParams::default());

    c.bench_function("canny_detect_u8_1280x1024", |b| {
        b.iter(|| {
            let img = ImageU8 {
                w: width,
                h: height,
                stride: width,
                data: &data,
            };
            let mask = det.detect(black_box(img)).expect("valid frame");
            black_box(mask.count_edges());
        });
    });
}

fn bench_detect_l2_u8(c: &mut Criterion) {
    let width = 1280usize;
    let height = 1024usize;
    let data = build_slanted_u8(width, height);
    let mut det = CannyDetector::new(CannyParams {
        l2_gradient: true,
        ..Default::default()
    });

    c.bench_function("canny_detect_l2_u8_1280x1024", |b| {
        b.iter(|| {
            let img = ImageU8 {
                w: width,
                h: height,
                stride: width,
                data: &data,
            };
            let mask = det.detect(black_box(img)).expect("valid frame");
            black_box(mask.count_edges());
        });
    });
}

criterion_group!(benches, bench_detect_u8, bench_detect_l2_u8);
criterion_main!(benches);
