//! Gradient-magnitude field.
//!
//! Owned by the detector workspace and recomputed every call. Tightly
//! packed, so the row stride always equals the width; `reset` keeps the
//! allocation when the new frame fits in it.
#[derive(Clone, Debug)]
pub struct ImageF32 {
    /// Field width in pixels
    pub w: usize,
    /// Field height in pixels
    pub h: usize,
    /// Backing storage, row-major, exactly `w * h` elements
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Construct a zero-filled field of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0.0; w * h],
        }
    }

    /// Re-dimension to `w × h`, reusing the allocation when possible.
    pub fn reset(&mut self, w: usize, h: usize) {
        self.w = w;
        self.h = h;
        self.data.resize(w * h, 0.0);
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.w + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = y * self.w + x;
        self.data[i] = v;
    }
}

impl crate::image::traits::ImageView for ImageF32 {
    type Pixel = f32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.w
    }
    #[inline]
    fn row(&self, y: usize) -> &[f32] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}
