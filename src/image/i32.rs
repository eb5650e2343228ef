//! Signed 32-bit derivative grids.
//!
//! `GridI32` is the owned, tightly packed variant the detector keeps in its
//! workspace and external derivative filters fill; `GradientI32` is a
//! borrowed, possibly strided view used for caller-supplied derivatives.
use crate::error::CannyError;

/// Owned i32 grid in row-major layout, exactly `w * h` elements.
#[derive(Clone, Debug)]
pub struct GridI32 {
    /// Grid width in pixels
    pub w: usize,
    /// Grid height in pixels
    pub h: usize,
    /// Backing storage in row-major order
    pub data: Vec<i32>,
}

impl GridI32 {
    /// Construct a zero-initialized grid of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0; w * h],
        }
    }

    /// Re-dimension to `w × h`, reusing the allocation when possible.
    pub fn reset(&mut self, w: usize, h: usize) {
        self.w = w;
        self.h = h;
        self.data.resize(w * h, 0);
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> i32 {
        self.data[y * self.w + x]
    }

    /// Borrow as a read-only derivative view.
    #[inline]
    pub fn as_view(&self) -> GradientI32<'_> {
        GradientI32 {
            w: self.w,
            h: self.h,
            stride: self.w,
            data: &self.data,
        }
    }
}

impl crate::image::traits::ImageView for GridI32 {
    type Pixel = i32;

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
    fn row(&self, y: usize) -> &[i32] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

impl crate::image::traits::ImageViewMut for GridI32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [i32] {
        let start = y * self.w;
        let end = start + self.w;
        &mut self.data[start..end]
    }

    fn rows_mut(&mut self) -> std::slice::ChunksMut<'_, i32> {
        self.data.chunks_mut(self.w.max(1))
    }
}

/// Borrowed i32 derivative view with an explicit row stride.
#[derive(Clone, Copy, Debug)]
pub struct GradientI32<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize,
    pub data: &'a [i32],
}

impl<'a> GradientI32<'a> {
    /// Wrap a caller-supplied slice, validating the strided layout.
    pub fn from_slice(
        w: usize,
        h: usize,
        stride: usize,
        data: &'a [i32],
    ) -> Result<Self, CannyError> {
        if !crate::image::strided_layout_fits(w, h, stride, data.len()) {
            return Err(CannyError::InvalidImageLayout {
                width: w,
                height: h,
                stride,
                len: data.len(),
            });
        }
        Ok(Self { w, h, stride, data })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> i32 {
        self.data[y * self.stride + x]
    }
}

impl<'a> crate::image::traits::ImageView for GradientI32<'a> {
    type Pixel = i32;

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
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[i32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}
