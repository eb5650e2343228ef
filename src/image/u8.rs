/// Borrowed single-channel 8-bit input view.
///
/// `stride` counts bytes between row starts and may exceed `w` when the
/// view aliases part of a larger allocation. The detector validates the
/// layout before any stage touches the data.
#[derive(Clone, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize,
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    /// Sample with coordinates clamped to the image bounds (replicate border).
    /// An empty view reads as zero.
    #[inline]
    pub fn get_clamped(&self, x: isize, y: isize) -> u8 {
        if self.w == 0 || self.h == 0 {
            return 0;
        }
        let cx = x.clamp(0, self.w as isize - 1) as usize;
        let cy = y.clamp(0, self.h as isize - 1) as usize;
        self.get(cx, cy)
    }
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
    type Pixel = u8;

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
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

/// Sub-rectangle of a backing image, in backing-image coordinates.
///
/// Stages that run on a region still sample the backing buffer, so stencil
/// taps just outside the region read real pixels; replication applies only
/// at the true image border.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Roi {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
}

impl Roi {
    /// Region covering a whole `w × h` image.
    #[inline]
    pub fn full(w: usize, h: usize) -> Self {
        Self { x: 0, y: 0, w, h }
    }

    /// True when the region lies inside a `w × h` image.
    #[inline]
    pub fn fits(&self, w: usize, h: usize) -> bool {
        self.x.checked_add(self.w).is_some_and(|r| r <= w)
            && self.y.checked_add(self.h).is_some_and(|b| b <= h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_sampling_replicates_the_border() {
        let data = [1u8, 2, 3, 4];
        let img = ImageU8 {
            w: 2,
            h: 2,
            stride: 2,
            data: &data,
        };
        assert_eq!(img.get_clamped(-3, 0), 1);
        assert_eq!(img.get_clamped(5, -2), 2);
        assert_eq!(img.get_clamped(1, 7), 4);
    }

    #[test]
    fn clamped_sampling_of_an_empty_view_reads_zero() {
        let empty = ImageU8 {
            w: 0,
            h: 0,
            stride: 0,
            data: &[],
        };
        assert_eq!(empty.get_clamped(0, 0), 0);
        assert_eq!(empty.get_clamped(-1, 3), 0);

        let no_rows = ImageU8 {
            w: 3,
            h: 0,
            stride: 3,
            data: &[],
        };
        assert_eq!(no_rows.get_clamped(1, 0), 0);
    }
}
