//! Binary edge mask produced by the final extraction stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeMask {
    /// Mask width in pixels
    pub w: usize,
    /// Mask height in pixels
    pub h: usize,
    /// Row-major 0/255 values, exactly `w * h` bytes
    pub data: Vec<u8>,
}

impl EdgeMask {
    /// Construct an all-zero mask of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0; w * h],
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.w + x]
    }

    /// Number of edge (255) pixels.
    pub fn count_edges(&self) -> usize {
        self.data.iter().filter(|&&v| v == 255).count()
    }
}
