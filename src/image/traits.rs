//! Row access shared by the pixel grid types.
//!
//! Read access goes through [`ImageView`], which understands strided
//! layouts so a borrowed input view can alias part of a larger backing
//! buffer. Mutable access exists only for the owned derivative grids a
//! caller fills before detection; those are always tightly packed, so
//! [`ImageViewMut::rows_mut`] is a plain chunk walk over the storage.

pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    /// Elements between consecutive row starts; `>= width()`.
    fn stride(&self) -> usize;
    /// The active pixels of row `y`, excluding any stride padding.
    fn row(&self, y: usize) -> &[Self::Pixel];
}

pub trait ImageViewMut: ImageView {
    fn row_mut(&mut self, y: usize) -> &mut [Self::Pixel];

    /// Iterate rows mutably, top to bottom. Implementations are
    /// contiguous, so rows are disjoint chunks of the backing storage.
    fn rows_mut(&mut self) -> std::slice::ChunksMut<'_, Self::Pixel>;
}
