//! Read-only view of a grid handed to the renderers.
//!
//! Borrowing instead of copying keeps render calls allocation-free on the
//! input side and makes it impossible to mutate the grid through the view.

/// Borrowed size + counts of one grid at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSnapshot<'a> {
    size: usize,
    counts: &'a [u32],
}

impl<'a> GridSnapshot<'a> {
    pub(crate) fn new(size: usize, counts: &'a [u32]) -> Self {
        debug_assert_eq!(counts.len(), size * size);
        Self { size, counts }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Flat counts, row-major.
    pub fn counts(&self) -> &'a [u32] {
        self.counts
    }

    /// Count at (row, col). Panics out of bounds; the renderers only iterate
    /// `0..size`.
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.counts[row * self.size + col]
    }

    /// Normalization divisor for the color scale.
    ///
    /// Floored at 1 so an all-zero grid divides cleanly and renders every
    /// cell at the coolest color.
    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0).max(1)
    }

    /// Normalized intensity of one cell in `[0, 1]`.
    pub fn intensity(&self, row: usize, col: usize) -> f32 {
        self.get(row, col) as f32 / self.max_count() as f32
    }
}
