//! Core types shared across the crate
//! This module contains pure data types and configuration bounds with no
//! external dependencies

/// Opaque user identifier resolved by the upstream dispatcher.
pub type UserId = u64;

/// Grid side length a fresh session starts with.
pub const DEFAULT_GRID_SIZE: usize = 6;

/// Upper bound on the grid side length.
///
/// Row labels are single letters, so 26 rows is the most the coordinate
/// encoding can address. This is a configuration bound, not a property of
/// the grid itself.
pub const MAX_GRID_SIZE: usize = 26;

/// Square pixel edge of one rendered heatmap cell.
pub const DEFAULT_CELL_PX: u32 = 50;

/// Zero-based cell address decoded from letter+number text.
///
/// Ephemeral: parsed from user input, consumed by a hit recording, never
/// stored. Validity is always relative to a specific grid size;
/// [`Coordinate::parse`](crate::core::Coordinate::parse) checks it, direct
/// construction does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    /// Label of a row index ('A' for 0, 'Z' for 25).
    ///
    /// Indices are capped at [`MAX_GRID_SIZE`] upstream, so a single letter
    /// always suffices.
    pub fn row_label(row: usize) -> char {
        debug_assert!(row < MAX_GRID_SIZE);
        (b'A' + row as u8) as char
    }

    /// Human form of this coordinate ("A1", "C7").
    pub fn label(&self) -> String {
        format!("{}{}", Self::row_label(self.row), self.col + 1)
    }
}
