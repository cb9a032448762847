//! Grid module - manages one user's hit-count matrix
//!
//! The grid is an N×N matrix of non-negative counts stored as a flat array
//! for better cache locality. Coordinates: (row, col), both zero-based,
//! row-major order. Resizing always starts over from zeros: there is no
//! well-defined remapping of old hits onto a differently sized grid, so the
//! grid resets rather than guesses.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::snapshot::GridSnapshot;
use crate::error::Error;
use crate::types::{Coordinate, DEFAULT_GRID_SIZE, MAX_GRID_SIZE};

/// One user's N×N matrix of hit counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    size: usize,
    /// Flat array of counts, row-major order (row * size + col).
    counts: Vec<u32>,
}

impl Grid {
    /// Create a grid at the default size, all zeros.
    pub fn new() -> Self {
        Self::with_size(DEFAULT_GRID_SIZE).expect("default size is within bounds")
    }

    /// Create a grid of side length `size`, all zeros.
    pub fn with_size(size: usize) -> Result<Self, Error> {
        validate_size(size)?;
        Ok(Self {
            size,
            counts: vec![0; size * size],
        })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Flat view of the counts, row-major.
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    /// Count at (row, col), or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.index(row, col).map(|idx| self.counts[idx])
    }

    /// Replace the grid with a fresh all-zero matrix of side length `size`.
    ///
    /// All prior hit history is discarded; this is intentional (see module
    /// docs). Fails with [`Error::InvalidSize`] outside `1..=MAX_GRID_SIZE`.
    pub fn set_size(&mut self, size: usize) -> Result<(), Error> {
        validate_size(size)?;
        debug!("grid resized {} -> {}, counts cleared", self.size, size);
        self.size = size;
        self.counts.clear();
        self.counts.resize(size * size, 0);
        Ok(())
    }

    /// Record one hit at a coordinate already validated against this grid's
    /// current size. Returns the new count of that cell.
    ///
    /// Counts saturate at `u32::MAX` rather than wrap; realistic hit volumes
    /// never get near that.
    pub fn record_hit(&mut self, coord: Coordinate) -> u32 {
        let idx = self
            .index(coord.row, coord.col)
            .expect("coordinate was validated against this grid's size");
        self.counts[idx] = self.counts[idx].saturating_add(1);
        self.counts[idx]
    }

    /// Return to the initial state: default size, all zeros. Idempotent.
    pub fn reset(&mut self) {
        self.set_size(DEFAULT_GRID_SIZE)
            .expect("default size is within bounds");
    }

    /// Read-only view of the current size and counts for rendering.
    pub fn snapshot(&self) -> GridSnapshot<'_> {
        GridSnapshot::new(self.size, &self.counts)
    }

    /// Counts as a `size × size` matrix of rows, for callers that want the
    /// shape rather than the flat layout.
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.counts.chunks(self.size).map(|r| r.to_vec()).collect()
    }

    /// Create from a row matrix, for tests.
    #[cfg(test)]
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Self {
        let size = rows.len();
        assert!(rows.iter().all(|r| r.len() == size));
        Self {
            size,
            counts: rows.into_iter().flatten().collect(),
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_size(size: usize) -> Result<(), Error> {
    if size < 1 || size > MAX_GRID_SIZE {
        return Err(Error::InvalidSize {
            requested: size,
            max: MAX_GRID_SIZE,
        });
    }
    Ok(())
}

/// Wire shape for deserialization; re-checks the size/len invariant so a
/// hand-edited or truncated snapshot cannot produce a malformed grid.
#[derive(Deserialize)]
struct RawGrid {
    size: usize,
    counts: Vec<u32>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = String;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        if raw.size < 1 || raw.size > MAX_GRID_SIZE {
            return Err(format!("grid size {} out of range", raw.size));
        }
        if raw.counts.len() != raw.size * raw.size {
            return Err(format!(
                "count matrix has {} entries, expected {}",
                raw.counts.len(),
                raw.size * raw.size
            ));
        }
        Ok(Self {
            size: raw.size,
            counts: raw.counts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_calculation() {
        let grid = Grid::with_size(4).unwrap();
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(0, 3), Some(3));
        assert_eq!(grid.index(1, 0), Some(4));
        assert_eq!(grid.index(3, 3), Some(15));
        assert_eq!(grid.index(4, 0), None);
        assert_eq!(grid.index(0, 4), None);
    }

    #[test]
    fn record_hit_returns_running_count() {
        let mut grid = Grid::with_size(3).unwrap();
        let coord = Coordinate { row: 1, col: 2 };
        assert_eq!(grid.record_hit(coord), 1);
        assert_eq!(grid.record_hit(coord), 2);
        assert_eq!(grid.get(1, 2), Some(2));
    }

    #[test]
    fn rows_roundtrip() {
        let rows = vec![vec![0, 1], vec![2, 3]];
        let grid = Grid::from_rows(rows.clone());
        assert_eq!(grid.to_rows(), rows);
    }

    #[test]
    fn deserialization_rejects_mismatched_counts() {
        let err = serde_json::from_str::<Grid>(r#"{"size":3,"counts":[0,0]}"#);
        assert!(err.is_err());
    }

    #[test]
    fn serialization_roundtrip() {
        let mut grid = Grid::with_size(2).unwrap();
        grid.record_hit(Coordinate { row: 0, col: 1 });
        let json = serde_json::to_string(&grid).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }
}
