//! Core module - pure grid logic with no I/O dependencies
//!
//! This module contains the count matrix, the coordinate codec, and the
//! snapshot view. It has zero dependencies on rendering, sessions, or
//! transport.

pub mod coord;
pub mod grid;
pub mod snapshot;

// Re-export commonly used types
pub use crate::types::Coordinate;
pub use grid::Grid;
pub use snapshot::GridSnapshot;
