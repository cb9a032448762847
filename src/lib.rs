//! heatgrid: per-session hit grids rendered as color-graded heatmaps.
//!
//! The crate is a synchronous, I/O-free engine: a command dispatcher (bot,
//! web handler, CLI — not part of this crate) resolves a user id, calls
//! [`HeatGrid`] with already-parsed commands, and sends the resulting image
//! bytes or error text wherever they need to go.
//!
//! ```
//! use heatgrid::HeatGrid;
//!
//! # fn main() -> anyhow::Result<()> {
//! let engine = HeatGrid::new();
//! engine.set_grid_size(42, 4)?;
//! engine.record_hit(42, "A1")?;
//! engine.record_hit(42, "b2")?;
//! let png = engine.render_heatmap(42)?;
//! assert!(!png.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod engine;
pub mod error;
pub mod render;
pub mod session;
pub mod types;

pub use crate::core::{Coordinate, Grid, GridSnapshot};
pub use crate::engine::HeatGrid;
pub use crate::error::Error;
pub use crate::render::{BlueToRed, ColorScale, Heatmap, Rgb, TermView, WhiteToRed};
pub use crate::session::SessionStore;
pub use crate::types::{UserId, DEFAULT_CELL_PX, DEFAULT_GRID_SIZE, MAX_GRID_SIZE};
