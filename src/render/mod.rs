//! Rendering module.
//!
//! Two pure renderers over the same snapshot view: a PNG heatmap for
//! transports that carry images, and an ANSI string view for terminals.
//! Both take the color gradient as a swappable strategy.
//!
//! Goals:
//! - Keep `core` free of any pixel or escape-code concerns
//! - Byte-identical output for identical snapshots
//! - No I/O: callers own writing/sending the result

pub mod ansi;
pub mod color;
pub mod png;

pub use ansi::TermView;
pub use color::{BlueToRed, ColorScale, Rgb, WhiteToRed};
pub use png::Heatmap;
