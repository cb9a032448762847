//! Terminal view: maps a grid snapshot into a labelled truecolor string.
//!
//! This module is pure (no terminal I/O): it produces a `String` with ANSI
//! escapes that the caller may print, log, or discard. Cells are two block
//! characters wide to compensate for the typical terminal glyph aspect
//! ratio.

use std::fmt::Write as _;

use crossterm::style::{Color, Stylize};

use crate::core::GridSnapshot;
use crate::render::color::{ColorScale, Rgb, WhiteToRed};
use crate::types::Coordinate;

/// Block glyphs for one cell.
const CELL_BLOCK: &str = "██";

/// Renders snapshots as rows of colored blocks with letter/number labels.
#[derive(Debug, Clone, Default)]
pub struct TermView<S = WhiteToRed> {
    scale: S,
}

impl<S: ColorScale> TermView<S> {
    pub fn new(scale: S) -> Self {
        Self { scale }
    }

    /// Render a snapshot into an ANSI-colored string.
    pub fn render(&self, snapshot: GridSnapshot<'_>) -> String {
        let size = snapshot.size();
        let max = snapshot.max_count();

        let mut out = String::new();

        // Column header: 1-based numbers, two columns per cell.
        out.push_str("   ");
        for col in 0..size {
            let _ = write!(out, "{:<2}", col + 1);
        }
        out.push('\n');

        for row in 0..size {
            let _ = write!(out, "{}  ", Coordinate::row_label(row));
            for col in 0..size {
                let count = snapshot.get(row, col);
                let rgb = self.scale.color(count as f32 / max as f32);
                let _ = write!(out, "{}", CELL_BLOCK.with(to_term_color(rgb)));
            }
            out.push('\n');
        }

        out
    }
}

fn to_term_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
