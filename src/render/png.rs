//! Heatmap renderer: grid snapshot to an encoded PNG byte buffer.
//!
//! Pure with respect to the outside world: no filesystem or network access,
//! and byte-identical output for identical snapshots. Sending or storing the
//! bytes is the caller's concern.

use std::io::Cursor;

use anyhow::{Context, Result};
use image::{ImageFormat, Rgb as ImageRgb, RgbImage};
use log::trace;

use crate::core::GridSnapshot;
use crate::render::color::{ColorScale, WhiteToRed};
use crate::types::DEFAULT_CELL_PX;

/// Grid line color between cells.
const LINE_COLOR: ImageRgb<u8> = ImageRgb([0, 0, 0]);

/// Renders snapshots as solid color blocks, one block per cell.
#[derive(Debug, Clone)]
pub struct Heatmap<S = WhiteToRed> {
    /// Square pixel edge of one cell; overall image scales linearly with
    /// grid size.
    cell_px: u32,
    /// Draw 1-px separators between cells.
    grid_lines: bool,
    scale: S,
}

impl Default for Heatmap {
    fn default() -> Self {
        Self {
            cell_px: DEFAULT_CELL_PX,
            grid_lines: true,
            scale: WhiteToRed,
        }
    }
}

impl<S: ColorScale> Heatmap<S> {
    pub fn new(cell_px: u32, grid_lines: bool, scale: S) -> Self {
        assert!(cell_px > 0, "cell edge must be at least one pixel");
        Self {
            cell_px,
            grid_lines,
            scale,
        }
    }

    /// Render a snapshot to PNG bytes.
    ///
    /// Encoding failure is not a user-facing error condition; it only occurs
    /// under resource exhaustion, so it surfaces as a plain `anyhow` error
    /// for the outer layer to handle.
    pub fn render(&self, snapshot: GridSnapshot<'_>) -> Result<Vec<u8>> {
        let img = self.compose(snapshot);

        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .context("failed to encode heatmap PNG")?;

        trace!(
            "rendered {0}x{0} grid to {1}x{1} px heatmap ({2} bytes)",
            snapshot.size(),
            img.width(),
            bytes.len()
        );
        Ok(bytes)
    }

    /// Compose the raw pixel buffer without encoding, for tests and benches.
    pub fn compose(&self, snapshot: GridSnapshot<'_>) -> RgbImage {
        let size = snapshot.size() as u32;
        let edge = size * self.cell_px;
        let max = snapshot.max_count();

        let mut img = RgbImage::new(edge, edge);
        for row in 0..size {
            for col in 0..size {
                let count = snapshot.get(row as usize, col as usize);
                let rgb = self.scale.color(count as f32 / max as f32);
                let pixel = ImageRgb([rgb.r, rgb.g, rgb.b]);
                for dy in 0..self.cell_px {
                    for dx in 0..self.cell_px {
                        img.put_pixel(col * self.cell_px + dx, row * self.cell_px + dy, pixel);
                    }
                }
            }
        }

        if self.grid_lines {
            self.draw_grid_lines(&mut img, size);
        }
        img
    }

    /// 1-px black separators along interior cell boundaries.
    fn draw_grid_lines(&self, img: &mut RgbImage, size: u32) {
        let edge = size * self.cell_px;
        for i in 1..size {
            let pos = i * self.cell_px;
            for along in 0..edge {
                img.put_pixel(pos, along, LINE_COLOR);
                img.put_pixel(along, pos, LINE_COLOR);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Grid;
    use crate::types::Coordinate;

    #[test]
    fn image_dimensions_scale_with_grid_size() {
        let grid = Grid::with_size(4).unwrap();
        let img = Heatmap::default().compose(grid.snapshot());
        assert_eq!(img.width(), 4 * DEFAULT_CELL_PX);
        assert_eq!(img.height(), 4 * DEFAULT_CELL_PX);
    }

    #[test]
    fn hottest_cell_is_pure_red() {
        let mut grid = Grid::with_size(2).unwrap();
        grid.record_hit(Coordinate { row: 1, col: 0 });

        let heatmap = Heatmap::new(2, false, WhiteToRed);
        let img = heatmap.compose(grid.snapshot());

        // (row 1, col 0) spans pixels x 0..2, y 2..4.
        assert_eq!(img.get_pixel(0, 2), &ImageRgb([255, 0, 0]));
        // Untouched cells stay white.
        assert_eq!(img.get_pixel(0, 0), &ImageRgb([255, 255, 255]));
    }

    #[test]
    fn grid_lines_fall_on_cell_boundaries() {
        let grid = Grid::with_size(3).unwrap();
        let heatmap = Heatmap::new(4, true, WhiteToRed);
        let img = heatmap.compose(grid.snapshot());
        assert_eq!(img.get_pixel(4, 0), &LINE_COLOR);
        assert_eq!(img.get_pixel(0, 8), &LINE_COLOR);
        assert_eq!(img.get_pixel(1, 1), &ImageRgb([255, 255, 255]));
    }
}
