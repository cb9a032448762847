//! Color scale types for heatmap rendering.

use serde::{Deserialize, Serialize};

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Maps a normalized intensity in `[0, 1]` to a color.
///
/// Implementations must be deterministic and monotonic in intensity: hotter
/// input never maps to a cooler color. The scale is a strategy so a gradient
/// can be swapped without touching grid or session logic.
pub trait ColorScale {
    fn color(&self, t: f32) -> Rgb;
}

/// Default gradient: white at zero intensity fading to pure red at full.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhiteToRed;

impl ColorScale for WhiteToRed {
    fn color(&self, t: f32) -> Rgb {
        let heat = quantize(t);
        Rgb::new(255, 255 - heat, 255 - heat)
    }
}

/// Alternate gradient: blue at zero intensity through to red at full.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlueToRed;

impl ColorScale for BlueToRed {
    fn color(&self, t: f32) -> Rgb {
        let heat = quantize(t);
        Rgb::new(heat, 0, 255 - heat)
    }
}

/// Clamp to `[0, 1]` and scale to a byte.
fn quantize(t: f32) -> u8 {
    (t.clamp(0.0, 1.0) * 255.0).round() as u8
}
