//! Utility functions for the bar renderer: colours and value-to-pixel scaling.

use plotters::prelude::*;

/// Stacked segment palette, cycled by column index.
const PALETTE8: [RGBColor; 8] = [
    RGBColor(0x33, 0x66, 0xcc), // blue    (#3366cc)
    RGBColor(0xdc, 0x39, 0x12), // red     (#dc3912)
    RGBColor(0xff, 0x99, 0x00), // orange  (#ff9900)
    RGBColor(0x10, 0x96, 0x18), // green   (#109618)
    RGBColor(0x66, 0xaa, 0x00), // lime    (#66aa00)
    RGBColor(0xdd, 0x44, 0x77), // pink    (#dd4477)
    RGBColor(0x00, 0x99, 0xc6), // teal    (#0099c6)
    RGBColor(0x99, 0x00, 0x99), // purple  (#990099)
];

/// Plain bar colour (#08C).
pub const BAR_COLOR: RGBColor = RGBColor(0x00, 0x88, 0xcc);

/// Colour of regions whose values are all missing (#999).
pub const NULL_COLOR: RGBColor = RGBColor(0x99, 0x99, 0x99);

/// Get a color from the stacked palette.
#[inline]
pub fn palette_color(idx: usize) -> RGBColor {
    PALETTE8[idx % PALETTE8.len()]
}

/// CSS hex form of [`palette_color`], e.g. `#3366cc`.
pub fn palette_hex(idx: usize) -> String {
    to_hex(palette_color(idx))
}

pub fn to_hex(c: RGBColor) -> String {
    format!("#{:02x}{:02x}{:02x}", c.0, c.1, c.2)
}

/// Vertical value range of a chart.
///
/// Starts as the fixed `[0, 1]` range and only widens when data falls outside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl Default for ValueRange {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

impl ValueRange {
    pub fn include(&mut self, v: f64) {
        self.min = self.min.min(v);
        self.max = self.max.max(v);
    }

    /// Pixel row for `v` on a canvas `height` pixels tall (0 at the top).
    pub fn to_px(&self, v: f64, height: u32) -> i32 {
        let span = self.max - self.min;
        let frac = if span > 0.0 { (v - self.min) / span } else { 0.0 };
        height as i32 - (frac * height as f64).round() as i32
    }
}
