//! Geometry produced by the bar layout and consumed by the renderers.

use plotters::style::RGBColor;

/// One coloured piece of a bar, in value space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: f64,
    pub to: f64,
    pub color: RGBColor,
}

/// One region of the chart, in pixel columns plus value-space segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// Index into the configured points.
    pub region: usize,
    /// Left pixel column.
    pub x: i32,
    pub width: u32,
    /// Empty when every value is missing; drawn as a baseline in the null colour.
    pub segments: Vec<Segment>,
}

impl Bar {
    pub fn is_null(&self) -> bool {
        self.segments.is_empty()
    }

    /// Right pixel column (inclusive), clamped to `i32::MAX`.
    pub fn right(&self) -> i32 {
        let right = i64::from(self.x) + i64::from(self.width) - 1;
        i32::try_from(right).unwrap_or(i32::MAX)
    }
}
