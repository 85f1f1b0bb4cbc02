//! Bar renderer: lay out a sparkline and draw it to **SVG** or **PNG**.
//!
//! - `ProgressList` widgets draw stacked bars, one palette colour per column
//! - `Table` widgets draw one plain bar per point, as tall as its values summed
//! - Regions with no values get a one-pixel baseline in the null colour
//! - The value range is fixed to `[0, 1]` unless the data needs more room

pub mod types;
pub mod util;

pub use types::{Bar, Segment};
pub use util::{BAR_COLOR, NULL_COLOR, ValueRange, palette_color, palette_hex};

use crate::error::WidgetError;
use crate::models::{SeriesPoint, TooltipStyle, WidgetConfig};
use log::debug;

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;

use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::path::Path;

/// Value-space segments of one point, bottom first.
pub fn segments(point: &SeriesPoint, style: TooltipStyle) -> Vec<Segment> {
    match style {
        TooltipStyle::ProgressList => {
            let mut base = 0.0;
            let mut out = Vec::new();
            for (j, v) in point.values.iter().enumerate() {
                if let Some(v) = v {
                    out.push(Segment {
                        from: base,
                        to: base + v,
                        color: palette_color(j),
                    });
                    base += v;
                }
            }
            out
        }
        TooltipStyle::Table if point.is_empty() => Vec::new(),
        TooltipStyle::Table => vec![Segment {
            from: 0.0,
            to: point.values.iter().flatten().sum(),
            color: BAR_COLOR,
        }],
    }
}

/// Lay out every configured point as a bar.
///
/// Offsets past `i32::MAX` are clamped; validated configs never get there.
pub fn layout(config: &WidgetConfig) -> Vec<Bar> {
    let pitch = i64::from(config.pitch());
    config
        .values
        .iter()
        .enumerate()
        .map(|(region, point)| Bar {
            region,
            x: i32::try_from((region as i64).saturating_mul(pitch)).unwrap_or(i32::MAX),
            width: config.bar_width,
            segments: segments(point, config.tooltip),
        })
        .collect()
}

/// Value range covering every bar, at least `[0, 1]`.
pub fn value_range(bars: &[Bar]) -> ValueRange {
    let mut range = ValueRange::default();
    for seg in bars.iter().flat_map(|b| &b.segments) {
        range.include(seg.from);
        range.include(seg.to);
    }
    range
}

/// Region under pixel column `x`, counting the gap after a bar as part of it.
pub fn region_at(config: &WidgetConfig, x: i32) -> Option<usize> {
    let pitch = config.pitch();
    if x < 0 || pitch == 0 {
        return None;
    }
    let idx = x as usize / pitch as usize;
    (idx < config.values.len()).then_some(idx)
}

/// Fields a region hands to the tooltip formatter.
///
/// Stacked bars report their segments top first, i.e. the point's values reversed.
/// Plain bars report values in order.
pub fn region_fields(point: &SeriesPoint, style: TooltipStyle) -> Vec<Option<f64>> {
    match style {
        TooltipStyle::ProgressList => point.values.iter().rev().copied().collect(),
        TooltipStyle::Table => point.values.clone(),
    }
}

/// Render the sparkline as an SVG document string.
pub fn render_svg(config: &WidgetConfig) -> Result<String, WidgetError> {
    let bars = layout(config);
    let mut buf = String::new();
    {
        let root = SVGBackend::with_string(&mut buf, (config.width, config.height))
            .into_drawing_area();
        draw_bars(&root, &bars, config.height)?;
        root.present()
            .map_err(|e| WidgetError::Render(format!("{:?}", e)))?;
    }
    debug!(
        "rendered {} bars into {} bytes of svg",
        bars.len(),
        buf.len()
    );
    Ok(buf)
}

/// Render the sparkline to a PNG file on a white background.
pub fn render_png<P: AsRef<Path>>(config: &WidgetConfig, out_path: P) -> Result<(), WidgetError> {
    let bars = layout(config);
    let root =
        BitMapBackend::new(out_path.as_ref(), (config.width, config.height)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| WidgetError::Render(format!("{:?}", e)))?;
    draw_bars(&root, &bars, config.height)?;
    root.present()
        .map_err(|e| WidgetError::Render(format!("{:?}", e)))?;
    Ok(())
}

/// Write the chart to `out_path`, choosing SVG or PNG from the extension.
pub fn render_to_path<P: AsRef<Path>>(
    config: &WidgetConfig,
    out_path: P,
) -> Result<(), WidgetError> {
    let out_path = out_path.as_ref();
    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        std::fs::write(out_path, render_svg(config)?)?;
    } else {
        render_png(config, out_path)?;
    }
    Ok(())
}

fn draw_bars<DB>(root: &DrawingArea<DB, Shift>, bars: &[Bar], height: u32) -> Result<(), WidgetError>
where
    DB: DrawingBackend,
{
    let range = value_range(bars);
    let baseline = range.to_px(0.0, height);

    for bar in bars {
        if bar.is_null() {
            let y = (baseline - 1).max(0);
            root.draw(&Rectangle::new(
                [(bar.x, y), (bar.right(), y)],
                NULL_COLOR.filled(),
            ))
            .map_err(|e| WidgetError::Render(format!("{:?}", e)))?;
            continue;
        }
        for seg in &bar.segments {
            let (a, b) = (range.to_px(seg.from, height), range.to_px(seg.to, height));
            if a == b {
                continue;
            }
            // pixel rows grow downward; the upper edge is the smaller row
            let (top, bottom) = (a.min(b), a.max(b) - 1);
            root.draw(&Rectangle::new(
                [(bar.x, top), (bar.right(), bottom)],
                seg.color.filled(),
            ))
            .map_err(|e| WidgetError::Render(format!("{:?}", e)))?;
        }
    }
    Ok(())
}
