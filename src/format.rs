//! Tooltip and legend markup.
//!
//! Every function here is pure: `(title, columns, fields) -> markup`. The bar renderer
//! decides which fields a region reports (see [`crate::viz::region_fields`]); these
//! functions only lay them out.

use crate::viz::util::palette_hex;
use crate::widget::Offset;
use std::fmt::Write;

/// Text shown instead of a tooltip when the hovered region has no fields.
pub const NO_DATA: &str = "(No data)";

/// Round to three decimals, half toward positive infinity.
///
/// This is the only numeric rounding rule: every displayed number and every
/// addend of a total goes through it.
pub fn float_format(value: f64) -> f64 {
    let r = (value * 1000.0 + 0.5).floor() / 1000.0;
    // -0 prints as "-0"
    if r == 0.0 { 0.0 } else { r }
}

/// Display a rounded value: `6`, `0.333`, `-1.5`.
pub fn format_number(value: f64) -> String {
    format!("{}", if value == 0.0 { 0.0 } else { value })
}

/// Share of `total` as a whole percent, truncated toward zero (`1/3` -> `33`).
pub fn progress_pct(value: f64, total: f64) -> i64 {
    if total == 0.0 {
        return 0;
    }
    let pct = value / total * 100.0;
    if pct.is_finite() { pct.trunc() as i64 } else { 0 }
}

/// Sum of the rounded field values; missing fields count as zero.
pub fn rounded_total(fields: &[Option<f64>]) -> f64 {
    fields
        .iter()
        .map(|f| float_format(f.unwrap_or(0.0)))
        .sum()
}

fn field(fields: &[Option<f64>], index: Option<usize>) -> f64 {
    index
        .and_then(|i| fields.get(i).copied().flatten())
        .map(float_format)
        .unwrap_or(0.0)
}

/// A labelled horizontal bar whose fill is `value` as a share of `max_value`.
pub fn progress_bar(label: &str, value: f64, max_value: f64) -> String {
    format!(
        r#"<div class="progressbar"><div style="width:{pct}%;"></div><span>{label} ({value})</span></div>"#,
        pct = progress_pct(value, max_value),
        label = html_escape(label),
        value = format_number(value),
    )
}

/// Heading plus one progress bar per column.
///
/// Column `i` reads `fields[len - 1 - i]`: stacked regions report their segments top
/// first, so reading backwards lines the rows up with the legend.
pub fn progress_list_tooltip(title: &str, columns: &[String], fields: &[Option<f64>]) -> String {
    if fields.is_empty() {
        return NO_DATA.to_string();
    }
    let total = rounded_total(fields);

    let mut out = format!("<h4>{}</h4><ul>", html_escape(title));
    for (i, column) in columns.iter().enumerate() {
        let value = field(fields, (fields.len() - 1).checked_sub(i));
        let _ = write!(out, "<li>{}</li>", progress_bar(column, value, total));
    }
    out.push_str("</ul>");
    out
}

/// Caption, a total row, then one row per column.
///
/// Slot 0 of the fields is reserved for the total, so column `i` reads `fields[i + 1]`.
pub fn table_tooltip(title: &str, columns: &[String], fields: &[Option<f64>]) -> String {
    if fields.is_empty() {
        return NO_DATA.to_string();
    }
    let total = float_format(rounded_total(fields));

    let mut out = format!(
        "<table><caption>{}</caption><tr><th>Total</th><td>{}</td></tr>",
        html_escape(title),
        format_number(total)
    );
    for (i, column) in columns.iter().enumerate() {
        let _ = write!(
            out,
            "<tr><th>{}</th><td>{}</td></tr>",
            html_escape(column),
            format_number(field(fields, Some(i + 1)))
        );
    }
    out.push_str("</table>");
    out
}

/// Legend list: one palette swatch per column, in column order.
///
/// With `at`, the list is absolutely positioned at that page offset.
pub fn legend(columns: &[String], at: Option<Offset>) -> String {
    let mut out = match at {
        Some(pos) => format!(
            r#"<ul class="legend" style="position:absolute;left:{}px;top:{}px;">"#,
            pos.left, pos.top
        ),
        None => r#"<ul class="legend">"#.to_string(),
    };
    for (i, column) in columns.iter().enumerate() {
        let _ = write!(
            out,
            r#"<li><span style="background-color:{};"></span> {}</li>"#,
            palette_hex(i),
            html_escape(column)
        );
    }
    out.push_str("</ul>");
    out
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
