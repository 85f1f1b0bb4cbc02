use crate::error::{ConfigurationError, WidgetError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One hoverable region of the chart.
///
/// `None` entries are missing observations: they are drawn in the null colour
/// and displayed as `0` in tooltips.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SeriesPoint {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub values: Vec<Option<f64>>,
}

impl SeriesPoint {
    pub fn new<T, I>(title: T, values: I) -> Self
    where
        T: Into<String>,
        I: IntoIterator<Item = Option<f64>>,
    {
        Self {
            title: title.into(),
            url: None,
            values: values.into_iter().collect(),
        }
    }

    /// A placeholder region with no values and no link.
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn with_url<U: Into<String>>(mut self, url: U) -> Self {
        self.url = Some(url.into());
        self
    }

    /// True when every value is missing (or there are none).
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }
}

/// Which of the two tooltip layouts a widget uses.
///
/// `ProgressList` stacks the columns into coloured segments, shows a legend and
/// reads tooltip fields in reverse. `Table` draws one plain bar per point and reads
/// fields offset by one, leaving slot 0 to the total row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TooltipStyle {
    #[default]
    #[serde(rename = "progress")]
    ProgressList,
    #[serde(rename = "table")]
    Table,
}

/// Largest width, height, bar width or bar spacing accepted, in pixels.
pub const MAX_DIMENSION: u32 = 16_384;

fn default_bar_width() -> u32 {
    4
}

fn default_bar_spacing() -> u32 {
    1
}

/// Widget configuration, owned by the caller and only read by the widget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Id of the host element the sparkline is appended to.
    pub parent: String,
    pub width: u32,
    pub height: u32,
    #[serde(default = "default_bar_width")]
    pub bar_width: u32,
    #[serde(default = "default_bar_spacing")]
    pub bar_spacing: u32,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub values: Vec<SeriesPoint>,
    #[serde(default)]
    pub tooltip: TooltipStyle,
}

impl WidgetConfig {
    pub fn new<P: Into<String>>(parent: P, width: u32, height: u32) -> Self {
        Self {
            parent: parent.into(),
            width,
            height,
            bar_width: default_bar_width(),
            bar_spacing: default_bar_spacing(),
            columns: Vec::new(),
            values: Vec::new(),
            tooltip: TooltipStyle::default(),
        }
    }

    pub fn bars(mut self, bar_width: u32, bar_spacing: u32) -> Self {
        self.bar_width = bar_width;
        self.bar_spacing = bar_spacing;
        self
    }

    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn push(mut self, point: SeriesPoint) -> Self {
        self.values.push(point);
        self
    }

    pub fn tooltip(mut self, style: TooltipStyle) -> Self {
        self.tooltip = style;
        self
    }

    /// Horizontal pitch of one region in pixels.
    pub fn pitch(&self) -> u32 {
        self.bar_width.saturating_add(self.bar_spacing)
    }

    /// Check the configuration before anything is drawn.
    ///
    /// Points with no values are accepted and render as "(No data)".
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.parent.trim().is_empty() {
            return Err(ConfigurationError::MissingParent);
        }
        for (field, v) in [
            ("width", self.width),
            ("height", self.height),
            ("barWidth", self.bar_width),
        ] {
            if v == 0 {
                return Err(ConfigurationError::ZeroDimension { field });
            }
        }
        for (field, value) in [
            ("width", self.width),
            ("height", self.height),
            ("barWidth", self.bar_width),
            ("barSpacing", self.bar_spacing),
        ] {
            if value > MAX_DIMENSION {
                return Err(ConfigurationError::TooLarge {
                    field,
                    value,
                    max: MAX_DIMENSION,
                });
            }
        }
        // bar offsets are i32 pixel columns
        let pitch = self.pitch();
        if self.values.len() as u64 * pitch as u64 > i32::MAX as u64 {
            return Err(ConfigurationError::SpanOverflow {
                regions: self.values.len(),
                pitch,
            });
        }
        let expected = self.columns.len();
        for (point, p) in self.values.iter().enumerate() {
            if !p.values.is_empty() && p.values.len() != expected {
                return Err(ConfigurationError::ColumnMismatch {
                    point,
                    expected,
                    found: p.values.len(),
                });
            }
            if let Some(index) = p
                .values
                .iter()
                .position(|v| v.is_some_and(|x| !x.is_finite()))
            {
                return Err(ConfigurationError::NonFinite { point, index });
            }
        }
        Ok(())
    }

    pub fn from_json_str(s: &str) -> Result<Self, WidgetError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, WidgetError> {
        let s = fs::read_to_string(path)?;
        Self::from_json_str(&s)
    }
}
