//! Error types for configuration, host page and rendering failures.

use thiserror::Error;

/// A widget configuration that cannot be rendered faithfully.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigurationError {
    #[error("parent element id is empty")]
    MissingParent,
    #[error("{field} must be greater than zero")]
    ZeroDimension { field: &'static str },
    #[error("{field} is {value} px, at most {max} px is supported")]
    TooLarge {
        field: &'static str,
        value: u32,
        max: u32,
    },
    #[error("{regions} regions of {pitch} px do not fit on a canvas")]
    SpanOverflow { regions: usize, pitch: u32 },
    #[error("point {point} has {found} values, expected {expected} (one per column)")]
    ColumnMismatch {
        point: usize,
        expected: usize,
        found: usize,
    },
    #[error("point {point} value {index} is not a finite number")]
    NonFinite { point: usize, index: usize },
}

/// Failures reported by a [`crate::Host`] implementation.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("unknown parent element: {0}")]
    UnknownParent(String),
    #[error("mount {0} is not attached")]
    NotMounted(usize),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Everything that can go wrong while constructing a sparkline.
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigurationError),
    #[error("host page: {0}")]
    Host(#[from] HostError),
    #[error("render failed: {0}")]
    Render(String),
    #[error("cannot read configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
