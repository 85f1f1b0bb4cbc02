//! Fixed-width build history.
//!
//! Dashboards show the same number of bars for every test so sparklines line up;
//! tests with a short history are padded on the left with blank regions.

use crate::models::SeriesPoint;

/// Number of builds shown per sparkline.
pub const HISTORICAL_POINTS: usize = 25;

/// Left-pad `points` with blank regions up to `len`, keeping the newest `len` entries.
///
/// Blank regions carry no values and no url: they show "(No data)" and ignore clicks.
pub fn pad_history(points: Vec<SeriesPoint>, len: usize) -> Vec<SeriesPoint> {
    let missing = len.saturating_sub(points.len());
    let skip = points.len().saturating_sub(len);
    std::iter::repeat_with(SeriesPoint::blank)
        .take(missing)
        .chain(points.into_iter().skip(skip))
        .collect()
}
