// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (data points, sizes, timing steps).

use chrono::NaiveDate;

use crate::error::ChartError;

/// Default chart track height in points.
pub const DEFAULT_CHART_HEIGHT: f64 = 160.0;
/// Bars never shrink below this height, even for tiny values.
pub const MIN_BAR_HEIGHT: f64 = 30.0;
/// Horizontal room reserved per point in a line chart.
pub const LINE_POINT_SPACING: f64 = 50.0;

/// Delay between consecutive element reveals, in seconds.
pub const REVEAL_STEP: f32 = 0.1;
/// Per-point delay before scrolling a line chart to its last point, in seconds.
pub const SCROLL_DELAY_STEP: f32 = 0.08;
/// Per-point duration of the line stroke animation, in seconds.
pub const LINE_DRAW_STEP: f32 = 0.2;

/// One labeled value of a series.
/// Contract: `label` is already formatted for display.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
    /// Forecast/placeholder point; only changes the marker style.
    pub is_provisional: bool,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value, is_provisional: false }
    }

    pub fn provisional(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value, is_provisional: true }
    }

    /// Construct a point, rejecting NaN and infinite values.
    pub fn try_new(label: impl Into<String>, value: f64, is_provisional: bool) -> Result<Self, ChartError> {
        let label = label.into();
        if !value.is_finite() {
            return Err(ChartError::NonFiniteValue { label, value });
        }
        Ok(Self { label, value, is_provisional })
    }

    /// Label a point with a date rendered through a chrono format string (e.g. `"%b"`).
    pub fn dated(date: NaiveDate, format: &str, value: f64) -> Self {
        Self::new(date.format(format).to_string(), value)
    }

    pub fn with_provisional(mut self, is_provisional: bool) -> Self {
        self.is_provisional = is_provisional;
        self
    }
}

impl<S: Into<String>> From<(S, f64)> for DataPoint {
    fn from((label, value): (S, f64)) -> Self {
        Self::new(label, value)
    }
}
