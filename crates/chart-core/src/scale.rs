// File: crates/chart-core/src/scale.rs
// Summary: Derived scale model (gridlines + value range) and value-to-pixel mapping.

use crate::axis::{gridlines, step_for_range};
use crate::series::Series;

/// Value Y coordinate.
pub type Value = f64;

/// Gridlines and value range derived from a series. Recompute on every change.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleModel {
    /// Gridline values; the minimum (or `0`) is always last.
    pub gridlines: Vec<Value>,
    pub min_value: Value,
    pub max_value: Value,
    pub step: f64,
}

impl ScaleModel {
    pub fn from_range(min_value: Value, max_value: Value) -> Self {
        Self {
            gridlines: gridlines(min_value, max_value),
            min_value,
            max_value,
            step: step_for_range(max_value - min_value),
        }
    }

    pub fn from_series(series: &Series) -> Self {
        let (min, max) = series.value_range();
        Self::from_range(min, max)
    }

    /// Gridlines in ascending order.
    pub fn sorted_gridlines(&self) -> Vec<Value> {
        let mut out = self.gridlines.clone();
        out.sort_by(f64::total_cmp);
        out
    }

    pub fn value_scale(&self, track_height: f64) -> ValueScale {
        ValueScale::new(track_height, self.min_value, self.max_value)
    }
}

/// Vertical value scale mapping `[vmin, vmax]` onto a track of `track_height`
/// (value `vmax` at the top, `vmin` at the bottom).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub track_height: f64,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new(track_height: f64, vmin: Value, vmax: Value) -> Self {
        Self { track_height, vmin, vmax }
    }

    #[inline]
    pub fn is_flat(&self) -> bool {
        self.vmax == self.vmin
    }

    /// Offset from the top of the track. Values outside the range are not clamped.
    /// A flat range maps everything to the middle of the track.
    #[inline]
    pub fn to_px(&self, y: Value) -> f64 {
        if self.is_flat() {
            return self.track_height / 2.0;
        }
        let h = self.track_height;
        h - h * (y - self.vmin) / (self.vmax - self.vmin)
    }

    #[inline]
    pub fn from_px(&self, py: f64) -> Value {
        if self.is_flat() || self.track_height == 0.0 {
            return self.vmin;
        }
        self.vmin + (self.track_height - py) / self.track_height * (self.vmax - self.vmin)
    }
}
