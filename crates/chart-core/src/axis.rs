// File: crates/chart-core/src/axis.rs
// Summary: Step table and "nice" gridline selection for the vertical axis.

use crate::grid::{dedup_in_order, round_tick, stride_inclusive};

/// Ranges below this magnitude (on both ends) use the fixed fraction set.
pub const SMALL_RANGE_LIMIT: f64 = 50.0;

/// Minimums within `step / ZERO_SNAP_DIVISOR` of zero are shown as `0`.
pub const ZERO_SNAP_DIVISOR: f64 = 2.5;

/// Bracketed step table; upper bounds are inclusive.
const STEP_TABLE: [(f64, f64); 5] = [
    (50.0, 10.0),
    (100.0, 20.0),
    (500.0, 50.0),
    (1000.0, 100.0),
    (2000.0, 200.0),
];
const MAX_STEP: f64 = 500.0;

/// Upper bound on stepped gridlines; wider ranges widen the stride tenfold until they fit.
pub const MAX_STEPPED_GRIDLINES: f64 = 1000.0;

/// Gridline spacing for a given `max - min` data range.
pub fn step_for_range(data_range: f64) -> f64 {
    STEP_TABLE
        .iter()
        .find(|(bound, _)| data_range <= *bound)
        .map(|&(_, step)| step)
        .unwrap_or(MAX_STEP)
}

/// Gridline values for a value range.
///
/// The result is not sorted: the true minimum (or `0` when the minimum is
/// close enough to zero) is always the last element and appears exactly once.
/// Use [`crate::ScaleModel::sorted_gridlines`] for drawing order.
pub fn gridlines(min: f64, max: f64) -> Vec<f64> {
    let step = step_for_range(max - min);

    let mut points = if max < SMALL_RANGE_LIMIT && min > -SMALL_RANGE_LIMIT {
        small_range_gridlines(min, max)
    } else {
        stepped_gridlines(min, max, step)
    };

    // The stepped range overshoots below a negative minimum; drop the lowest.
    if min < 0.0 {
        points.sort_by(f64::total_cmp);
        if !points.is_empty() {
            points.remove(0);
        }
    }

    let tail = if min.abs() < step / ZERO_SNAP_DIVISOR { 0.0 } else { min };
    points.retain(|&v| v != min && v != tail);
    dedup_in_order(&mut points);
    points.push(tail);
    points
}

/// Multiples of the stride covering `[min, max]`. The stride starts at `step`
/// and grows by powers of ten while the count would exceed
/// [`MAX_STEPPED_GRIDLINES`]; a span that overflows yields `[min, max]`.
fn stepped_gridlines(min: f64, max: f64, step: f64) -> Vec<f64> {
    let mut stride = step;
    loop {
        let start = (min / stride).floor() * stride;
        let end = (max / stride).ceil() * stride;
        let span = end - start;
        if !span.is_finite() {
            return vec![min, max];
        }
        if span / stride <= MAX_STEPPED_GRIDLINES {
            return stride_inclusive(start, end, stride);
        }
        stride *= 10.0;
    }
}

/// Max, zero and one to three fractions of each end of the range.
fn small_range_gridlines(min: f64, max: f64) -> Vec<f64> {
    let mut points = vec![max, 0.0];
    if max >= 25.0 {
        points.extend([round_tick(max * 0.75), round_tick(max * 0.5), round_tick(max * 0.25)]);
    } else if max >= 15.0 {
        points.push(round_tick(max / 2.0));
    } else {
        points.extend([round_tick(max * 0.5), round_tick(max * 0.25)]);
    }

    if min < 0.0 {
        points.push(min);
        if min < -25.0 {
            points.extend([round_tick(min * 0.75), round_tick(min * 0.5), round_tick(min * 0.25)]);
        } else if min < -15.0 {
            points.extend([round_tick(min * 0.66), round_tick(min * 0.33)]);
        } else {
            points.push(round_tick(min / 2.0));
        }
    }
    points
}

/// Axis text for a gridline value: integral values print without a fraction.
pub fn format_tick(value: f64) -> String {
    let v = value + 0.0;
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}
