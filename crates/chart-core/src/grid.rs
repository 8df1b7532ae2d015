// File: crates/chart-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

/// Every multiple of `step` from `start` to `end` inclusive, ascending.
/// Values are computed as `start + i * step` to avoid accumulated drift.
pub fn stride_inclusive(start: f64, end: f64, step: f64) -> Vec<f64> {
    if step.is_nan() || step <= 0.0 || end < start { return vec![start]; }
    let ratio = ((end - start) / step).round();
    if !ratio.is_finite() { return vec![start, end]; }
    let steps = ratio as usize;
    (0..=steps).map(|i| start + step * i as f64).collect()
}

/// Round half away from zero, normalizing `-0.0` to `0.0`.
#[inline]
pub fn round_tick(v: f64) -> f64 {
    v.round() + 0.0
}

/// Drop repeated values, keeping the first occurrence and the original order.
pub fn dedup_in_order(values: &mut Vec<f64>) {
    let mut seen: Vec<f64> = Vec::with_capacity(values.len());
    values.retain(|v| {
        if seen.contains(v) {
            false
        } else {
            seen.push(*v);
            true
        }
    });
}
