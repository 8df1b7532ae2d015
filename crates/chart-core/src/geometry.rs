// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for bar heights and line paths.

use crate::types::MIN_BAR_HEIGHT;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Smooth cubic segment between two consecutive line points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicSegment {
    pub from: Point,
    pub control1: Point,
    pub control2: Point,
    pub to: Point,
}

impl CubicSegment {
    /// Both control points sit at the horizontal midpoint: the first at the
    /// previous height, the second at the current one.
    pub fn between(prev: Point, cur: Point) -> Self {
        let mid_x = (prev.x + cur.x) / 2.0;
        Self {
            from: prev,
            control1: Point::new(mid_x, prev.y),
            control2: Point::new(mid_x, cur.y),
            to: cur,
        }
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

const ADJUST_IN: (f64, f64) = (150.0, 750.0);
const ADJUST_OUT: (f64, f64) = (-0.05, 0.05);

/// Height correction factor: taller containers give their bars a bit more room.
pub fn height_adjustment(container_height: f64) -> f64 {
    let h = clamp(container_height, ADJUST_IN.0, ADJUST_IN.1);
    ADJUST_OUT.0 + (h - ADJUST_IN.0) * (ADJUST_OUT.1 - ADJUST_OUT.0) / (ADJUST_IN.1 - ADJUST_IN.0)
}

/// Height of the bar track inside a container of `container_height`.
pub fn available_bar_height(container_height: f64) -> f64 {
    container_height * (0.90 + height_adjustment(container_height)) * 0.90
}

/// Bar height proportional to `value / max`, never below [`MIN_BAR_HEIGHT`].
/// A non-positive `max` has no meaningful ratio and yields the minimum.
pub fn bar_height(value: f64, max: f64, available: f64) -> f64 {
    if max <= 0.0 {
        return MIN_BAR_HEIGHT;
    }
    (value / max * available).max(MIN_BAR_HEIGHT)
}

/// Horizontal position of point `index` out of `count` spread over `width`.
/// A lone point is centered.
pub fn point_x(index: usize, count: usize, width: f64) -> f64 {
    if count < 2 {
        return width / 2.0;
    }
    width * index as f64 / (count - 1) as f64
}
