// File: crates/chart-core/src/chart.rs
// Summary: Bar and line chart models: value store + style + reveal schedule, and
// renderer-agnostic layouts a host turns into drawn geometry.

use crate::animation::RevealSchedule;
use crate::axis::format_tick;
use crate::geometry::{available_bar_height, bar_height, point_x, CubicSegment, Point};
use crate::scale::ScaleModel;
use crate::series::Series;
use crate::store::{StoreEvent, SubscriptionId, ValueStore};
use crate::style::{BarStyle, LineStyle};
use crate::types::{LINE_DRAW_STEP, LINE_POINT_SPACING, SCROLL_DELAY_STEP};

/// State shared by both chart kinds.
#[derive(Debug)]
struct ChartState {
    store: ValueStore,
    reveal: RevealSchedule,
    appeared: bool,
}

impl ChartState {
    fn new(store: ValueStore) -> Self {
        Self { store, reveal: RevealSchedule::new(), appeared: false }
    }

    fn restart_reveal(&mut self, animated: bool) {
        let count = self.store.series().len();
        let generation = self.store.generation();
        if !self.appeared {
            self.reveal.arm(0, generation);
        } else if animated {
            self.reveal.arm(count, generation);
        } else {
            self.reveal.reveal_all(count, generation);
        }
    }

    fn appear(&mut self, animated: bool) {
        self.appeared = true;
        self.restart_reveal(animated);
    }

    fn tick(&mut self, dt: f32) -> Vec<usize> {
        self.reveal.tick(dt, self.store.generation())
    }

    fn tap(&mut self, index: usize) -> bool {
        if self.store.selected_index() == index {
            return false;
        }
        self.store.select_index(index)
    }

    fn replace_series(&mut self, series: Series, animated: bool) {
        self.store.replace_series(series);
        self.restart_reveal(animated);
    }

    fn is_selected(&self, index: usize) -> bool {
        self.store.selected_index() == index
    }

    fn scroll_target(&self) -> Option<usize> {
        self.store.series().len().checked_sub(1)
    }
}

/// Vertical bar chart: one capsule per point, scaled against the series maximum.
#[derive(Debug)]
pub struct BarChart {
    state: ChartState,
    style: BarStyle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarGeometry {
    pub index: usize,
    pub label: String,
    pub value: f64,
    /// Left edge of the bar within the scrollable content.
    pub x: f64,
    /// Full bar height once revealed (proportional, floored at the minimum).
    pub height: f64,
    /// Height to draw now: `height` when revealed, else `0`.
    pub displayed_height: f64,
    /// Background track height to draw now.
    pub displayed_track_height: f64,
    /// Zero-valued bars keep their track but have no fill.
    pub fill_visible: bool,
    pub selected: bool,
    pub revealed: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarLayout {
    pub available_height: f64,
    pub content_width: f64,
    pub scroll_target: Option<usize>,
    pub bars: Vec<BarGeometry>,
}

impl BarChart {
    pub fn new(series: Series) -> Self {
        Self::with_store(ValueStore::new(series))
    }

    pub fn with_store(store: ValueStore) -> Self {
        Self { state: ChartState::new(store), style: BarStyle::default() }
    }

    pub fn with_style(mut self, style: BarStyle) -> Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> &BarStyle { &self.style }
    pub fn store(&self) -> &ValueStore { &self.state.store }
    pub fn reveal(&self) -> &RevealSchedule { &self.state.reveal }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent<'_>) + 'static,
    {
        self.state.store.subscribe(observer)
    }

    /// The chart became visible: start the staggered reveal (or show all bars).
    pub fn appear(&mut self) {
        self.state.appear(self.style.animated);
    }

    /// Advance reveal timers; returns the bar indices that just appeared.
    pub fn tick(&mut self, dt: f32) -> Vec<usize> {
        self.state.tick(dt)
    }

    /// Tap on bar `index`. Tapping the already-selected bar does nothing.
    pub fn tap(&mut self, index: usize) -> bool {
        self.state.tap(index)
    }

    pub fn select_index(&mut self, index: usize) -> bool {
        self.state.store.select_index(index)
    }

    pub fn replace_series(&mut self, series: Series) {
        self.state.replace_series(series, self.style.animated);
    }

    pub fn scale(&self) -> ScaleModel {
        self.state.store.scale()
    }

    pub fn layout(&self, container_height: f64) -> BarLayout {
        let series = self.state.store.series();
        let available = available_bar_height(container_height);
        let max = series.max_value();
        let pitch = self.style.bar_width + self.style.bar_spacing;

        let bars = series
            .iter()
            .enumerate()
            .map(|(index, point)| {
                let revealed = self.state.reveal.is_revealed(index);
                let height = bar_height(point.value, max, available);
                BarGeometry {
                    index,
                    label: point.label.clone(),
                    value: point.value,
                    x: index as f64 * pitch,
                    height,
                    displayed_height: if revealed { height } else { 0.0 },
                    displayed_track_height: if revealed { available } else { 0.0 },
                    fill_visible: point.value != 0.0,
                    selected: self.state.is_selected(index),
                    revealed,
                }
            })
            .collect::<Vec<_>>();

        let n = series.len() as f64;
        let content_width = if series.is_empty() { 0.0 } else { n * self.style.bar_width + (n - 1.0) * self.style.bar_spacing };

        BarLayout { available_height: available, content_width, scroll_target: self.state.scroll_target(), bars }
    }
}

/// Line chart: smoothed path through the points over "nice" gridlines.
#[derive(Debug)]
pub struct LineChart {
    state: ChartState,
    style: LineStyle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridStroke {
    /// The zero line.
    Solid,
    Dashed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    Filled,
    /// Provisional (forecast) points.
    Outline,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridlineMark {
    pub value: f64,
    pub y: f64,
    pub label: String,
    pub stroke: GridStroke,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinePoint {
    pub index: usize,
    pub label: String,
    pub position: Point,
    pub marker: Marker,
    pub diameter: f64,
    pub selected: bool,
    pub revealed: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineLayout {
    pub scale: ScaleModel,
    pub gridlines: Vec<GridlineMark>,
    pub points: Vec<LinePoint>,
    pub segments: Vec<CubicSegment>,
    pub content_min_width: f64,
    /// Seconds for the stroke to draw from start to end.
    pub draw_duration: f32,
    /// Seconds to wait before scrolling to `scroll_target`.
    pub scroll_delay: f32,
    pub scroll_target: Option<usize>,
}

impl LineChart {
    pub fn new(series: Series) -> Self {
        Self::with_store(ValueStore::new(series))
    }

    pub fn with_store(store: ValueStore) -> Self {
        Self { state: ChartState::new(store), style: LineStyle::default() }
    }

    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn style(&self) -> &LineStyle { &self.style }
    pub fn store(&self) -> &ValueStore { &self.state.store }
    pub fn reveal(&self) -> &RevealSchedule { &self.state.reveal }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent<'_>) + 'static,
    {
        self.state.store.subscribe(observer)
    }

    pub fn appear(&mut self) {
        self.state.appear(true);
    }

    pub fn tick(&mut self, dt: f32) -> Vec<usize> {
        self.state.tick(dt)
    }

    pub fn tap(&mut self, index: usize) -> bool {
        self.state.tap(index)
    }

    pub fn select_index(&mut self, index: usize) -> bool {
        self.state.store.select_index(index)
    }

    pub fn replace_series(&mut self, series: Series) {
        self.state.replace_series(series, true);
    }

    pub fn scale(&self) -> ScaleModel {
        self.state.store.scale()
    }

    pub fn layout(&self, width: f64, track_height: f64) -> LineLayout {
        let series = self.state.store.series();
        let scale = self.state.store.scale();
        let vs = scale.value_scale(track_height);
        let count = series.len();

        let gridlines = scale
            .gridlines
            .iter()
            .map(|&value| GridlineMark {
                value,
                y: vs.to_px(value),
                label: format_tick(value),
                stroke: if value == 0.0 { GridStroke::Solid } else { GridStroke::Dashed },
            })
            .collect();

        let points = series
            .iter()
            .enumerate()
            .map(|(index, p)| {
                let selected = self.state.is_selected(index);
                LinePoint {
                    index,
                    label: p.label.clone(),
                    position: Point::new(point_x(index, count, width), vs.to_px(p.value)),
                    marker: if p.is_provisional { Marker::Outline } else { Marker::Filled },
                    diameter: self.style.diameter_for(selected),
                    selected,
                    revealed: self.state.reveal.is_revealed(index),
                }
            })
            .collect::<Vec<LinePoint>>();

        let segments = points
            .windows(2)
            .map(|w| CubicSegment::between(w[0].position, w[1].position))
            .collect();

        LineLayout {
            scale,
            gridlines,
            points,
            segments,
            content_min_width: count as f64 * LINE_POINT_SPACING,
            draw_duration: count as f32 * LINE_DRAW_STEP,
            scroll_delay: count as f32 * SCROLL_DELAY_STEP,
            scroll_target: self.state.scroll_target(),
        }
    }
}
