// File: crates/chart-core/src/store.rs
// Summary: Observable value store holding the series and the selected index.
// Notes:
// - Observers run synchronously, in subscription order, after each successful mutation.
// - Replacing the series keeps the selected index even when it no longer
//   points at a valid element; see `selection_is_stale`.

use tracing::{debug, trace};

use crate::scale::ScaleModel;
use crate::series::Series;

/// Change notification delivered to observers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StoreEvent<'a> {
    SeriesReplaced { series: &'a Series, generation: u64 },
    SelectionChanged { previous: usize, selected: usize },
}

/// Handle returned by [`ValueStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&StoreEvent<'_>)>;

pub struct ValueStore {
    series: Series,
    selected_index: usize,
    generation: u64,
    next_subscription: u64,
    observers: Vec<(SubscriptionId, Observer)>,
}

impl ValueStore {
    pub fn new(series: Series) -> Self {
        Self::with_selection(series, 0)
    }

    /// The initial selection is not bounds-checked.
    pub fn with_selection(series: Series, selected_index: usize) -> Self {
        Self {
            series,
            selected_index,
            generation: 0,
            next_subscription: 0,
            observers: Vec::new(),
        }
    }

    pub fn series(&self) -> &Series { &self.series }
    pub fn selected_index(&self) -> usize { self.selected_index }

    /// Incremented on every series replacement.
    pub fn generation(&self) -> u64 { self.generation }

    /// True when the selected index does not address a point of the current series.
    pub fn selection_is_stale(&self) -> bool {
        self.selected_index >= self.series.len()
    }

    pub fn scale(&self) -> ScaleModel {
        ScaleModel::from_series(&self.series)
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent<'_>) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    /// Swap the whole series. The selected index is left untouched.
    pub fn replace_series(&mut self, series: Series) {
        self.series = series;
        self.generation += 1;
        debug!(len = self.series.len(), generation = self.generation, "series replaced");
        if self.selection_is_stale() {
            debug!(selected = self.selected_index, len = self.series.len(), "selection past end of new series");
        }
        let event = StoreEvent::SeriesReplaced { series: &self.series, generation: self.generation };
        for (_, observer) in self.observers.iter_mut() {
            observer(&event);
        }
    }

    /// Select `index` when it addresses a point; otherwise do nothing.
    /// Returns whether the selection was applied.
    pub fn select_index(&mut self, index: usize) -> bool {
        if index >= self.series.len() {
            trace!(index, len = self.series.len(), "selection out of range ignored");
            return false;
        }
        let previous = self.selected_index;
        self.selected_index = index;
        let event = StoreEvent::SelectionChanged { previous, selected: index };
        for (_, observer) in self.observers.iter_mut() {
            observer(&event);
        }
        true
    }
}

impl std::fmt::Debug for ValueStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueStore")
            .field("series", &self.series)
            .field("selected_index", &self.selected_index)
            .field("generation", &self.generation)
            .field("observers", &self.observers.len())
            .finish()
    }
}
