// File: crates/chart-core/src/series.rs
// Summary: Ordered series of labeled data points driving one chart.

use crate::error::ChartError;
use crate::types::DataPoint;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    points: Vec<DataPoint>,
}

impl Series {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn with_points(points: Vec<DataPoint>) -> Self {
        Self { points }
    }

    /// Build a series from `(label, value)` pairs, rejecting non-finite values.
    pub fn try_from_pairs<I, S>(pairs: I) -> Result<Self, ChartError>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let points = pairs
            .into_iter()
            .map(|(label, value)| DataPoint::try_new(label, value, false))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { points })
    }

    pub fn push(&mut self, point: DataPoint) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn get(&self, index: usize) -> Option<&DataPoint> { self.points.get(index) }
    pub fn iter(&self) -> std::slice::Iter<'_, DataPoint> { self.points.iter() }
    pub fn points(&self) -> &[DataPoint] { &self.points }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.points.iter().map(|p| p.label.as_str())
    }

    /// `(min, max)` over all values; an empty series yields `(0.0, 1.0)`.
    pub fn value_range(&self) -> (f64, f64) {
        let mut it = self.points.iter().map(|p| p.value);
        let Some(first) = it.next() else { return (0.0, 1.0) };
        it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)))
    }

    pub fn max_value(&self) -> f64 { self.value_range().1 }
    pub fn min_value(&self) -> f64 { self.value_range().0 }
}

impl FromIterator<DataPoint> for Series {
    fn from_iter<T: IntoIterator<Item = DataPoint>>(iter: T) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a DataPoint;
    type IntoIter = std::slice::Iter<'a, DataPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
