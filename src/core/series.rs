use indexmap::IndexMap;
use serde::Serialize;

use crate::core::{CategoryPoint, DataPoint};
use crate::error::{ChartError, ChartResult};

/// Non-empty time series with strictly increasing, finite timestamps.
///
/// Immutable once built; charts replace the whole series on refresh.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    points: Vec<DataPoint>,
}

impl Series {
    pub fn new(points: Vec<DataPoint>) -> ChartResult<Self> {
        if points.is_empty() {
            return Err(ChartError::EmptySeries);
        }

        for (index, point) in points.iter().enumerate() {
            if !point.time.is_finite() || !point.value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "point at index {index} must have finite time and value"
                )));
            }
            if index > 0 && point.time <= points[index - 1].time {
                return Err(ChartError::UnsortedSeries { index });
            }
        }

        Ok(Self { points })
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; kept for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DataPoint> {
        self.points.get(index)
    }

    #[must_use]
    pub fn first(&self) -> &DataPoint {
        &self.points[0]
    }

    #[must_use]
    pub fn last(&self) -> &DataPoint {
        &self.points[self.points.len() - 1]
    }

    /// Observed time extent `(min, max)`.
    #[must_use]
    pub fn time_extent(&self) -> (f64, f64) {
        (self.first().time, self.last().time)
    }

    /// Observed value extent `(min, max)`.
    #[must_use]
    pub fn value_extent(&self) -> (f64, f64) {
        value_extent(self.points.iter().map(|point| point.value))
    }

    /// Index of the first point whose time is not less than `time`.
    ///
    /// Returns `len()` when every point is earlier than `time`.
    #[must_use]
    pub fn bisect_left(&self, time: f64) -> usize {
        self.points.partition_point(|point| point.time < time)
    }

    #[must_use]
    pub fn into_points(self) -> Vec<DataPoint> {
        self.points
    }
}

/// Non-empty category series with unique labels in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySeries {
    points: IndexMap<String, f64>,
}

impl CategorySeries {
    pub fn new(points: Vec<CategoryPoint>) -> ChartResult<Self> {
        if points.is_empty() {
            return Err(ChartError::EmptySeries);
        }

        let mut map = IndexMap::with_capacity(points.len());
        for point in points {
            if !point.value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "category `{}` must have a finite value",
                    point.label
                )));
            }
            if map.insert(point.label.clone(), point.value).is_some() {
                return Err(ChartError::InvalidData(format!(
                    "duplicate category `{}`",
                    point.label
                )));
            }
        }

        Ok(Self { points: map })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.points.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = CategoryPoint> + '_ {
        self.points
            .iter()
            .map(|(label, value)| CategoryPoint::new(label.clone(), *value))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<CategoryPoint> {
        self.points
            .get_index(index)
            .map(|(label, value)| CategoryPoint::new(label.clone(), *value))
    }

    #[must_use]
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.points.get_index_of(label)
    }

    #[must_use]
    pub fn value_extent(&self) -> (f64, f64) {
        value_extent(self.points.values().copied())
    }
}

fn value_extent(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
        (min.min(value), max.max(value))
    })
}
