use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Discrete band mapping: each category occupies an equal-width slot.
///
/// Follows the common band-scale convention where inner and outer padding are
/// both `padding` (as a fraction of the step) and the bands are centered in
/// the range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandScale {
    labels: IndexSet<String>,
    range_start: f64,
    range_end: f64,
    padding: f64,
    first_band_start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    pub fn new<I, S>(labels: I, range: (f64, f64), padding: f64) -> ChartResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let (range_start, range_end) = range;
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "band range must be finite".to_owned(),
            ));
        }
        if !padding.is_finite() || !(0.0..1.0).contains(&padding) {
            return Err(ChartError::InvalidData(
                "band padding must be finite and within [0, 1)".to_owned(),
            ));
        }

        let mut set = IndexSet::new();
        for label in labels {
            let label = label.into();
            if !set.insert(label.clone()) {
                return Err(ChartError::InvalidData(format!(
                    "duplicate band label `{label}`"
                )));
            }
        }
        if set.is_empty() {
            return Err(ChartError::EmptySeries);
        }

        let n = set.len() as f64;
        let (low, high) = (range_start.min(range_end), range_start.max(range_end));
        let step = (high - low) / (n - padding + padding * 2.0).max(1.0);
        let first_band_start = low + (high - low - step * (n - padding)) * 0.5;
        let bandwidth = step * (1.0 - padding);

        Ok(Self {
            labels: set,
            range_start,
            range_end,
            padding,
            first_band_start,
            step,
            bandwidth,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Distance between the starts of adjacent bands.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Left edge of the band for `label`.
    #[must_use]
    pub fn position(&self, label: &str) -> Option<f64> {
        self.labels
            .get_index_of(label)
            .and_then(|index| self.position_at(index))
    }

    /// Left edge of the band at `index` in domain order.
    #[must_use]
    pub fn position_at(&self, index: usize) -> Option<f64> {
        if index >= self.labels.len() {
            return None;
        }
        Some(self.first_band_start + self.step * self.slot_of(index) as f64)
    }

    /// Domain index of the band covering `pixel`, if any.
    ///
    /// Pixels in the padding between bands resolve to `None`.
    #[must_use]
    pub fn band_index_at_pixel(&self, pixel: f64) -> Option<usize> {
        if !pixel.is_finite() || self.step <= 0.0 || pixel < self.first_band_start {
            return None;
        }

        let slot = ((pixel - self.first_band_start) / self.step).floor() as usize;
        if slot >= self.labels.len() {
            return None;
        }
        let offset = pixel - (self.first_band_start + self.step * slot as f64);
        if offset > self.bandwidth {
            return None;
        }
        Some(self.slot_of(slot))
    }

    /// Label of the band covering `pixel`, if any.
    #[must_use]
    pub fn band_at_pixel(&self, pixel: f64) -> Option<&str> {
        self.band_index_at_pixel(pixel)
            .and_then(|index| self.labels.get_index(index))
            .map(String::as_str)
    }

    // Slots run left-to-right on screen; a descending range reverses them.
    fn slot_of(&self, index: usize) -> usize {
        if self.range_end < self.range_start {
            self.labels.len() - 1 - index
        } else {
            index
        }
    }
}
