use serde::{Deserialize, Serialize};

use crate::core::LinearScale;
use crate::error::{ChartError, ChartResult};

/// Tuning for fitting a value axis to observed data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScaleTuning {
    /// Absolute amount subtracted from the minimum and added to the maximum.
    pub padding: f64,
    /// Span used when all observed values are equal.
    pub min_span_absolute: f64,
}

impl Default for ValueScaleTuning {
    fn default() -> Self {
        Self {
            padding: 0.0,
            min_span_absolute: 0.000_001,
        }
    }
}

impl ValueScaleTuning {
    #[must_use]
    pub fn with_padding(padding: f64) -> Self {
        Self {
            padding,
            ..Self::default()
        }
    }

    fn validate(self) -> ChartResult<Self> {
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(ChartError::InvalidData(
                "value scale padding must be finite and >= 0".to_owned(),
            ));
        }

        if !self.min_span_absolute.is_finite() || self.min_span_absolute <= 0.0 {
            return Err(ChartError::InvalidData(
                "value scale min span must be finite and > 0".to_owned(),
            ));
        }

        Ok(self)
    }
}

/// Value axis mapped onto a pixel range, usually `(bottom, top)` so larger
/// values land higher on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    linear: LinearScale,
}

impl ValueScale {
    pub fn new(value_min: f64, value_max: f64, range: (f64, f64)) -> ChartResult<Self> {
        Ok(Self {
            linear: LinearScale::new((value_min, value_max), range)?,
        })
    }

    /// Fits the domain to `[min - padding, max + padding]` of `extent`.
    pub fn from_extent(
        extent: (f64, f64),
        range: (f64, f64),
        tuning: ValueScaleTuning,
    ) -> ChartResult<Self> {
        let tuning = tuning.validate()?;
        let (min, max) = extent;
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ChartError::InvalidData(
                "value extent must be finite and ordered".to_owned(),
            ));
        }

        let mut start = min - tuning.padding;
        let mut end = max + tuning.padding;
        if end - start < tuning.min_span_absolute {
            let mid = (start + end) / 2.0;
            start = mid - tuning.min_span_absolute / 2.0;
            end = mid + tuning.min_span_absolute / 2.0;
        }

        Self::new(start, end, range)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    pub fn value_to_pixel(self, value: f64) -> ChartResult<f64> {
        self.linear.domain_to_pixel(value)
    }

    pub fn pixel_to_value(self, pixel: f64) -> ChartResult<f64> {
        self.linear.pixel_to_domain(pixel)
    }
}
