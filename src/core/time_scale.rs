use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, Series, Viewport};
use crate::error::{ChartError, ChartResult};

/// Span used when the observed extent collapses to a single instant.
const MIN_TIME_SPAN_MILLIS: f64 = 1.0;

/// Time axis fitted to the observed extent of a series and mapped onto
/// `[0, width]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    linear: LinearScale,
}

impl TimeScale {
    /// Creates a scale from an explicit time extent.
    pub fn new(time_start: f64, time_end: f64, viewport: Viewport) -> ChartResult<Self> {
        let viewport = viewport.validate()?;
        let (start, end) = normalize_range(time_start, time_end)?;
        let linear = LinearScale::new((start, end), (0.0, f64::from(viewport.width)))?;
        Ok(Self { linear })
    }

    /// Fits the domain to `[first.time, last.time]` of the series.
    pub fn from_series(series: &Series, viewport: Viewport) -> ChartResult<Self> {
        let (min, max) = series.time_extent();
        Self::new(min, max, viewport)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.linear.range()
    }

    pub fn time_to_pixel(self, time: f64) -> ChartResult<f64> {
        self.linear.domain_to_pixel(time)
    }

    pub fn pixel_to_time(self, pixel: f64) -> ChartResult<f64> {
        self.linear.pixel_to_domain(pixel)
    }
}

fn normalize_range(start: f64, end: f64) -> ChartResult<(f64, f64)> {
    if !start.is_finite() || !end.is_finite() {
        return Err(ChartError::InvalidData(
            "time range must be finite".to_owned(),
        ));
    }

    if start == end {
        let half = MIN_TIME_SPAN_MILLIS / 2.0;
        return Ok((start - half, end + half));
    }

    Ok((start.min(end), start.max(end)))
}
