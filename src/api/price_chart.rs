use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{DataPoint, Series, TimeScale, ValueScale, ValueScaleTuning, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::feed::QueryState;
use crate::interaction::{PointerEvent, TooltipState};

use super::chart_config::{PriceChartConfig, measured_or_default};
use super::label_format::{PRICE_TOOLTIP_TIME_PATTERN, format_time_millis, format_usd};
use super::nearest_point::{ResolvedPoint, resolve_nearest};

/// Pixel-space vertex of the projected price line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PriceScales {
    time: TimeScale,
    value: ValueScale,
}

/// Time series line chart with a nearest-point hover tooltip.
///
/// Scales are derived state: they are rebuilt by [`recompute_scales`]
/// whenever the series or the viewport changes and are `None` until a series
/// is attached.
///
/// [`recompute_scales`]: PriceChart::recompute_scales
#[derive(Debug, Clone)]
pub struct PriceChart {
    config: PriceChartConfig,
    series: Option<Series>,
    scales: Option<PriceScales>,
    tooltip: TooltipState<DataPoint>,
}

impl PriceChart {
    pub fn new(config: PriceChartConfig) -> ChartResult<Self> {
        Ok(Self {
            config: config.validate()?,
            series: None,
            scales: None,
            tooltip: TooltipState::default(),
        })
    }

    pub fn with_series(config: PriceChartConfig, series: Series) -> ChartResult<Self> {
        let mut chart = Self::new(config)?;
        chart.set_series(series)?;
        Ok(chart)
    }

    #[must_use]
    pub fn config(&self) -> PriceChartConfig {
        self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn series(&self) -> Option<&Series> {
        self.series.as_ref()
    }

    #[must_use]
    pub fn time_scale(&self) -> Option<TimeScale> {
        self.scales.map(|scales| scales.time)
    }

    #[must_use]
    pub fn value_scale(&self) -> Option<ValueScale> {
        self.scales.map(|scales| scales.value)
    }

    #[must_use]
    pub fn tooltip(&self) -> &TooltipState<DataPoint> {
        &self.tooltip
    }

    /// Replaces the series and rebuilds scales. A stale tooltip is hidden.
    pub fn set_series(&mut self, series: Series) -> ChartResult<()> {
        self.series = Some(series);
        self.tooltip.hide();
        self.recompute_scales()
    }

    /// Applies a measured container size; zero dimensions fall back to the
    /// default size.
    pub fn resize(&mut self, measured: Viewport) -> ChartResult<()> {
        let viewport = measured_or_default(measured);
        if viewport == self.config.viewport {
            return Ok(());
        }
        self.config.viewport = viewport;
        self.recompute_scales()
    }

    /// Rebuilds time and value scales from the current series and viewport.
    pub fn recompute_scales(&mut self) -> ChartResult<()> {
        let Some(series) = &self.series else {
            self.scales = None;
            return Ok(());
        };

        let viewport = self.config.viewport;
        let time = TimeScale::from_series(series, viewport)?;
        let value = ValueScale::from_extent(
            series.value_extent(),
            (f64::from(viewport.height), 0.0),
            ValueScaleTuning::with_padding(self.config.value_padding),
        )?;
        debug!(
            points = series.len(),
            width = viewport.width,
            height = viewport.height,
            "recomputed price chart scales"
        );

        self.scales = Some(PriceScales { time, value });
        Ok(())
    }

    /// Consumes a feed outcome: a ready series is attached, anything else
    /// leaves the chart without data.
    pub fn apply_query_state(&mut self, state: &QueryState) -> ChartResult<()> {
        match state {
            QueryState::Ready(series) => self.set_series(series.clone()),
            QueryState::Loading | QueryState::Failed(_) => {
                self.series = None;
                self.tooltip.hide();
                self.recompute_scales()
            }
        }
    }

    /// Resolves the nearest point under `pointer_x` and shows the tooltip.
    pub fn pointer_move(&mut self, pointer_x: f64) -> ChartResult<ResolvedPoint> {
        let (series, scales) = match (&self.series, self.scales) {
            (Some(series), Some(scales)) => (series, scales),
            _ => return Err(ChartError::EmptySeries),
        };

        let resolved = resolve_nearest(series, scales.time, scales.value, pointer_x)?;
        self.tooltip
            .show(resolved.point, resolved.tooltip_left, resolved.tooltip_top);
        Ok(resolved)
    }

    pub fn pointer_leave(&mut self) {
        self.tooltip.hide();
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> ChartResult<Option<ResolvedPoint>> {
        match event {
            PointerEvent::Move { x, .. } => self.pointer_move(x).map(Some),
            PointerEvent::Leave => {
                self.pointer_leave();
                Ok(None)
            }
        }
    }

    /// Clears data and tooltip, e.g. when the host tears the chart down.
    pub fn reset(&mut self) {
        self.series = None;
        self.scales = None;
        self.tooltip.hide();
    }

    /// Line path vertices in pixel space, in series order.
    pub fn projected_points(&self) -> ChartResult<Vec<ScreenPoint>> {
        let (series, scales) = match (&self.series, self.scales) {
            (Some(series), Some(scales)) => (series, scales),
            _ => return Ok(Vec::new()),
        };

        series
            .points()
            .iter()
            .map(|point| -> ChartResult<ScreenPoint> {
                Ok(ScreenPoint {
                    x: scales.time.time_to_pixel(point.time)?,
                    y: scales.value.value_to_pixel(point.value)?,
                })
            })
            .collect()
    }

    /// Tooltip text such as `Mar 05 14:30 : $67,123.45`.
    #[must_use]
    pub fn tooltip_label(&self) -> Option<String> {
        self.tooltip.data().map(|point| {
            format!(
                "{} : {}",
                format_time_millis(point.time, PRICE_TOOLTIP_TIME_PATTERN),
                format_usd(point.value)
            )
        })
    }
}
