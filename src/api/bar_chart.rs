use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    BandScale, CategoryPoint, CategorySeries, ValueScale, ValueScaleTuning, Viewport,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{PointerEvent, TooltipState};

use super::chart_config::{BarChartConfig, measured_or_default};
use super::label_format::{
    BAR_AXIS_TICK_PATTERN, BAR_TOOLTIP_DATE_PATTERN, format_date_label, format_plain_value,
};

/// Rectangle of one bar in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub index: usize,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BarGeometry {
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let (top, bottom) = if self.height >= 0.0 {
            (self.y, self.y + self.height)
        } else {
            (self.y + self.height, self.y)
        };
        x >= self.x && x <= self.x + self.width && y >= top && y <= bottom
    }
}

/// Bottom-axis tick centered under a band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

/// Category bar chart whose tooltip follows the pointer over a bar.
#[derive(Debug, Clone)]
pub struct BarChart {
    config: BarChartConfig,
    series: CategorySeries,
    x_scale: BandScale,
    y_scale: ValueScale,
    tooltip: TooltipState<CategoryPoint>,
}

impl BarChart {
    pub fn new(config: BarChartConfig, series: CategorySeries) -> ChartResult<Self> {
        let config = config.validate()?;
        let (x_scale, y_scale) = build_scales(&config, &series)?;
        Ok(Self {
            config,
            series,
            x_scale,
            y_scale,
            tooltip: TooltipState::default(),
        })
    }

    #[must_use]
    pub fn config(&self) -> BarChartConfig {
        self.config
    }

    #[must_use]
    pub fn series(&self) -> &CategorySeries {
        &self.series
    }

    #[must_use]
    pub fn x_scale(&self) -> &BandScale {
        &self.x_scale
    }

    #[must_use]
    pub fn y_scale(&self) -> ValueScale {
        self.y_scale
    }

    #[must_use]
    pub fn tooltip(&self) -> &TooltipState<CategoryPoint> {
        &self.tooltip
    }

    #[must_use]
    pub fn inner_width(&self) -> f64 {
        f64::from(self.config.viewport.width) - self.config.margin * 2.0
    }

    #[must_use]
    pub fn inner_height(&self) -> f64 {
        f64::from(self.config.viewport.height) - self.config.margin * 2.0
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

    pub fn set_series(&mut self, series: CategorySeries) -> ChartResult<()> {
        self.series = series;
        self.tooltip.hide();
        self.recompute_scales()
    }

    pub fn recompute_scales(&mut self) -> ChartResult<()> {
        let (x_scale, y_scale) = build_scales(&self.config, &self.series)?;
        self.x_scale = x_scale;
        self.y_scale = y_scale;
        Ok(())
    }

    /// Bar rectangles in domain order.
    ///
    /// Each bar spans from its value's pixel down to the inner-height
    /// baseline.
    pub fn bars(&self) -> ChartResult<Vec<BarGeometry>> {
        let inner_height = self.inner_height();
        let width = self.x_scale.bandwidth();

        self.series
            .iter()
            .enumerate()
            .map(|(index, point)| -> ChartResult<BarGeometry> {
                let x = self
                    .x_scale
                    .position(&point.label)
                    .ok_or_else(|| ChartError::UnknownCategory(point.label.clone()))?;
                let height = inner_height - self.y_scale.value_to_pixel(point.value)?;
                Ok(BarGeometry {
                    index,
                    label: point.label,
                    x,
                    y: inner_height - height,
                    width,
                    height,
                })
            })
            .collect()
    }

    /// Hit-tests the bars and shows the tooltip at the pointer when one is
    /// hovered; otherwise the tooltip is hidden.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<Option<CategoryPoint>> {
        validate_pointer(x, y)?;
        let hovered = self.bars()?.into_iter().find(|bar| bar.contains(x, y));
        match hovered {
            Some(bar) => self.pointer_move_on_bar(bar.index, x, y).map(Some),
            None => {
                self.tooltip.hide();
                Ok(None)
            }
        }
    }

    /// Shows the tooltip for a known bar, anchored at the pointer.
    pub fn pointer_move_on_bar(
        &mut self,
        index: usize,
        x: f64,
        y: f64,
    ) -> ChartResult<CategoryPoint> {
        validate_pointer(x, y)?;
        let point = self.series.get(index).ok_or_else(|| {
            ChartError::InvalidData(format!("bar index {index} is out of range"))
        })?;
        debug!(index, label = %point.label, "bar hovered");
        self.tooltip.show(point.clone(), x, y);
        Ok(point)
    }

    pub fn pointer_leave(&mut self) {
        self.tooltip.hide();
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> ChartResult<Option<CategoryPoint>> {
        match event {
            PointerEvent::Move { x, y } => self.pointer_move(x, y),
            PointerEvent::Leave => {
                self.pointer_leave();
                Ok(None)
            }
        }
    }

    /// Bottom-axis ticks, one per band, formatted as `MM/DD`.
    #[must_use]
    pub fn axis_ticks(&self) -> Vec<AxisTick> {
        let half_band = self.x_scale.bandwidth() / 2.0;
        self.series
            .labels()
            .filter_map(|label| {
                self.x_scale.position(label).map(|position| AxisTick {
                    position: position + half_band,
                    label: format_date_label(label, BAR_AXIS_TICK_PATTERN),
                })
            })
            .collect()
    }

    /// Tooltip text such as `Apr 24, 07 : 93.24`.
    #[must_use]
    pub fn tooltip_label(&self) -> Option<String> {
        self.tooltip.data().map(|point| {
            format!(
                "{} : {}",
                format_date_label(&point.label, BAR_TOOLTIP_DATE_PATTERN),
                format_plain_value(point.value)
            )
        })
    }
}

fn validate_pointer(x: f64, y: f64) -> ChartResult<()> {
    if !x.is_finite() || !y.is_finite() {
        return Err(ChartError::InvalidData(
            "pointer position must be finite".to_owned(),
        ));
    }
    Ok(())
}

fn build_scales(
    config: &BarChartConfig,
    series: &CategorySeries,
) -> ChartResult<(BandScale, ValueScale)> {
    let margin = config.margin;
    let inner_width = f64::from(config.viewport.width) - margin * 2.0;
    let inner_height = f64::from(config.viewport.height) - margin * 2.0;

    let x_scale = BandScale::new(
        series.labels(),
        (margin, inner_width),
        config.band_padding,
    )?;
    let y_scale = ValueScale::from_extent(
        series.value_extent(),
        (inner_height, margin),
        ValueScaleTuning::with_padding(config.value_padding),
    )?;
    debug!(
        bars = series.len(),
        inner_width, inner_height, "recomputed bar chart scales"
    );

    Ok((x_scale, y_scale))
}
