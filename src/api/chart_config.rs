use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};

/// Size used until the host measures the chart container.
pub const DEFAULT_VIEWPORT: Viewport = Viewport {
    width: 100,
    height: 100,
};

/// Price line chart setup.
///
/// Serializable so hosts can keep chart setup next to their own settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceChartConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    /// Absolute padding applied around the observed price extent.
    #[serde(default)]
    pub value_padding: f64,
}

impl Default for PriceChartConfig {
    fn default() -> Self {
        Self {
            viewport: DEFAULT_VIEWPORT,
            value_padding: 0.0,
        }
    }
}

impl PriceChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_value_padding(mut self, value_padding: f64) -> Self {
        self.value_padding = value_padding;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.viewport.validate()?;
        validate_non_negative(self.value_padding, "value padding")?;
        Ok(self)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse price chart config: {e}"))
        })?;
        config.validate()
    }

    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize price chart config: {e}"))
        })
    }
}

/// Category bar chart setup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarChartConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default = "default_margin")]
    pub margin: f64,
    /// Fraction of each band step left empty between bars.
    #[serde(default = "default_band_padding")]
    pub band_padding: f64,
    /// Keeps the shortest and tallest bars off the plot edges.
    #[serde(default = "default_bar_value_padding")]
    pub value_padding: f64,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            viewport: DEFAULT_VIEWPORT,
            margin: default_margin(),
            band_padding: default_band_padding(),
            value_padding: default_bar_value_padding(),
        }
    }
}

impl BarChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_band_padding(mut self, band_padding: f64) -> Self {
        self.band_padding = band_padding;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.viewport.validate()?;
        validate_non_negative(self.margin, "margin")?;
        validate_non_negative(self.value_padding, "value padding")?;
        if !self.band_padding.is_finite() || !(0.0..1.0).contains(&self.band_padding) {
            return Err(ChartError::InvalidData(
                "band padding must be finite and within [0, 1)".to_owned(),
            ));
        }
        Ok(self)
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse bar chart config: {e}"))
        })?;
        config.validate()
    }

    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize bar chart config: {e}"))
        })
    }
}

/// Replaces an unmeasured (zero) dimension with the default size.
#[must_use]
pub fn measured_or_default(measured: Viewport) -> Viewport {
    Viewport {
        width: if measured.width == 0 {
            DEFAULT_VIEWPORT.width
        } else {
            measured.width
        },
        height: if measured.height == 0 {
            DEFAULT_VIEWPORT.height
        } else {
            measured.height
        },
    }
}

fn validate_non_negative(value: f64, name: &str) -> ChartResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{name} must be finite and >= 0"
        )));
    }
    Ok(())
}

fn default_viewport() -> Viewport {
    DEFAULT_VIEWPORT
}

fn default_margin() -> f64 {
    32.0
}

fn default_band_padding() -> f64 {
    0.2
}

fn default_bar_value_padding() -> f64 {
    1.0
}
