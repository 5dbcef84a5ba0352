use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_millis, decimal_to_f64};
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub(crate) fn validate(self) -> ChartResult<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// One observation on a continuous time axis.
///
/// `time` is expressed in unix milliseconds, matching market-data payloads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub time: f64,
    pub value: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }

    pub fn from_datetime(time: DateTime<Utc>, value: Decimal) -> ChartResult<Self> {
        Ok(Self {
            time: datetime_to_unix_millis(time),
            value: decimal_to_f64(value, "value")?,
        })
    }
}

/// One observation on a discrete category axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPoint {
    pub label: String,
    pub value: f64,
}

impl CategoryPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}
