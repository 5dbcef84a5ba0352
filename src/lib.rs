//! pricechart: headless models for a time-series price chart and a category
//! bar chart.
//!
//! The crate covers scale mapping, nearest-point tooltip resolution and a
//! one-shot market data feed. Drawing is left to the host UI.

pub mod api;
pub mod core;
pub mod error;
pub mod feed;
pub mod interaction;
pub mod telemetry;

pub use api::{BarChart, BarChartConfig, PriceChart, PriceChartConfig};
pub use error::{ChartError, ChartResult};
