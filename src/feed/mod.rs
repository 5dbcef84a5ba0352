//! One-shot market data fetch feeding the price chart.

pub mod client;
pub mod error;
pub mod query;

pub use client::{
    DEFAULT_BASE_URL, FeedConfig, MarketChartClient, MarketChartRequest, decode_market_chart,
};
pub use error::FeedError;
pub use query::{PriceQuery, QueryState};
