use thiserror::Error;

/// Why a market data fetch did not produce a series.
///
/// Messages are captured as text so outcomes can be cloned into chart state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    #[error("market data request to {url} failed: {message}")]
    Network { url: String, message: String },

    #[error("invalid market data request: {0}")]
    InvalidRequest(String),

    #[error("market data endpoint answered with status {status}")]
    Status { status: u16 },

    #[error("market data payload could not be decoded: {0}")]
    Decode(String),

    #[error("market data payload contains no prices")]
    Empty,

    #[error("market data payload is not a valid series: {0}")]
    InvalidSeries(String),

    #[error("price query must be spawned inside a tokio runtime")]
    NoRuntime,

    #[error("price query task ended without a result")]
    TaskAborted,
}
