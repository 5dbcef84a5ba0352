use thiserror::Error;

use crate::feed::FeedError;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("series is empty")]
    EmptySeries,

    #[error("series time must be strictly increasing (violated at index {index})")]
    UnsortedSeries { index: usize },

    #[error("unknown category `{0}`")]
    UnknownCategory(String),

    #[error(transparent)]
    Feed(#[from] FeedError),
}
