use std::future::Future;

use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

use crate::core::Series;

use super::{FeedError, MarketChartClient, MarketChartRequest};

/// Observable outcome of a price query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState {
    Loading,
    Failed(FeedError),
    Ready(Series),
}

impl QueryState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn series(&self) -> Option<&Series> {
        match self {
            Self::Ready(series) => Some(series),
            Self::Loading | Self::Failed(_) => None,
        }
    }
}

impl From<Result<Series, FeedError>> for QueryState {
    fn from(result: Result<Series, FeedError>) -> Self {
        match result {
            Ok(series) => Self::Ready(series),
            Err(err) => Self::Failed(err),
        }
    }
}

/// A single background fetch with three terminal outcomes.
///
/// Once `Ready` or `Failed` is observed the state never changes again. There
/// is no cancellation or timeout; dropping the handle just discards the
/// result.
#[derive(Debug)]
pub struct PriceQuery {
    receiver: Option<oneshot::Receiver<Result<Series, FeedError>>>,
    state: QueryState,
}

impl PriceQuery {
    /// Starts fetching on the current tokio runtime.
    pub fn spawn(
        client: MarketChartClient,
        request: MarketChartRequest,
    ) -> Result<Self, FeedError> {
        Self::spawn_future(async move { client.fetch_prices(&request).await })
    }

    /// Runs an arbitrary series source as the query task.
    pub fn spawn_future<F>(future: F) -> Result<Self, FeedError>
    where
        F: Future<Output = Result<Series, FeedError>> + Send + 'static,
    {
        let handle = Handle::try_current().map_err(|_| FeedError::NoRuntime)?;
        let (sender, receiver) = oneshot::channel();
        handle.spawn(async move {
            // The receiver may already be gone; nothing else to notify.
            let _ = sender.send(future.await);
        });

        Ok(Self {
            receiver: Some(receiver),
            state: QueryState::Loading,
        })
    }

    /// Current state without waiting.
    pub fn state(&mut self) -> &QueryState {
        if let Some(receiver) = self.receiver.as_mut() {
            match receiver.try_recv() {
                Ok(result) => {
                    self.state = result.into();
                    self.receiver = None;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Closed) => {
                    self.state = QueryState::Failed(FeedError::TaskAborted);
                    self.receiver = None;
                }
            }
        }
        &self.state
    }

    /// Waits for the terminal state.
    pub async fn wait(mut self) -> QueryState {
        if let Some(receiver) = self.receiver.take() {
            self.state = match receiver.await {
                Ok(result) => result.into(),
                Err(_) => QueryState::Failed(FeedError::TaskAborted),
            };
        }
        self.state
    }
}
