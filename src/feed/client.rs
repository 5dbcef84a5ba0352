use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::{DataPoint, Series};
use crate::error::ChartError;

use super::FeedError;

pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Parameters of a `market_chart` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketChartRequest {
    pub coin_id: String,
    pub vs_currency: String,
    pub days: u32,
}

impl Default for MarketChartRequest {
    fn default() -> Self {
        Self {
            coin_id: "bitcoin".to_owned(),
            vs_currency: "usd".to_owned(),
            days: 7,
        }
    }
}

impl MarketChartRequest {
    /// Coin ids are API slugs: lowercase ASCII letters, digits and `-`.
    pub fn validate(&self) -> Result<(), FeedError> {
        let valid_slug = !self.coin_id.is_empty()
            && self
                .coin_id
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-');
        if !valid_slug {
            return Err(FeedError::InvalidRequest(format!(
                "coin id `{}` must match [a-z0-9-]+",
                self.coin_id
            )));
        }
        Ok(())
    }

    pub fn path(&self) -> Result<String, FeedError> {
        self.validate()?;
        Ok(format!("/coins/{}/market_chart", self.coin_id))
    }

    /// Endpoint without the query string.
    pub fn endpoint(&self, base_url: &str) -> Result<String, FeedError> {
        Ok(format!("{}{}", base_url.trim_end_matches('/'), self.path()?))
    }

    /// Query parameters, sent form-encoded.
    #[must_use]
    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        [
            ("vs_currency", self.vs_currency.clone()),
            ("days", self.days.to_string()),
        ]
    }

    /// Full request URL with escaped query parameters.
    pub fn url(&self, base_url: &str) -> Result<Url, FeedError> {
        let endpoint = self.endpoint(base_url)?;
        let mut url = Url::parse(&endpoint).map_err(|e| {
            FeedError::InvalidRequest(format!("invalid endpoint `{endpoint}`: {e}"))
        })?;
        url.query_pairs_mut().extend_pairs(self.query_pairs());
        Ok(url)
    }
}

/// Feed setup; serializable like the chart configs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub request: MarketChartRequest,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request: MarketChartRequest::default(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_owned()
}

#[derive(Debug, Deserialize)]
struct MarketChartPayload {
    prices: Vec<(f64, f64)>,
}

/// Decodes a `{"prices": [[unix_millis, price], ...]}` body into a series.
pub fn decode_market_chart(body: &str) -> Result<Series, FeedError> {
    let payload: MarketChartPayload =
        serde_json::from_str(body).map_err(|e| FeedError::Decode(e.to_string()))?;
    if payload.prices.is_empty() {
        return Err(FeedError::Empty);
    }

    let points = payload
        .prices
        .into_iter()
        .map(|(time, value)| DataPoint::new(time, value))
        .collect();
    Series::new(points).map_err(|e| match e {
        ChartError::EmptySeries => FeedError::Empty,
        other => FeedError::InvalidSeries(other.to_string()),
    })
}

/// One-shot market data client. Requests are never retried.
#[derive(Debug, Clone)]
pub struct MarketChartClient {
    http: Client,
    base_url: String,
}

impl MarketChartClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FeedError> {
        let base_url = base_url.into();
        let http = Client::builder().build().map_err(|e| FeedError::Network {
            url: base_url.clone(),
            message: e.to_string(),
        })?;
        Ok(Self { http, base_url })
    }

    /// Uses a caller-built HTTP client, e.g. with custom proxy or TLS setup.
    #[must_use]
    pub fn with_http_client(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &FeedConfig) -> Result<Self, FeedError> {
        Self::new(config.base_url.clone())
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_prices(&self, request: &MarketChartRequest) -> Result<Series, FeedError> {
        let url = request.url(&self.base_url)?.to_string();
        debug!(%url, "fetching market chart");

        let response = self
            .http
            .get(request.endpoint(&self.base_url)?)
            .query(&request.query_pairs())
            .send()
            .await
            .map_err(|e| FeedError::Network {
                url: url.clone(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "market chart request rejected");
            return Err(FeedError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| FeedError::Network {
            url: url.clone(),
            message: e.to_string(),
        })?;

        match decode_market_chart(&body) {
            Ok(series) => {
                info!(%url, points = series.len(), "market chart loaded");
                Ok(series)
            }
            Err(err) => {
                warn!(%url, error = %err, "market chart payload rejected");
                Err(err)
            }
        }
    }
}
