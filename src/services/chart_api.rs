//! HTTP chart API price provider.
//!
//! Fetches OHLCV history as JSON from the configured chart endpoint.
//! Transient transport failures are retried with bounded exponential
//! backoff; exhaustion surfaces as an error to the caller.

use crate::config;
use crate::error::MarketDataError;
use crate::models::indicators::Candle;
use crate::services::market_data::PriceDataProvider;
use backon::{ExponentialBuilder, Retryable};
use chrono::DateTime;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

const MAX_RETRIES: usize = 2;

pub struct ChartApiProvider {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    candles: Vec<ChartCandle>,
}

#[derive(Debug, Deserialize)]
struct ChartCandle {
    /// Epoch milliseconds.
    timestamp: i64,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: f64,
}

impl ChartApiProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(config::get_chart_api_url())
    }

    async fn fetch_once(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, MarketDataError> {
        let url = format!(
            "{}/v1/chart/{}?interval={}&limit={}",
            self.base_url, symbol, interval, limit
        );
        debug!(symbol = %symbol, interval = %interval, limit = limit, "Fetching candles from chart API");

        let response: ChartResponse = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let mut candles = response
            .candles
            .into_iter()
            .map(|c| {
                let timestamp = DateTime::from_timestamp_millis(c.timestamp).ok_or_else(|| {
                    MarketDataError::Decode(format!("invalid candle timestamp {}", c.timestamp))
                })?;
                Ok(Candle::new(
                    c.open, c.high, c.low, c.close, c.volume, timestamp,
                ))
            })
            .collect::<Result<Vec<Candle>, MarketDataError>>()?;

        candles.sort_by_key(|c| c.timestamp);
        Ok(candles)
    }
}

#[async_trait::async_trait]
impl PriceDataProvider for ChartApiProvider {
    async fn get_candles(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, MarketDataError> {
        (|| self.fetch_once(symbol, interval, limit))
            .retry(
                ExponentialBuilder::default()
                    .with_min_delay(Duration::from_millis(250))
                    .with_max_times(MAX_RETRIES),
            )
            .when(|e| matches!(e, MarketDataError::Transport(_)))
            .notify(|err, dur| {
                warn!(symbol = %symbol, error = %err, retry_in_ms = dur.as_millis(), "Chart API request failed, retrying");
            })
            .await
    }
}
