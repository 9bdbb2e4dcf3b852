//! Error taxonomy of the signal engine.
//!
//! Insufficient price history is deliberately absent: an indicator that
//! cannot see far enough back votes NEUTRAL instead of failing the
//! analysis.

use thiserror::Error;

/// Failures while fetching price history from the chart API.
#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("chart API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("chart API returned a malformed payload: {0}")]
    Decode(String),

    #[error("chart API returned no candles")]
    Empty,
}

/// Failures surfaced by [`SignalService`](crate::signals::service::SignalService).
///
/// Any of these aborts the `analyze` call with no record persisted.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unknown or inactive asset: {0}")]
    UnknownAsset(String),

    #[error("price data unavailable for {symbol}: {source}")]
    DataUnavailable {
        symbol: String,
        #[source]
        source: MarketDataError,
    },

    #[error("signal storage failed: {0}")]
    Storage(#[from] crate::db::StoreError),
}
