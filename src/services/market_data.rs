//! Price history provider interface.

use crate::error::MarketDataError;
use crate::models::indicators::Candle;

#[async_trait::async_trait]
pub trait PriceDataProvider: Send + Sync {
    /// Fetch up to `limit` candles for a symbol at the given interval,
    /// oldest first.
    async fn get_candles(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, MarketDataError>;
}
