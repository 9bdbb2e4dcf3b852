//! Shared helpers for integration tests

use chrono::{Duration, TimeZone, Utc};
use sinaltrix::config::EngineConfig;
use sinaltrix::db::MemorySignalStore;
use sinaltrix::error::MarketDataError;
use sinaltrix::models::{Asset, Candle};
use sinaltrix::services::{PriceDataProvider, StaticAssetCatalog};
use sinaltrix::signals::SignalService;
use std::sync::Arc;

pub fn candles_from_closes(closes: &[f64]) -> Vec<Candle> {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            Candle::new(
                close,
                close + 0.1,
                close - 0.1,
                close,
                1_000.0,
                base + Duration::minutes(i as i64),
            )
        })
        .collect()
}

/// Steady climb: long enough for every lookback including the trend filter.
pub fn uptrend_candles(count: usize) -> Vec<Candle> {
    candles_from_closes(&(0..count).map(|i| 100.0 + i as f64 * 0.5).collect::<Vec<_>>())
}

/// Price provider stub serving a canned series, or failing on demand.
pub struct StubPriceProvider {
    candles: Vec<Candle>,
    fail: bool,
}

impl StubPriceProvider {
    pub fn with_candles(candles: Vec<Candle>) -> Self {
        Self {
            candles,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            candles: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait::async_trait]
impl PriceDataProvider for StubPriceProvider {
    async fn get_candles(
        &self,
        _symbol: &str,
        _interval: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, MarketDataError> {
        if self.fail {
            return Err(MarketDataError::Decode("stub failure".to_string()));
        }
        let start = self.candles.len().saturating_sub(limit);
        Ok(self.candles[start..].to_vec())
    }
}

pub fn test_catalog() -> StaticAssetCatalog {
    let mut delisted = Asset::new(3, "DOGE-USD", "Dogecoin");
    delisted.active = false;
    StaticAssetCatalog::new(vec![
        Asset::new(1, "EURUSD=X", "Euro/Dólar Americano"),
        Asset::new(2, "BTC-USD", "Bitcoin"),
        delisted,
    ])
}

pub fn make_service(provider: StubPriceProvider) -> (Arc<SignalService>, Arc<MemorySignalStore>) {
    let store = Arc::new(MemorySignalStore::new());
    let service = Arc::new(SignalService::new(
        Arc::new(test_catalog()),
        Arc::new(provider),
        store.clone(),
        EngineConfig::default(),
    ));
    (service, store)
}
