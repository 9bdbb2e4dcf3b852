//! Orchestrates one analysis: resolve asset, fetch history, vote, score,
//! persist.

use crate::config::EngineConfig;
use crate::db::SignalStore;
use crate::error::{MarketDataError, ServiceError};
use crate::models::indicators::Candle;
use crate::models::{Asset, Signal, SignalRecord};
use crate::services::assets::AssetCatalog;
use crate::services::market_data::PriceDataProvider;
use crate::signals::engine::IndicatorEngine;
use crate::signals::scoring::ConfluenceScorer;
use crate::signals::trend_filter::TrendFilter;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

pub struct SignalService {
    catalog: Arc<dyn AssetCatalog>,
    provider: Arc<dyn PriceDataProvider>,
    store: Arc<dyn SignalStore>,
    config: EngineConfig,
}

impl SignalService {
    pub fn new(
        catalog: Arc<dyn AssetCatalog>,
        provider: Arc<dyn PriceDataProvider>,
        store: Arc<dyn SignalStore>,
        config: EngineConfig,
    ) -> Self {
        Self {
            catalog,
            provider,
            store,
            config,
        }
    }

    /// Analyze a symbol and append the resulting signal.
    ///
    /// Every call produces a new record; re-analysis policy belongs to the
    /// caller. Any failure aborts with nothing persisted.
    pub async fn analyze(&self, symbol: &str) -> Result<Signal, ServiceError> {
        let asset = self
            .catalog
            .find_active(symbol)
            .ok_or_else(|| ServiceError::UnknownAsset(symbol.to_string()))?;

        let short_series = self
            .fetch_series(&asset.symbol, self.config.short_history)
            .await?;
        let long_series = self
            .fetch_series(&asset.symbol, self.config.long_history)
            .await?;

        let votes = IndicatorEngine::compute(&short_series, &self.config);
        let trend = TrendFilter::bias(&long_series, &self.config);
        let (direction, strength) =
            ConfluenceScorer::score(&votes, self.config.confluence_threshold);

        let record = SignalRecord {
            symbol: asset.symbol.clone(),
            direction,
            strength,
            ema_signal: votes.ema,
            rsi_signal: votes.rsi,
            bbands_signal: votes.bbands,
            macd_signal: votes.macd,
            long_term_trend: trend,
            created_at: Utc::now(),
        };
        let id = self.store.save(&record).await?;

        info!(
            symbol = %asset.symbol,
            direction = %direction.as_str(),
            strength = strength,
            trend = %trend.as_str(),
            "Signal generated for {}: {} ({}/4)",
            asset.symbol,
            direction.as_str(),
            strength
        );

        Ok(record.into_signal(id))
    }

    /// Most recent signals first.
    pub async fn get_recent(&self, limit: usize) -> Result<Vec<Signal>, ServiceError> {
        Ok(self.store.query_recent(limit).await?)
    }

    /// Most recent signals with at least `min_strength` agreeing votes.
    pub async fn get_strong(
        &self,
        min_strength: u8,
        limit: usize,
    ) -> Result<Vec<Signal>, ServiceError> {
        Ok(self.store.query_by_min_strength(min_strength, limit).await?)
    }

    pub fn active_assets(&self) -> Vec<Asset> {
        self.catalog.get_active()
    }

    async fn fetch_series(&self, symbol: &str, limit: usize) -> Result<Vec<Candle>, ServiceError> {
        let candles = self
            .provider
            .get_candles(symbol, &self.config.base_interval, limit)
            .await
            .map_err(|source| ServiceError::DataUnavailable {
                symbol: symbol.to_string(),
                source,
            })?;

        if candles.is_empty() {
            return Err(ServiceError::DataUnavailable {
                symbol: symbol.to_string(),
                source: MarketDataError::Empty,
            });
        }

        Ok(candles)
    }
}
