//! Environment-driven configuration.
//!
//! Connection strings and deployment knobs come from the environment
//! (loaded from `.env` by the binaries); indicator thresholds live in
//! [`EngineConfig`] with conventional defaults that can be overridden the
//! same way.

use crate::models::Asset;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

pub fn get_questdb_url() -> String {
    env::var("QUESTDB_URL").unwrap_or_else(|_| {
        "host=localhost port=8812 user=admin password=quest dbname=qdb".to_string()
    })
}

pub fn get_redis_url() -> String {
    env::var("REDIS_URL").unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string())
}

/// Base URL of the chart HTTP API that serves OHLCV history.
pub fn get_chart_api_url() -> String {
    env::var("CHART_API_URL").unwrap_or_else(|_| "http://localhost:9000".to_string())
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Active assets the engine may analyze.
///
/// The catalog itself is owned by an external process; `ASSETS` is the
/// read-only projection this engine gets, as `symbol:name` pairs separated
/// by commas. Falls back to the stock forex/crypto list.
pub fn get_assets() -> Vec<Asset> {
    let raw = env::var("ASSETS").unwrap_or_default();
    let parsed: Vec<Asset> = raw
        .split(',')
        .filter_map(|entry| {
            let (symbol, name) = entry.split_once(':')?;
            let symbol = symbol.trim();
            if symbol.is_empty() {
                return None;
            }
            Some((symbol.to_string(), name.trim().to_string()))
        })
        .enumerate()
        .map(|(i, (symbol, name))| Asset::new(i as i64 + 1, symbol, name))
        .collect();

    if !parsed.is_empty() {
        return parsed;
    }

    [
        ("EURUSD=X", "Euro/Dólar Americano"),
        ("GBPUSD=X", "Libra/Dólar Americano"),
        ("USDJPY=X", "Dólar/Iene Japonês"),
        ("AUDUSD=X", "Dólar Australiano/Dólar Americano"),
        ("BTC-USD", "Bitcoin"),
        ("ETH-USD", "Ethereum"),
    ]
    .iter()
    .enumerate()
    .map(|(i, (symbol, name))| Asset::new(i as i64 + 1, *symbol, *name))
    .collect()
}

/// Numeric parameters of the indicator engine, trend filter and scorer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub ema_fast_period: u32,
    pub ema_slow_period: u32,
    /// Fractional fast/slow separation treated as an established cross.
    pub ema_min_separation: f64,
    pub rsi_period: u32,
    pub rsi_oversold: f64,
    pub rsi_overbought: f64,
    pub bb_period: u32,
    pub bb_std_dev: f64,
    pub macd_fast_period: u32,
    pub macd_slow_period: u32,
    pub macd_signal_period: u32,
    /// Minimum agreeing votes for a tradeable direction (of 4).
    pub confluence_threshold: u8,
    /// SMA window of the higher-timeframe trend filter, in base-interval
    /// samples (60 one-minute candles ≈ 1 hour).
    pub trend_period: u32,
    /// How many samples back the trend slope is measured against.
    pub trend_slope_lookback: u32,
    /// Fractional slope below which the trend is considered flat.
    pub trend_noise_threshold: f64,
    /// Candle interval requested from the price provider.
    pub base_interval: String,
    /// Candles fetched for the core indicators.
    pub short_history: usize,
    /// Candles fetched for the trend filter.
    pub long_history: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ema_fast_period: 9,
            ema_slow_period: 21,
            ema_min_separation: 0.0005,
            rsi_period: 14,
            rsi_oversold: 30.0,
            rsi_overbought: 70.0,
            bb_period: 20,
            bb_std_dev: 2.0,
            macd_fast_period: 12,
            macd_slow_period: 26,
            macd_signal_period: 9,
            confluence_threshold: 3,
            trend_period: 60,
            trend_slope_lookback: 10,
            trend_noise_threshold: 0.0005,
            base_interval: "1m".to_string(),
            short_history: 100,
            long_history: 200,
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by the corresponding environment variables.
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            ema_fast_period: env_parse("EMA_FAST_PERIOD", d.ema_fast_period),
            ema_slow_period: env_parse("EMA_SLOW_PERIOD", d.ema_slow_period),
            ema_min_separation: env_parse("EMA_MIN_SEPARATION", d.ema_min_separation),
            rsi_period: env_parse("RSI_PERIOD", d.rsi_period),
            rsi_oversold: env_parse("RSI_OVERSOLD", d.rsi_oversold),
            rsi_overbought: env_parse("RSI_OVERBOUGHT", d.rsi_overbought),
            bb_period: env_parse("BB_PERIOD", d.bb_period),
            bb_std_dev: env_parse("BB_STD_DEV", d.bb_std_dev),
            macd_fast_period: env_parse("MACD_FAST_PERIOD", d.macd_fast_period),
            macd_slow_period: env_parse("MACD_SLOW_PERIOD", d.macd_slow_period),
            macd_signal_period: env_parse("MACD_SIGNAL_PERIOD", d.macd_signal_period),
            confluence_threshold: env_parse("CONFLUENCE_THRESHOLD", d.confluence_threshold),
            trend_period: env_parse("TREND_PERIOD", d.trend_period),
            trend_slope_lookback: env_parse("TREND_SLOPE_LOOKBACK", d.trend_slope_lookback),
            trend_noise_threshold: env_parse("TREND_NOISE_THRESHOLD", d.trend_noise_threshold),
            base_interval: env::var("BASE_INTERVAL").unwrap_or(d.base_interval),
            short_history: env_parse("SHORT_HISTORY", d.short_history),
            long_history: env_parse("LONG_HISTORY", d.long_history),
        }
    }
}
