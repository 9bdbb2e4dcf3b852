//! Unit tests for the higher-timeframe trend filter

use chrono::{Duration, TimeZone, Utc};
use sinaltrix::config::EngineConfig;
use sinaltrix::models::{Candle, Vote};
use sinaltrix::signals::TrendFilter;

fn candles_from_closes(closes: &[f64]) -> Vec<Candle> {
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

fn linear(count: usize, start: f64, step: f64) -> Vec<Candle> {
    candles_from_closes(&(0..count).map(|i| start + i as f64 * step).collect::<Vec<_>>())
}

#[test]
fn insufficient_history_is_neutral() {
    // Default filter needs trend_period + trend_slope_lookback = 70 samples.
    let candles = linear(69, 100.0, 0.5);
    assert_eq!(
        TrendFilter::bias(&candles, &EngineConfig::default()),
        Vote::Neutral
    );
}

#[test]
fn rising_average_is_call() {
    let candles = linear(100, 100.0, 0.5);
    assert_eq!(
        TrendFilter::bias(&candles, &EngineConfig::default()),
        Vote::Call
    );
}

#[test]
fn falling_average_is_put() {
    let candles = linear(100, 200.0, -0.5);
    assert_eq!(
        TrendFilter::bias(&candles, &EngineConfig::default()),
        Vote::Put
    );
}

#[test]
fn flat_average_is_neutral() {
    let candles = linear(100, 100.0, 0.0);
    assert_eq!(
        TrendFilter::bias(&candles, &EngineConfig::default()),
        Vote::Neutral
    );
}

#[test]
fn slope_below_noise_threshold_is_neutral() {
    // 10-sample SMA displacement of 0.01 on a level near 100 is a slope of
    // roughly 1e-4, under the default 5e-4 threshold.
    let candles = linear(100, 100.0, 0.001);
    assert_eq!(
        TrendFilter::bias(&candles, &EngineConfig::default()),
        Vote::Neutral
    );
}

#[test]
fn bias_is_deterministic() {
    let candles = linear(100, 100.0, 0.5);
    let config = EngineConfig::default();
    assert_eq!(
        TrendFilter::bias(&candles, &config),
        TrendFilter::bias(&candles, &config)
    );
}
