//! Unit tests for the Bollinger Bands indicator

use chrono::{Duration, TimeZone, Utc};
use sinaltrix::indicators::volatility::calculate_bollinger_bands;
use sinaltrix::models::Candle;

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

#[test]
fn bollinger_insufficient_data() {
    let candles = candles_from_closes(&[1.0; 19]);
    assert!(calculate_bollinger_bands(&candles, 20, 2.0).is_none());
}

#[test]
fn bollinger_bands_collapse_on_constant_series() {
    let candles = candles_from_closes(&[100.0; 25]);
    let bands = calculate_bollinger_bands(&candles, 20, 2.0).unwrap();
    assert_eq!(bands.middle, 100.0);
    assert_eq!(bands.upper, 100.0);
    assert_eq!(bands.lower, 100.0);
}

#[test]
fn bollinger_known_values() {
    // window [1,2,3,4]: mean 2.5, population variance 1.25
    let candles = candles_from_closes(&[1.0, 2.0, 3.0, 4.0]);
    let bands = calculate_bollinger_bands(&candles, 4, 2.0).unwrap();
    let sigma = 1.25f64.sqrt();
    assert_eq!(bands.middle, 2.5);
    assert!((bands.upper - (2.5 + 2.0 * sigma)).abs() < 1e-12);
    assert!((bands.lower - (2.5 - 2.0 * sigma)).abs() < 1e-12);
}

#[test]
fn bollinger_bands_are_symmetric_around_middle() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 + (i % 5) as f64).collect();
    let candles = candles_from_closes(&closes);
    let bands = calculate_bollinger_bands(&candles, 20, 2.0).unwrap();
    assert!(((bands.upper - bands.middle) - (bands.middle - bands.lower)).abs() < 1e-12);
    assert!(bands.upper > bands.lower);
}
