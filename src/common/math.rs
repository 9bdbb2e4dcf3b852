//! Moving-average and dispersion primitives used by the indicators.
//!
//! All functions operate on an oldest-first slice and look at the trailing
//! `period` values. They return `None` instead of erroring when the slice is
//! too short, which is what lets indicator votes degrade to NEUTRAL.

/// Simple moving average over the last `period` values.
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    Some(window.iter().sum::<f64>() / period as f64)
}

/// Population standard deviation over the last `period` values.
pub fn standard_deviation(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    let mean = window.iter().sum::<f64>() / period as f64;
    let variance = window
        .iter()
        .map(|v| {
            let d = v - mean;
            d * d
        })
        .sum::<f64>()
        / period as f64;
    Some(variance.sqrt())
}

/// One EMA smoothing step.
pub fn ema_from_previous(value: f64, prev_ema: f64, period: usize) -> f64 {
    let k = 2.0 / (period as f64 + 1.0);
    value * k + prev_ema * (1.0 - k)
}

/// EMA at the last sample, seeded with the SMA of the first `period` values.
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    ema_series(values, period).and_then(|s| s.last().copied())
}

/// Full EMA series starting at index `period - 1` of the input.
///
/// The returned vector has `values.len() - period + 1` entries; entry `i`
/// is the EMA evaluated at input index `period - 1 + i`.
pub fn ema_series(values: &[f64], period: usize) -> Option<Vec<f64>> {
    if period == 0 || values.len() < period {
        return None;
    }
    let seed = values[..period].iter().sum::<f64>() / period as f64;
    let mut series = Vec::with_capacity(values.len() - period + 1);
    series.push(seed);
    let mut current = seed;
    for value in &values[period..] {
        current = ema_from_previous(*value, current, period);
        series.push(current);
    }
    Some(series)
}

/// Closing prices of a candle slice, oldest first.
pub fn closes(candles: &[crate::models::Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.close).collect()
}
