//! MACD (Moving Average Convergence Divergence) indicator
//!
//! MACD = EMA(fast) - EMA(slow), signal = EMA(signal_period) of the MACD
//! line, histogram = MACD - signal.

use crate::common::math;
use crate::models::indicators::{Candle, MacdIndicator};

/// Calculate MACD and its signal line at the last two samples.
///
/// Needs `slow_period + signal_period` candles: the MACD line only exists
/// from index `slow_period - 1`, and the signal line needs
/// `signal_period + 1` MACD values to produce two points.
pub fn calculate_macd(
    candles: &[Candle],
    fast_period: u32,
    slow_period: u32,
    signal_period: u32,
) -> Option<MacdIndicator> {
    let (fast_period, slow_period, signal_period) = (
        fast_period as usize,
        slow_period as usize,
        signal_period as usize,
    );
    if candles.len() < slow_period + signal_period {
        return None;
    }

    let closes = math::closes(candles);
    let fast_series = math::ema_series(&closes, fast_period)?;
    let slow_series = math::ema_series(&closes, slow_period)?;

    // Both series end at the last candle; align their tails to subtract.
    let len = slow_series.len().min(fast_series.len());
    let fast_tail = &fast_series[fast_series.len() - len..];
    let slow_tail = &slow_series[slow_series.len() - len..];
    let macd_values: Vec<f64> = fast_tail
        .iter()
        .zip(slow_tail)
        .map(|(f, s)| f - s)
        .collect();

    let signal_series = math::ema_series(&macd_values, signal_period)?;
    if signal_series.len() < 2 || macd_values.len() < 2 {
        return None;
    }

    let macd = *macd_values.last()?;
    let signal = *signal_series.last()?;

    Some(MacdIndicator {
        macd,
        signal,
        histogram: macd - signal,
        prev_macd: macd_values[macd_values.len() - 2],
        prev_signal: signal_series[signal_series.len() - 2],
    })
}
