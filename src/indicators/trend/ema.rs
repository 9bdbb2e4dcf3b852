//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::models::indicators::{Candle, EmaCrossIndicator, EmaIndicator};

/// Calculate EMA for a specific period at the most recent sample.
pub fn calculate_ema(candles: &[Candle], period: u32) -> Option<EmaIndicator> {
    let closes = math::closes(candles);
    let value = math::ema(&closes, period as usize)?;
    Some(EmaIndicator { value, period })
}

/// Fast/slow EMA pair at the last two samples.
///
/// Needs `slow_period + 1` candles so the previous sample has a valid slow
/// EMA to compare against.
pub fn calculate_ema_cross(
    candles: &[Candle],
    fast_period: u32,
    slow_period: u32,
) -> Option<EmaCrossIndicator> {
    if candles.len() < slow_period as usize + 1 {
        return None;
    }

    let closes = math::closes(candles);
    let fast_series = math::ema_series(&closes, fast_period as usize)?;
    let slow_series = math::ema_series(&closes, slow_period as usize)?;

    let fast = *fast_series.last()?;
    let slow = *slow_series.last()?;
    let prev_fast = fast_series[fast_series.len() - 2];
    let prev_slow = slow_series[slow_series.len() - 2];

    Some(EmaCrossIndicator {
        fast,
        slow,
        prev_fast,
        prev_slow,
        fast_period,
        slow_period,
    })
}
