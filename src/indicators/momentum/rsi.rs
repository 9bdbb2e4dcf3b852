//! RSI (Relative Strength Index) indicator
//!
//! RSI = 100 - (100 / (1 + RS)), RS = average gain / average loss over the
//! trailing period.

use crate::models::indicators::{Candle, RsiIndicator};

/// Calculate RSI over the last `period` price changes.
///
/// Needs `period + 1` candles, one extra to form the first change.
pub fn calculate_rsi(candles: &[Candle], period: u32) -> Option<RsiIndicator> {
    let period = period as usize;
    if period == 0 || candles.len() < period + 1 {
        return None;
    }

    let window = &candles[candles.len() - (period + 1)..];
    let mut gain_sum = 0.0;
    let mut loss_sum = 0.0;
    for pair in window.windows(2) {
        let change = pair[1].close - pair[0].close;
        if change >= 0.0 {
            gain_sum += change;
        } else {
            loss_sum -= change;
        }
    }

    let avg_gain = gain_sum / period as f64;
    let avg_loss = loss_sum / period as f64;

    let value = if avg_loss == 0.0 {
        100.0
    } else {
        let rs = avg_gain / avg_loss;
        100.0 - (100.0 / (1.0 + rs))
    };

    Some(RsiIndicator {
        value,
        period: period as u32,
    })
}
