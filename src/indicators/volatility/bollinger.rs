//! Bollinger Bands indicator
//!
//! Middle band = SMA(period), outer bands = middle ± std_dev · σ(period).

use crate::common::math;
use crate::models::indicators::{BollingerIndicator, Candle};

pub fn calculate_bollinger_bands(
    candles: &[Candle],
    period: u32,
    std_dev: f64,
) -> Option<BollingerIndicator> {
    let closes = math::closes(candles);
    let middle = math::sma(&closes, period as usize)?;
    let sigma = math::standard_deviation(&closes, period as usize)?;

    Some(BollingerIndicator {
        upper: middle + std_dev * sigma,
        middle,
        lower: middle - std_dev * sigma,
        period,
        std_dev,
    })
}
