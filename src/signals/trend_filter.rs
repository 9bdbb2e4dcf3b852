//! Higher-timeframe trend bias.
//!
//! Only used to qualify the "strong" classification; never counted toward
//! signal strength.

use crate::common::math;
use crate::config::EngineConfig;
use crate::models::indicators::Candle;
use crate::models::Vote;

pub struct TrendFilter;

impl TrendFilter {
    /// Direction of the long moving average at the most recent sample.
    ///
    /// The SMA is evaluated now and `trend_slope_lookback` samples ago; the
    /// fractional slope between the two must clear the noise threshold to
    /// count as a trend. Too little history yields NEUTRAL.
    pub fn bias(candles: &[Candle], config: &EngineConfig) -> Vote {
        let period = config.trend_period as usize;
        let lookback = config.trend_slope_lookback as usize;
        if lookback == 0 || candles.len() < period + lookback {
            return Vote::Neutral;
        }

        let closes = math::closes(candles);
        let (Some(now), Some(then)) = (
            math::sma(&closes, period),
            math::sma(&closes[..closes.len() - lookback], period),
        ) else {
            return Vote::Neutral;
        };
        if then == 0.0 {
            return Vote::Neutral;
        }

        let slope = (now - then) / then;
        if slope > config.trend_noise_threshold {
            Vote::Call
        } else if slope < -config.trend_noise_threshold {
            Vote::Put
        } else {
            Vote::Neutral
        }
    }
}
