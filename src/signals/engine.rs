//! Turns a price series into the four core indicator votes.

use crate::config::EngineConfig;
use crate::indicators::{calculate_bollinger_bands, calculate_ema_cross, calculate_macd, calculate_rsi};
use crate::models::indicators::{Candle, EmaCrossIndicator, MacdIndicator};
use crate::models::{Vote, VoteSet};

pub struct IndicatorEngine;

impl IndicatorEngine {
    /// Compute all four votes. Pure and total: an indicator whose lookback
    /// exceeds the series length votes NEUTRAL instead of failing the run.
    pub fn compute(candles: &[Candle], config: &EngineConfig) -> VoteSet {
        VoteSet {
            ema: Self::ema_vote(candles, config),
            rsi: Self::rsi_vote(candles, config),
            bbands: Self::bbands_vote(candles, config),
            macd: Self::macd_vote(candles, config),
        }
    }

    /// CALL when the fast EMA crossed above the slow on the last sample, or
    /// already sits above it by more than the configured separation. PUT on
    /// the mirror.
    fn ema_vote(candles: &[Candle], config: &EngineConfig) -> Vote {
        let Some(cross) = calculate_ema_cross(candles, config.ema_fast_period, config.ema_slow_period)
        else {
            return Vote::Neutral;
        };

        let EmaCrossIndicator {
            fast,
            slow,
            prev_fast,
            prev_slow,
            ..
        } = cross;

        let crossed_up = prev_fast <= prev_slow && fast > slow;
        let crossed_down = prev_fast >= prev_slow && fast < slow;
        // Separation relative to the slow EMA so the threshold is
        // price-scale independent.
        let separation = (fast - slow) / slow;

        if crossed_up || separation > config.ema_min_separation {
            Vote::Call
        } else if crossed_down || separation < -config.ema_min_separation {
            Vote::Put
        } else {
            Vote::Neutral
        }
    }

    /// Reversal bias: oversold is a buy, overbought a sell.
    fn rsi_vote(candles: &[Candle], config: &EngineConfig) -> Vote {
        let Some(rsi) = calculate_rsi(candles, config.rsi_period) else {
            return Vote::Neutral;
        };

        if rsi.value < config.rsi_oversold {
            Vote::Call
        } else if rsi.value > config.rsi_overbought {
            Vote::Put
        } else {
            Vote::Neutral
        }
    }

    /// CALL at/below the lower band, PUT at/above the upper band.
    fn bbands_vote(candles: &[Candle], config: &EngineConfig) -> Vote {
        let Some(bands) = calculate_bollinger_bands(candles, config.bb_period, config.bb_std_dev)
        else {
            return Vote::Neutral;
        };
        let Some(close) = candles.last().map(|c| c.close) else {
            return Vote::Neutral;
        };

        if close <= bands.lower {
            Vote::Call
        } else if close >= bands.upper {
            Vote::Put
        } else {
            Vote::Neutral
        }
    }

    /// CALL on a bullish crossover of the MACD line over its signal line, or
    /// when the MACD line is positive and rising. PUT on the mirror.
    fn macd_vote(candles: &[Candle], config: &EngineConfig) -> Vote {
        let Some(macd) = calculate_macd(
            candles,
            config.macd_fast_period,
            config.macd_slow_period,
            config.macd_signal_period,
        ) else {
            return Vote::Neutral;
        };

        let MacdIndicator {
            macd: line,
            signal,
            prev_macd,
            prev_signal,
            ..
        } = macd;

        let crossed_up = prev_macd <= prev_signal && line > signal;
        let crossed_down = prev_macd >= prev_signal && line < signal;

        if crossed_up || (line > 0.0 && line > prev_macd) {
            Vote::Call
        } else if crossed_down || (line < 0.0 && line < prev_macd) {
            Vote::Put
        } else {
            Vote::Neutral
        }
    }
}
