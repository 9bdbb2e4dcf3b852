//! Market scenario tests for the vote-to-signal pipeline

use chrono::{Duration, TimeZone, Utc};
use sinaltrix::config::EngineConfig;
use sinaltrix::models::{Candle, Direction, Signal, Vote, VoteSet};
use sinaltrix::signals::{ConfluenceScorer, IndicatorEngine, TrendFilter};

fn votes(ema: Vote, rsi: Vote, bbands: Vote, macd: Vote) -> VoteSet {
    VoteSet {
        ema,
        rsi,
        bbands,
        macd,
    }
}

fn signal_with(direction: Direction, strength: u8, trend: Vote) -> Signal {
    let set = match direction {
        Direction::Call => votes(Vote::Call, Vote::Call, Vote::Call, Vote::Put),
        Direction::Put => votes(Vote::Put, Vote::Put, Vote::Put, Vote::Call),
        Direction::Esperar => votes(Vote::Call, Vote::Call, Vote::Put, Vote::Put),
    };
    Signal {
        id: 1,
        symbol: "EURUSD=X".to_string(),
        direction,
        strength,
        ema_signal: set.ema,
        rsi_signal: set.rsi,
        bbands_signal: set.bbands,
        macd_signal: set.macd,
        long_term_trend: trend,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
    }
}

#[test]
fn unanimous_confluence_gives_full_strength_call() {
    let set = votes(Vote::Call, Vote::Call, Vote::Call, Vote::Call);
    let (direction, strength) = ConfluenceScorer::score(&set, 3);
    assert_eq!(direction, Direction::Call);
    assert_eq!(strength, 4);
}

#[test]
fn split_votes_produce_no_trade() {
    let set = votes(Vote::Call, Vote::Call, Vote::Put, Vote::Put);
    let (direction, strength) = ConfluenceScorer::score(&set, 3);
    assert_eq!(direction, Direction::Esperar);
    assert_eq!(strength, 0);
}

#[test]
fn three_vote_call_with_confirming_trend_is_strong() {
    let set = votes(Vote::Call, Vote::Call, Vote::Call, Vote::Put);
    let (direction, strength) = ConfluenceScorer::score(&set, 3);
    assert_eq!(direction, Direction::Call);
    assert_eq!(strength, 3);

    let signal = signal_with(direction, strength, Vote::Call);
    assert!(signal.is_strong());
}

#[test]
fn opposing_trend_keeps_strength_but_blocks_strong() {
    let set = votes(Vote::Call, Vote::Call, Vote::Call, Vote::Put);
    let (direction, strength) = ConfluenceScorer::score(&set, 3);
    // Strength is unaffected by the trend bias.
    assert_eq!(direction, Direction::Call);
    assert_eq!(strength, 3);

    let signal = signal_with(direction, strength, Vote::Put);
    assert!(!signal.is_strong());

    let signal = signal_with(direction, strength, Vote::Neutral);
    assert!(!signal.is_strong());
}

#[test]
fn wait_signals_are_never_strong() {
    let signal = signal_with(Direction::Esperar, 0, Vote::Call);
    assert!(!signal.is_strong());
}

#[test]
fn too_short_history_yields_neutral_wait_without_error() {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let candles: Vec<Candle> = (0..5)
        .map(|i| {
            let close = 100.0 + i as f64;
            Candle::new(
                close,
                close + 0.1,
                close - 0.1,
                close,
                1_000.0,
                base + Duration::minutes(i as i64),
            )
        })
        .collect();

    let config = EngineConfig::default();
    let set = IndicatorEngine::compute(&candles, &config);
    assert_eq!(
        set,
        votes(Vote::Neutral, Vote::Neutral, Vote::Neutral, Vote::Neutral)
    );

    let trend = TrendFilter::bias(&candles, &config);
    assert_eq!(trend, Vote::Neutral);

    let (direction, strength) = ConfluenceScorer::score(&set, config.confluence_threshold);
    assert_eq!(direction, Direction::Esperar);
    assert_eq!(strength, 0);
}
