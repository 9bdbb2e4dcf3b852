//! Signal output types.
//!
//! A `Signal` is immutable once created; the store is an append-only log
//! ordered by `created_at`. Field names serialize camelCase because the
//! dashboard consumes them as-is.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Minimum strength for a signal to qualify as strong (together with a
/// confirming long-term trend).
pub const STRONG_MIN_STRENGTH: u8 = 3;

/// A single indicator's directional opinion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Vote {
    Call,
    Put,
    Neutral,
}

impl Vote {
    pub fn as_str(&self) -> &'static str {
        match self {
            Vote::Call => "CALL",
            Vote::Put => "PUT",
            Vote::Neutral => "NEUTRAL",
        }
    }

    /// Lenient parse for values read back from storage.
    pub fn from_db(value: &str) -> Self {
        match value {
            "CALL" => Vote::Call,
            "PUT" => Vote::Put,
            _ => Vote::Neutral,
        }
    }

    /// Whether this vote corroborates a chosen direction.
    pub fn confirms(&self, direction: Direction) -> bool {
        matches!(
            (self, direction),
            (Vote::Call, Direction::Call) | (Vote::Put, Direction::Put)
        )
    }
}

/// The aggregated trade decision. ESPERAR means wait, no trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Call,
    Put,
    Esperar,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Call => "CALL",
            Direction::Put => "PUT",
            Direction::Esperar => "ESPERAR",
        }
    }

    pub fn from_db(value: &str) -> Self {
        match value {
            "CALL" => Direction::Call,
            "PUT" => Direction::Put,
            _ => Direction::Esperar,
        }
    }
}

/// The four core indicator votes. The indicator set is closed, so a fixed
/// record beats a dynamic mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteSet {
    pub ema: Vote,
    pub rsi: Vote,
    pub bbands: Vote,
    pub macd: Vote,
}

impl VoteSet {
    pub fn count(&self, vote: Vote) -> u8 {
        [self.ema, self.rsi, self.bbands, self.macd]
            .iter()
            .filter(|v| **v == vote)
            .count() as u8
    }
}

/// A signal that has not been persisted yet. `SignalStore::save` assigns the
/// id and turns it into a [`Signal`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalRecord {
    pub symbol: String,
    pub direction: Direction,
    pub strength: u8,
    pub ema_signal: Vote,
    pub rsi_signal: Vote,
    pub bbands_signal: Vote,
    pub macd_signal: Vote,
    pub long_term_trend: Vote,
    pub created_at: DateTime<Utc>,
}

impl SignalRecord {
    pub fn into_signal(self, id: i64) -> Signal {
        Signal {
            id,
            symbol: self.symbol,
            direction: self.direction,
            strength: self.strength,
            ema_signal: self.ema_signal,
            rsi_signal: self.rsi_signal,
            bbands_signal: self.bbands_signal,
            macd_signal: self.macd_signal,
            long_term_trend: self.long_term_trend,
            created_at: self.created_at,
        }
    }
}

/// A persisted signal. Never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    pub id: i64,
    pub symbol: String,
    pub direction: Direction,
    pub strength: u8,
    pub ema_signal: Vote,
    pub rsi_signal: Vote,
    pub bbands_signal: Vote,
    pub macd_signal: Vote,
    pub long_term_trend: Vote,
    pub created_at: DateTime<Utc>,
}

impl Signal {
    /// Derived, not stored: strong confluence corroborated by the
    /// higher-timeframe trend.
    pub fn is_strong(&self) -> bool {
        self.strength >= STRONG_MIN_STRENGTH && self.long_term_trend.confirms(self.direction)
    }
}
