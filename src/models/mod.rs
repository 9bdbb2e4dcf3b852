//! Shared data models spanning the engine layers.

pub mod asset;
pub mod indicators;
pub mod signal;

pub use asset::Asset;
pub use indicators::{
    BollingerIndicator, Candle, EmaCrossIndicator, EmaIndicator, MacdIndicator, RsiIndicator,
};
pub use signal::{Direction, Signal, SignalRecord, Vote, VoteSet, STRONG_MIN_STRENGTH};
