//! Numeric indicator calculations over candle series.
//!
//! Every function here is pure: same series in, same value out, no shared
//! state. `None` means the series is too short for the lookback, never an
//! error.

pub mod momentum;
pub mod trend;
pub mod volatility;

pub use momentum::{calculate_macd, calculate_rsi};
pub use trend::{calculate_ema, calculate_ema_cross};
pub use volatility::calculate_bollinger_bands;
