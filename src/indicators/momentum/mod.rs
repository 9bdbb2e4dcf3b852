pub mod macd;
pub mod rsi;

pub use macd::calculate_macd;
pub use rsi::calculate_rsi;
