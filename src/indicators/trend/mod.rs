pub mod ema;

pub use ema::{calculate_ema, calculate_ema_cross};
