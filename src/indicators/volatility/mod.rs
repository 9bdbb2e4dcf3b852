pub mod bollinger;

pub use bollinger::calculate_bollinger_bands;
