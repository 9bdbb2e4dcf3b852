//! Background analysis jobs processed by the Apalis worker.

pub mod context;
pub mod handlers;
pub mod types;
