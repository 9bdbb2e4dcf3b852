//! Sinaltrix: confluence-based trading signal engine.
//!
//! Four technical indicators (EMA crossover, RSI band, Bollinger position,
//! MACD crossover) each cast a directional vote over a price series. The
//! confluence scorer turns the votes into a CALL/PUT/ESPERAR decision with
//! an integer strength, and a higher-timeframe trend filter qualifies which
//! signals count as strong. Generated signals are appended to a store and
//! served over the HTTP API; the worker re-analyzes active assets on a
//! schedule.

pub mod common;
pub mod config;
pub mod core;
pub mod db;
pub mod error;
pub mod indicators;
pub mod jobs;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
pub mod signals;
