//! Core application primitives (HTTP server, worker runtime, scheduler)

pub mod http;
pub mod runtime;
pub mod scheduler;

pub use http::*;
pub use runtime::*;
pub use scheduler::*;
