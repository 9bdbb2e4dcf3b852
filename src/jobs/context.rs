//! Job context for dependency injection

use crate::metrics::Metrics;
use crate::signals::SignalService;
use std::sync::Arc;

/// Context passed to job handlers via the Apalis `Data<T>` pattern.
///
/// The handler only needs the signal service (which owns the catalog,
/// price provider and store) and the metrics registry.
pub struct JobContext {
    pub service: Arc<SignalService>,
    pub metrics: Option<Arc<Metrics>>,
}

impl JobContext {
    pub fn new(service: Arc<SignalService>, metrics: Option<Arc<Metrics>>) -> Self {
        Self { service, metrics }
    }
}
