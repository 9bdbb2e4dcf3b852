//! Test utilities for API server integration tests

use crate::test_utils::{test_catalog, uptrend_candles, StubPriceProvider};
use axum_test::TestServer;
use sinaltrix::config::EngineConfig;
use sinaltrix::core::http::{create_router, AppState, HealthStatus};
use sinaltrix::db::MemorySignalStore;
use sinaltrix::metrics::Metrics;
use sinaltrix::signals::SignalService;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

/// Test helper for API server integration tests
#[allow(dead_code)]
pub struct TestApiServer {
    pub server: TestServer,
    pub store: Arc<MemorySignalStore>,
    pub metrics: Arc<Metrics>,
}

impl TestApiServer {
    pub async fn new() -> Self {
        Self::with_provider(StubPriceProvider::with_candles(uptrend_candles(220))).await
    }

    pub async fn with_provider(provider: StubPriceProvider) -> Self {
        let store = Arc::new(MemorySignalStore::new());
        let service = Arc::new(SignalService::new(
            Arc::new(test_catalog()),
            Arc::new(provider),
            store.clone(),
            EngineConfig::default(),
        ));
        let metrics = Arc::new(Metrics::new().expect("metrics initialization"));
        let state = AppState {
            health: Arc::new(RwLock::new(HealthStatus::default())),
            metrics: metrics.clone(),
            start_time: Arc::new(Instant::now()),
            service,
        };

        let app = create_router(state);
        let server = TestServer::new(app).expect("start test server");

        Self {
            server,
            store,
            metrics,
        }
    }
}
