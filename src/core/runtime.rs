//! Apalis worker setup for analysis jobs

use crate::jobs::context::JobContext;
use crate::jobs::handlers;
use crate::jobs::types::AnalyzeAssetJob;
use apalis::prelude::*;
use apalis_redis::RedisStorage;
use std::sync::Arc;
use tracing::info;

/// Configuration for the job runtime
#[derive(Clone)]
pub struct RuntimeConfig {
    pub evaluation_interval_seconds: u64,
    pub symbols: Vec<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            evaluation_interval_seconds: 60,
            symbols: Vec::new(),
        }
    }
}

/// Analysis runtime that sets up the Apalis worker
pub struct SignalRuntime {
    _config: RuntimeConfig,
    job_context: Arc<JobContext>,
    storage: Arc<RedisStorage<AnalyzeAssetJob>>,
    concurrency: usize,
}

impl SignalRuntime {
    pub fn new(
        config: RuntimeConfig,
        job_context: Arc<JobContext>,
        storage: Arc<RedisStorage<AnalyzeAssetJob>>,
    ) -> Self {
        let concurrency = config.symbols.len().max(1);
        Self {
            _config: config,
            job_context,
            storage,
            concurrency,
        }
    }

    /// Set custom concurrency (default is number of symbols)
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    /// Start the worker and return its handle for graceful shutdown
    pub async fn start_workers(
        &self,
    ) -> Result<Vec<tokio::task::JoinHandle<()>>, Box<dyn std::error::Error + Send + Sync>> {
        let mut handles = Vec::new();

        info!(
            concurrency = self.concurrency,
            "SignalRuntime: starting Apalis worker with concurrency {}",
            self.concurrency
        );

        let storage = (*self.storage).clone();
        let job_context = self.job_context.clone();
        let handle = tokio::spawn(async move {
            let worker = WorkerBuilder::new("analyze-asset-worker")
                .data(job_context.clone())
                .backend(storage)
                .build_fn(handlers::handle_analyze_asset);

            info!("SignalRuntime: AnalyzeAssetJob worker started");
            worker.run().await;
        });
        handles.push(handle);

        info!("SignalRuntime: all workers started");
        Ok(handles)
    }
}
