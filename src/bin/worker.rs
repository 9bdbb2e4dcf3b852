//! Sinaltrix Worker
//!
//! Re-analyzes every active asset on a schedule via the Redis job queue.
//! Can run as a separate process/instance from the API server.

use apalis_redis::RedisStorage;
use dotenvy::dotenv;
use sinaltrix::config::EngineConfig;
use sinaltrix::core::runtime::{RuntimeConfig, SignalRuntime};
use sinaltrix::core::scheduler::AnalysisScheduler;
use sinaltrix::db::QuestDatabase;
use sinaltrix::jobs::context::JobContext;
use sinaltrix::jobs::types::AnalyzeAssetJob;
use sinaltrix::logging;
use sinaltrix::metrics::Metrics;
use sinaltrix::services::{AssetCatalog, ChartApiProvider, StaticAssetCatalog};
use sinaltrix::signals::SignalService;
use std::env;
use std::sync::Arc;
use tokio::signal;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let eval_interval: u64 = env::var("EVAL_INTERVAL_SECONDS")
        .ok()
        .and_then(|i| i.parse().ok())
        .unwrap_or(0);

    let env_name = sinaltrix::config::get_environment();
    info!("Starting Sinaltrix Worker");
    info!(environment = %env_name, "Environment");

    if eval_interval == 0 {
        return Err("EVAL_INTERVAL_SECONDS must be > 0 for worker".into());
    }

    let metrics = Arc::new(Metrics::new()?);

    info!("Initializing QuestDB connection...");
    let database = match QuestDatabase::new().await {
        Ok(db) => {
            info!("QuestDB connected");
            metrics.database_connected.set(1.0);
            Arc::new(db)
        }
        Err(e) => {
            warn!(error = %e, "Failed to connect to QuestDB");
            warn!("Worker requires QuestDB for storing signals - exiting");
            return Err(format!("QuestDB connection required for worker: {}", e).into());
        }
    };

    let catalog = Arc::new(StaticAssetCatalog::from_env());
    let symbols: Vec<String> = catalog
        .get_active()
        .into_iter()
        .map(|a| a.symbol)
        .collect();

    if symbols.is_empty() {
        warn!("No active assets configured - worker will start but nothing will be scheduled");
    } else {
        info!(symbols = ?symbols, "Active assets: {}", symbols.join(", "));
    }

    let concurrency: usize = env::var("WORKER_CONCURRENCY")
        .ok()
        .and_then(|c| c.parse().ok())
        .unwrap_or_else(|| symbols.len().max(1));

    info!(concurrency = concurrency, "Worker concurrency: {}", concurrency);
    info!(
        interval = eval_interval,
        "Signal analysis: every {} seconds", eval_interval
    );

    let service = Arc::new(SignalService::new(
        catalog,
        Arc::new(ChartApiProvider::from_env()),
        database,
        EngineConfig::from_env(),
    ));

    info!("Initializing Apalis Redis storage...");
    let redis_url = sinaltrix::config::get_redis_url();
    let conn = apalis_redis::connect(redis_url).await?;
    let storage: Arc<RedisStorage<AnalyzeAssetJob>> = Arc::new(RedisStorage::new(conn));
    info!("Apalis Redis storage initialized");

    let job_context = Arc::new(JobContext::new(service, Some(metrics.clone())));

    let runtime_config = RuntimeConfig {
        evaluation_interval_seconds: eval_interval,
        symbols: symbols.clone(),
    };

    info!("Starting Apalis workers...");
    let runtime = SignalRuntime::new(runtime_config, job_context, storage.clone())
        .with_concurrency(concurrency);
    let worker_handles = runtime
        .start_workers()
        .await
        .map_err(|e| format!("Failed to start workers: {}", e))?;

    info!("Starting analysis scheduler...");
    let scheduler = AnalysisScheduler::new(storage, symbols, eval_interval)
        .map_err(|e| format!("Failed to create scheduler: {}", e))?;
    scheduler
        .start()
        .await
        .map_err(|e| format!("Failed to start scheduler: {}", e))?;

    info!("Worker started, waiting for shutdown signal...");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down worker...");
            scheduler.stop().await;
            for handle in worker_handles {
                handle.abort();
            }
            info!("Worker stopped");
        }
    }

    Ok(())
}
