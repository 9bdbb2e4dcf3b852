//! Cron-based scheduler that enqueues analysis jobs for every active asset

use crate::jobs::types::AnalyzeAssetJob;
use apalis::prelude::*;
use apalis_redis::RedisStorage;
use cron::Schedule;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

pub struct AnalysisScheduler {
    storage: Arc<RedisStorage<AnalyzeAssetJob>>,
    symbols: Vec<String>,
    schedule: Schedule,
    handle: Arc<RwLock<Option<tokio::task::JoinHandle<()>>>>,
}

impl AnalysisScheduler {
    /// Create a scheduler that fires every `interval_seconds` (must be > 0).
    pub fn new(
        storage: Arc<RedisStorage<AnalyzeAssetJob>>,
        symbols: Vec<String>,
        interval_seconds: u64,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        if interval_seconds == 0 {
            return Err("Scheduler disabled: interval_seconds is 0".into());
        }

        // Cron format: second minute hour day month weekday
        let cron_expr = if interval_seconds >= 60 {
            format!("0 */{} * * * *", interval_seconds / 60)
        } else {
            format!("*/{} * * * * *", interval_seconds)
        };
        let schedule = Schedule::from_str(&cron_expr)
            .map_err(|e| format!("Invalid cron expression '{}': {}", cron_expr, e))?;

        info!(
            interval = interval_seconds,
            cron = %cron_expr,
            symbols = ?symbols,
            "AnalysisScheduler: created with interval {}s (cron: {})",
            interval_seconds,
            cron_expr
        );

        Ok(Self {
            storage,
            symbols,
            schedule,
            handle: Arc::new(RwLock::new(None)),
        })
    }

    pub async fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let storage = self.storage.clone();
        let symbols = self.symbols.clone();
        let schedule = self.schedule.clone();
        let handle_arc = self.handle.clone();

        let handle = tokio::spawn(async move {
            info!("AnalysisScheduler: started, waiting for cron schedule...");

            loop {
                match schedule.upcoming(chrono::Utc).next() {
                    Some(next_tick) => {
                        let now = chrono::Utc::now();
                        if next_tick > now {
                            let wait = (next_tick - now).to_std().unwrap_or_default();
                            tokio::time::sleep(wait).await;
                        }
                    }
                    None => {
                        tokio::time::sleep(tokio::time::Duration::from_secs(60)).await;
                        continue;
                    }
                }

                info!(
                    symbol_count = symbols.len(),
                    "AnalysisScheduler: cron tick, enqueuing AnalyzeAssetJob for {} symbols",
                    symbols.len()
                );

                for symbol in &symbols {
                    let job = AnalyzeAssetJob {
                        symbol: symbol.clone(),
                    };
                    let mut storage = (*storage).clone();
                    match storage.push(job).await {
                        Ok(_) => {
                            debug!(symbol = %symbol, "AnalysisScheduler: enqueued AnalyzeAssetJob for {}", symbol);
                        }
                        Err(e) => {
                            error!(
                                symbol = %symbol,
                                error = %e,
                                "AnalysisScheduler: failed to enqueue AnalyzeAssetJob for {}",
                                symbol
                            );
                        }
                    }
                }
            }
        });

        {
            let mut h = handle_arc.write().await;
            *h = Some(handle);
        }

        info!("AnalysisScheduler: started successfully");
        Ok(())
    }

    pub async fn stop(&self) {
        let mut handle = self.handle.write().await;
        if let Some(h) = handle.take() {
            h.abort();
            info!("AnalysisScheduler: stopped");
        }
    }

    pub async fn is_running(&self) -> bool {
        let handle = self.handle.read().await;
        handle.is_some()
    }
}
