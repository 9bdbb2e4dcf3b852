//! Job handlers for the periodic analysis workflow

use crate::error::ServiceError;
use crate::jobs::context::JobContext;
use crate::jobs::types::AnalyzeAssetJob;
use apalis::prelude::*;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Handler for the analyze-asset job.
///
/// Runs one full analysis through the signal service. An unknown asset is
/// terminal (the catalog changed since the job was enqueued), so the job
/// completes without retry; data and storage failures bubble up so Apalis
/// can retry them.
pub async fn handle_analyze_asset(
    job: AnalyzeAssetJob,
    ctx: Data<Arc<JobContext>>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let start = Instant::now();
    if let Some(ref metrics) = ctx.metrics {
        metrics.signal_analyses_active.inc();
    }

    let result = ctx.service.analyze(&job.symbol).await;

    if let Some(ref metrics) = ctx.metrics {
        metrics.signal_analyses_active.dec();
        metrics.signal_analyses_total.inc();
        metrics
            .signal_analysis_duration_seconds
            .observe(start.elapsed().as_secs_f64());
    }

    match result {
        Ok(signal) => {
            info!(
                symbol = %job.symbol,
                direction = %signal.direction.as_str(),
                strength = signal.strength,
                "AnalyzeAssetJob: stored signal for {}: {} ({}/4)",
                job.symbol,
                signal.direction.as_str(),
                signal.strength
            );
            if let Some(ref metrics) = ctx.metrics {
                metrics
                    .signals_generated_total
                    .with_label_values(&[signal.direction.as_str()])
                    .inc();
            }
            Ok(())
        }
        Err(ServiceError::UnknownAsset(symbol)) => {
            warn!(
                symbol = %symbol,
                "AnalyzeAssetJob: asset no longer in catalog, dropping job"
            );
            Ok(())
        }
        Err(e) => {
            warn!(symbol = %job.symbol, error = %e, "AnalyzeAssetJob: analysis failed for {}", job.symbol);
            Err(Box::new(e) as Box<dyn std::error::Error + Send + Sync>)
        }
    }
}
