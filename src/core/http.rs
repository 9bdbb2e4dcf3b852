//! HTTP endpoint server using Axum

use axum::{
    extract::{Query, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Json, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, Level};

use crate::config::EngineConfig;
use crate::db::QuestDatabase;
use crate::error::ServiceError;
use crate::metrics::Metrics;
use crate::models::{Asset, Signal};
use crate::services::{ChartApiProvider, StaticAssetCatalog};
use crate::signals::SignalService;

const DEFAULT_RECENT_LIMIT: usize = 20;
const DEFAULT_STRONG_LIMIT: usize = 10;
const DEFAULT_MIN_STRENGTH: u8 = 3;

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub service: Arc<SignalService>,
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "sinaltrix-signal-engine"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

fn error_status(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::UnknownAsset(_) => StatusCode::NOT_FOUND,
        ServiceError::DataUnavailable { .. } => StatusCode::BAD_GATEWAY,
        ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// List assets eligible for analysis
async fn list_assets(State(state): State<AppState>) -> Json<Vec<Asset>> {
    Json(state.service.active_assets())
}

#[derive(Debug, Deserialize)]
struct RecentQuery {
    limit: Option<usize>,
}

/// Most recent signals, newest first
async fn recent_signals(
    State(state): State<AppState>,
    Query(params): Query<RecentQuery>,
) -> Result<Json<Vec<Signal>>, StatusCode> {
    let limit = params.limit.unwrap_or(DEFAULT_RECENT_LIMIT);
    let signals = state.service.get_recent(limit).await.map_err(|e| {
        error!(error = %e, "Failed to load recent signals");
        error_status(&e)
    })?;
    Ok(Json(signals))
}

#[derive(Debug, Deserialize)]
struct StrongQuery {
    min_strength: Option<u8>,
    limit: Option<usize>,
}

/// Signals with at least `min_strength` agreeing votes, newest first
async fn strong_signals(
    State(state): State<AppState>,
    Query(params): Query<StrongQuery>,
) -> Result<Json<Vec<Signal>>, StatusCode> {
    let min_strength = params.min_strength.unwrap_or(DEFAULT_MIN_STRENGTH);
    let limit = params.limit.unwrap_or(DEFAULT_STRONG_LIMIT);
    let signals = state
        .service
        .get_strong(min_strength, limit)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to load strong signals");
            error_status(&e)
        })?;
    Ok(Json(signals))
}

#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    symbol: String,
}

/// Run one analysis and append the resulting signal
async fn analyze_symbol(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<Signal>, StatusCode> {
    let signal = state.service.analyze(&request.symbol).await.map_err(|e| {
        error!(symbol = %request.symbol, error = %e, "Analysis failed");
        error_status(&e)
    })?;

    state
        .metrics
        .signals_generated_total
        .with_label_values(&[signal.direction.as_str()])
        .inc();

    Ok(Json(signal))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/assets", get(list_assets))
        .route("/api/signals/recent", get(recent_signals))
        .route("/api/signals/strong", get(strong_signals))
        .route("/api/signals/analyze", post(analyze_symbol))
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    let start_time = Arc::new(Instant::now());

    let database = QuestDatabase::new().await?;
    info!("QuestDB connected for API server");
    metrics.database_connected.set(1.0);

    let service = Arc::new(SignalService::new(
        Arc::new(StaticAssetCatalog::from_env()),
        Arc::new(ChartApiProvider::from_env()),
        Arc::new(database),
        EngineConfig::from_env(),
    ));

    let state = AppState {
        health: Arc::new(RwLock::new(HealthStatus::default())),
        metrics: metrics.clone(),
        start_time: start_time.clone(),
        service,
    };
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    info!(
        "Metrics endpoint available at http://0.0.0.0:{}/metrics",
        port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
