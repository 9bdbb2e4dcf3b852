//! Prometheus metrics for the API server and worker.

use prometheus::{
    Encoder, Gauge, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
    TextEncoder,
};

pub struct Metrics {
    registry: Registry,
    pub http_requests_total: IntCounter,
    pub http_requests_in_flight: IntGauge,
    pub http_request_duration_seconds: Histogram,
    pub signal_analyses_total: IntCounter,
    pub signal_analyses_active: IntGauge,
    pub signal_analysis_duration_seconds: Histogram,
    pub signals_generated_total: IntCounterVec,
    pub database_connected: Gauge,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let http_requests_total = IntCounter::with_opts(Opts::new(
            "http_requests_total",
            "Total HTTP requests received",
        ))?;
        let http_requests_in_flight = IntGauge::with_opts(Opts::new(
            "http_requests_in_flight",
            "HTTP requests currently being served",
        ))?;
        let http_request_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "http_request_duration_seconds",
            "HTTP request latency in seconds",
        ))?;
        let signal_analyses_total = IntCounter::with_opts(Opts::new(
            "signal_analyses_total",
            "Completed signal analyses",
        ))?;
        let signal_analyses_active = IntGauge::with_opts(Opts::new(
            "signal_analyses_active",
            "Signal analyses currently running",
        ))?;
        let signal_analysis_duration_seconds = Histogram::with_opts(HistogramOpts::new(
            "signal_analysis_duration_seconds",
            "Signal analysis latency in seconds",
        ))?;
        let signals_generated_total = IntCounterVec::new(
            Opts::new("signals_generated_total", "Signals appended to the store"),
            &["direction"],
        )?;
        let database_connected = Gauge::with_opts(Opts::new(
            "database_connected",
            "Whether the QuestDB connection is established (1) or not (0)",
        ))?;

        registry.register(Box::new(http_requests_total.clone()))?;
        registry.register(Box::new(http_requests_in_flight.clone()))?;
        registry.register(Box::new(http_request_duration_seconds.clone()))?;
        registry.register(Box::new(signal_analyses_total.clone()))?;
        registry.register(Box::new(signal_analyses_active.clone()))?;
        registry.register(Box::new(signal_analysis_duration_seconds.clone()))?;
        registry.register(Box::new(signals_generated_total.clone()))?;
        registry.register(Box::new(database_connected.clone()))?;

        Ok(Self {
            registry,
            http_requests_total,
            http_requests_in_flight,
            http_request_duration_seconds,
            signal_analyses_total,
            signal_analyses_active,
            signal_analysis_duration_seconds,
            signals_generated_total,
            database_connected,
        })
    }

    /// Text exposition for the /metrics endpoint.
    pub fn export(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer)
            .map_err(|e| prometheus::Error::Msg(format!("metrics encoding: {}", e)))
    }
}
