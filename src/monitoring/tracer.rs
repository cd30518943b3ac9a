/*!
 * Structured Tracing
 * Subscriber initialisation and per-run spans using the tracing crate
 *
 * Features:
 * - Run ID generation for correlating the logs of one simulation
 * - JSON-formatted logs for structured parsing
 * - Run statistics embedded in the closing span
 */

use crate::scheduler::SchedulerStats;
use std::time::Instant;
use tracing::{debug, info, span, Level};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};
use uuid::Uuid;

/// Environment variable enabling JSON log output
pub const ENV_TRACE_JSON: &str = "MLQ_TRACE_JSON";

/// Initialize structured tracing
///
/// Logs are written to stderr so they never mix with report output.
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - MLQ_TRACE_JSON: Enable JSON output (default: false)
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var(ENV_TRACE_JSON)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .init();
        info!("Structured tracing initialized with JSON output");
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .init();
        info!("Structured tracing initialized");
    }
}

/// Generate a unique ID for one simulation run
pub fn generate_run_id() -> String {
    Uuid::new_v4().to_string()
}

/// Span covering one simulation run
pub struct SimulationSpan {
    span: tracing::Span,
    start: Instant,
    run_id: String,
}

impl SimulationSpan {
    pub fn new(process_count: usize) -> Self {
        let run_id = generate_run_id();

        let span = span!(
            Level::INFO,
            "simulation",
            run_id = %run_id,
            processes = process_count,
            dispatches = tracing::field::Empty,
            idle_time = tracing::field::Empty,
            makespan = tracing::field::Empty,
        );

        Self {
            span,
            start: Instant::now(),
            run_id,
        }
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// Enter the span context
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }

    /// Record the final counters of the run
    pub fn record_stats(&self, stats: &SchedulerStats) {
        self.span.record("dispatches", stats.dispatches);
        self.span.record("idle_time", stats.idle_time);
        self.span.record("makespan", stats.makespan);

        let _entered = self.span.enter();
        info!(
            dispatches = stats.dispatches,
            preemptions = stats.preemptions,
            context_switches = stats.context_switches,
            idle_time = stats.idle_time,
            makespan = stats.makespan,
            cpu_utilization = stats.cpu_utilization(),
            "simulation finished"
        );
    }
}

impl Drop for SimulationSpan {
    fn drop(&mut self) {
        let _entered = self.span.enter();
        debug!(
            run_id = %self.run_id,
            duration_us = self.start.elapsed().as_micros() as u64,
            "simulation span closed"
        );
    }
}
