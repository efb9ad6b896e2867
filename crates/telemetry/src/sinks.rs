// Path: crates/telemetry/src/sinks.rs
//! Defines abstract traits for metrics reporting, decoupling core logic from the backend.

use once_cell::sync::OnceCell;

// --- Static Sink Access ---

/// A no-op sink for use in tests or when telemetry is disabled.
#[derive(Debug, Clone, Copy)]
pub struct NopSink;

/// A lazily-initialized static reference to the global `MetricsSink` implementation.
pub static SINK: OnceCell<&'static dyn MetricsSink> = OnceCell::new();
static NOP_SINK: NopSink = NopSink;

/// Installs `sink` as the process-wide metrics sink, typically the one returned by
/// [`crate::prometheus::install`]. Fails if a sink was already installed.
///
/// ```ignore
/// ioi_telemetry::sinks::install_global(ioi_telemetry::prometheus::install()?)?;
/// ```
pub fn install_global(sink: &'static dyn MetricsSink) -> Result<(), anyhow::Error> {
    SINK.set(sink)
        .map_err(|_| anyhow::anyhow!("a global metrics sink is already installed"))
}

/// Returns a static reference to the configured error metrics sink.
/// If no sink has been initialized, it returns a no-op sink.
pub fn error_metrics() -> &'static dyn ErrorMetricsSink {
    match SINK.get().copied() {
        Some(sink) => sink.as_error_sink(),
        None => &NOP_SINK,
    }
}

/// Returns a static reference to the configured parameter store metrics sink.
/// If no sink has been initialized, it returns a no-op sink.
pub fn params_metrics() -> &'static dyn ParamsMetricsSink {
    match SINK.get().copied() {
        Some(sink) => sink.as_params_sink(),
        None => &NOP_SINK,
    }
}

// --- Trait Definitions ---

/// A sink for metrics related to parameter writes and governance proposals.
pub trait ParamsMetricsSink: Send + Sync + std::fmt::Debug {
    /// Increments the counter of parameter values written, labeled by subspace.
    fn inc_param_updates(&self, subspace: &str);
    /// Increments the counter of handled proposals, labeled by outcome
    /// (`"applied"` or `"rejected"`).
    fn inc_proposals(&self, outcome: &'static str);
    /// Observes the time taken to validate and apply one proposal.
    fn observe_proposal_apply_duration(&self, duration_secs: f64);
}
impl ParamsMetricsSink for NopSink {
    fn inc_param_updates(&self, _subspace: &str) {}
    fn inc_proposals(&self, _outcome: &'static str) {}
    fn observe_proposal_apply_duration(&self, _duration_secs: f64) {}
}

/// A sink for recording structured error metrics.
pub trait ErrorMetricsSink: Send + Sync + std::fmt::Debug {
    /// Increments a counter for a specific error, categorized by its kind and variant.
    fn inc_error(&self, kind: &'static str, variant: &'static str);
}
impl ErrorMetricsSink for NopSink {
    fn inc_error(&self, _kind: &'static str, _variant: &'static str) {}
}

/// A unified sink that implements all domain-specific traits, providing a single
/// point of implementation for metrics backends like Prometheus.
pub trait MetricsSink: ParamsMetricsSink + ErrorMetricsSink {
    /// Views this sink as a `ParamsMetricsSink`.
    fn as_params_sink(&self) -> &dyn ParamsMetricsSink;
    /// Views this sink as an `ErrorMetricsSink`.
    fn as_error_sink(&self) -> &dyn ErrorMetricsSink;
}

// Blanket implementation to allow any type that implements all sub-traits
// to be used as a `MetricsSink`.
impl<T> MetricsSink for T
where
    T: ParamsMetricsSink + ErrorMetricsSink,
{
    fn as_params_sink(&self) -> &dyn ParamsMetricsSink {
        self
    }
    fn as_error_sink(&self) -> &dyn ErrorMetricsSink {
        self
    }
}
