// Path: crates/telemetry/src/prometheus.rs
//! A concrete implementation of the metrics sinks using the Prometheus crate.

use crate::sinks::*;
use once_cell::sync::OnceCell;
use prometheus::{
    exponential_buckets, register_histogram, register_int_counter_vec, Histogram, IntCounterVec,
};

// --- Metric Statics ---
// We use OnceCell to hold the metric collectors. They will be initialized
// exactly once by the `install` function.

static PARAMS_UPDATES_TOTAL: OnceCell<IntCounterVec> = OnceCell::new();
static PARAMS_PROPOSALS_TOTAL: OnceCell<IntCounterVec> = OnceCell::new();
static PARAMS_PROPOSAL_APPLY_SECONDS: OnceCell<Histogram> = OnceCell::new();
static ERRORS_TOTAL: OnceCell<IntCounterVec> = OnceCell::new();

/// The Prometheus-backed sink returned by [`install`].
#[derive(Debug, Clone, Copy)]
pub struct PrometheusSink;

/// Helper macro to reduce boilerplate for getting a metric from OnceCell.
/// Observations made before `install()` has run are dropped.
macro_rules! get_metric {
    ($metric:ident) => {
        match $metric.get() {
            Some(metric) => metric,
            None => return,
        }
    };
}

impl ParamsMetricsSink for PrometheusSink {
    fn inc_param_updates(&self, subspace: &str) {
        get_metric!(PARAMS_UPDATES_TOTAL)
            .with_label_values(&[subspace])
            .inc();
    }
    fn inc_proposals(&self, outcome: &'static str) {
        get_metric!(PARAMS_PROPOSALS_TOTAL)
            .with_label_values(&[outcome])
            .inc();
    }
    fn observe_proposal_apply_duration(&self, duration_secs: f64) {
        get_metric!(PARAMS_PROPOSAL_APPLY_SECONDS).observe(duration_secs);
    }
}

impl ErrorMetricsSink for PrometheusSink {
    fn inc_error(&self, kind: &'static str, variant: &'static str) {
        get_metric!(ERRORS_TOTAL)
            .with_label_values(&[kind, variant])
            .inc();
    }
}

fn set_once<T>(cell: &OnceCell<T>, value: T) -> Result<(), prometheus::Error> {
    cell.set(value).map_err(|_| prometheus::Error::AlreadyReg)
}

/// Initializes all Prometheus metrics collectors and returns a static reference to the sink.
/// This function must be called only once at application startup; a second call fails
/// with `AlreadyReg`.
pub fn install() -> Result<&'static dyn MetricsSink, prometheus::Error> {
    set_once(
        &PARAMS_UPDATES_TOTAL,
        register_int_counter_vec!(
            "ioi_params_updates_total",
            "Total parameter values written, by subspace.",
            &["subspace"]
        )?,
    )?;
    set_once(
        &PARAMS_PROPOSALS_TOTAL,
        register_int_counter_vec!(
            "ioi_params_proposals_total",
            "Total parameter change proposals handled, by outcome.",
            &["outcome"]
        )?,
    )?;
    set_once(
        &PARAMS_PROPOSAL_APPLY_SECONDS,
        register_histogram!(
            "ioi_params_proposal_apply_seconds",
            "Latency of validating and applying one parameter change proposal.",
            exponential_buckets(0.0001, 2.0, 16)?
        )?,
    )?;
    set_once(
        &ERRORS_TOTAL,
        register_int_counter_vec!(
            "ioi_errors_total",
            "Total number of errors, categorized by type and variant.",
            &["kind", "variant"]
        )?,
    )?;

    static SINK: PrometheusSink = PrometheusSink;
    Ok(&SINK)
}
