// Path: crates/telemetry/src/time.rs
use crate::sinks::ParamsMetricsSink;
use std::time::Instant;

/// Observes the lifetime of the guard as a proposal apply duration when dropped.
pub struct Timer<'a> {
    sink: &'a dyn ParamsMetricsSink,
    start: Instant,
}

impl<'a> Timer<'a> {
    /// Starts timing.
    pub fn new(sink: &'a dyn ParamsMetricsSink) -> Self {
        Self {
            sink,
            start: Instant::now(),
        }
    }
}

impl Drop for Timer<'_> {
    fn drop(&mut self) {
        self.sink
            .observe_proposal_apply_duration(self.start.elapsed().as_secs_f64());
    }
}
