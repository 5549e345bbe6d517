//! Decision observers — report decisions without touching them.

use tracing::{info, warn};

use resalloc_core::Decision;

/// Sink told about each decision after it is made.
///
/// Observers receive a shared reference and cannot alter what the
/// evaluator returns.
pub trait DecisionObserver: Send + Sync {
    fn observe(&self, decision: &Decision);
}

/// Emits each decision as a single `info` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl DecisionObserver for TracingObserver {
    fn observe(&self, decision: &Decision) {
        match serde_json::to_string(decision) {
            Ok(json) => info!(
                timestamp = %decision.timestamp,
                cpu_adjustment = %decision.cpu_adjustment,
                memory_adjustment = %decision.memory_adjustment,
                cpu_avg = decision.details.cpu_avg,
                memory_avg = decision.details.memory_avg,
                decision = %json,
                "resource decision"
            ),
            Err(e) => warn!(error = %e, "failed to serialize decision"),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl DecisionObserver for NoopObserver {
    fn observe(&self, _decision: &Decision) {}
}

impl<F> DecisionObserver for F
where
    F: Fn(&Decision) + Send + Sync,
{
    fn observe(&self, decision: &Decision) {
        self(decision)
    }
}
