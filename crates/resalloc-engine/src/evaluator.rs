//! Evaluator — classifies aggregated metrics into a decision.
//!
//! [`evaluate`] is the pure core: same input, same output, no side effects.
//! [`Evaluator`] wraps it with fixed thresholds and an optional observer
//! that is told about each decision after it is made.

use serde_json::Value;
use tracing::debug;

use resalloc_core::{
    AggregatedMetrics, CpuAdjustment, Decision, DecisionDetails, EvalResult, MemoryAdjustment,
    Thresholds,
};

use crate::observer::DecisionObserver;

/// Classify one snapshot against `thresholds`.
pub fn evaluate(metrics: &AggregatedMetrics, thresholds: &Thresholds) -> Decision {
    let cpu_avg = metrics.cpu_percent.avg;
    let memory_avg = metrics.memory_percent.avg;

    let cpu_adjustment = if cpu_avg > thresholds.cpu_threshold {
        CpuAdjustment::ReduceNonCritical
    } else {
        CpuAdjustment::Normal
    };

    let memory_adjustment = if memory_avg > thresholds.memory_threshold {
        MemoryAdjustment::FlagHighUsage
    } else {
        MemoryAdjustment::Normal
    };

    Decision {
        timestamp: metrics.timestamp.clone(),
        cpu_adjustment,
        memory_adjustment,
        details: DecisionDetails {
            cpu_avg,
            memory_avg,
        },
    }
}

/// Read a JSON document and classify it.
///
/// Fails with `MissingField` when a required key is absent; no partial
/// decision is produced.
pub fn evaluate_json(value: &Value, thresholds: &Thresholds) -> EvalResult<Decision> {
    let metrics = AggregatedMetrics::from_json(value)?;
    Ok(evaluate(&metrics, thresholds))
}

/// Evaluator with fixed thresholds and an optional observer.
pub struct Evaluator {
    thresholds: Thresholds,
    observer: Option<Box<dyn DecisionObserver>>,
}

impl Evaluator {
    pub fn new(thresholds: Thresholds) -> Self {
        Self {
            thresholds,
            observer: None,
        }
    }

    /// Set the observer told about each decision.
    pub fn with_observer(mut self, observer: Box<dyn DecisionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Classify one snapshot and report it to the observer, if any.
    pub fn evaluate(&self, metrics: &AggregatedMetrics) -> Decision {
        let decision = evaluate(metrics, &self.thresholds);

        debug!(
            timestamp = %decision.timestamp,
            cpu_avg = decision.details.cpu_avg,
            cpu_threshold = self.thresholds.cpu_threshold,
            memory_avg = decision.details.memory_avg,
            memory_threshold = self.thresholds.memory_threshold,
            "evaluated metrics"
        );

        if let Some(observer) = &self.observer {
            observer.observe(&decision);
        }

        decision
    }

    /// Read a JSON document, classify it, and report it.
    pub fn evaluate_json(&self, value: &Value) -> EvalResult<Decision> {
        let metrics = AggregatedMetrics::from_json(value)?;
        Ok(self.evaluate(&metrics))
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(Thresholds::default())
    }
}
