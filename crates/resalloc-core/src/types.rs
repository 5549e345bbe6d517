//! Value records for the decision pipeline.
//!
//! Every type here is an immutable snapshot with no identity; a record
//! lives for a single evaluation and is never mutated after construction.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{EvalError, EvalResult};

/// Key of the CPU sample in an aggregated-metrics document.
pub const CPU_PERCENT: &str = "cpu_percent";
/// Key of the memory sample in an aggregated-metrics document.
pub const MEMORY_PERCENT: &str = "memory_percent";
/// Key of the opaque timestamp in an aggregated-metrics document.
pub const TIMESTAMP: &str = "timestamp";

// ── Metrics ────────────────────────────────────────────────────────

/// Statistical summary of one resource over a sampling window.
///
/// Expected to satisfy `min <= avg <= max` and `std >= 0`. Construction does
/// not enforce this; call [`MetricSample::validate`] when it matters.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct MetricSample {
    pub avg: f64,
    pub min: f64,
    pub max: f64,
    pub std: f64,
}

impl MetricSample {
    pub fn new(avg: f64, min: f64, max: f64, std: f64) -> Self {
        Self { avg, min, max, std }
    }

    /// Human-readable descriptions of every broken invariant.
    pub fn violations(&self) -> Vec<String> {
        let mut out = Vec::new();

        for (name, value) in [
            ("avg", self.avg),
            ("min", self.min),
            ("max", self.max),
            ("std", self.std),
        ] {
            if !value.is_finite() {
                out.push(format!("{name} is not finite ({value})"));
            }
        }
        if self.min > self.avg {
            out.push(format!("min {} exceeds avg {}", self.min, self.avg));
        }
        if self.avg > self.max {
            out.push(format!("avg {} exceeds max {}", self.avg, self.max));
        }
        if self.std < 0.0 {
            out.push(format!("std {} is negative", self.std));
        }

        out
    }

    /// Fail with `InvalidSample` on the first broken invariant.
    pub fn validate(&self, field: &str) -> EvalResult<()> {
        match self.violations().into_iter().next() {
            Some(reason) => Err(EvalError::InvalidSample {
                field: field.to_string(),
                reason,
            }),
            None => Ok(()),
        }
    }
}

/// One snapshot of CPU and memory utilization plus a caller-supplied
/// timestamp.
///
/// Built from JSON with [`AggregatedMetrics::from_json`] or from raw
/// readings by the simulator.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AggregatedMetrics {
    pub cpu_percent: MetricSample,
    pub memory_percent: MetricSample,
    /// Opaque; never parsed or normalised.
    pub timestamp: String,
    /// Keys beyond the required three, kept as-is and ignored by evaluation.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl AggregatedMetrics {
    pub fn new(
        cpu_percent: MetricSample,
        memory_percent: MetricSample,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            cpu_percent,
            memory_percent,
            timestamp: timestamp.into(),
            extra: BTreeMap::new(),
        }
    }

    /// Validate both samples, reporting the first offending resource.
    pub fn validate(&self) -> EvalResult<()> {
        self.cpu_percent.validate(CPU_PERCENT)?;
        self.memory_percent.validate(MEMORY_PERCENT)
    }
}

// ── Decision ───────────────────────────────────────────────────────

/// Action recommended for CPU.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CpuAdjustment {
    Normal,
    ReduceNonCritical,
}

impl CpuAdjustment {
    pub fn as_str(&self) -> &'static str {
        match self {
            CpuAdjustment::Normal => "normal",
            CpuAdjustment::ReduceNonCritical => "reduce_non_critical",
        }
    }
}

impl fmt::Display for CpuAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Action recommended for memory.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MemoryAdjustment {
    Normal,
    FlagHighUsage,
}

impl MemoryAdjustment {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemoryAdjustment::Normal => "normal",
            MemoryAdjustment::FlagHighUsage => "flag_high_usage",
        }
    }
}

impl fmt::Display for MemoryAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The averages a decision was based on.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct DecisionDetails {
    pub cpu_avg: f64,
    pub memory_avg: f64,
}

/// Classification of one `AggregatedMetrics` snapshot.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Decision {
    pub timestamp: String,
    pub cpu_adjustment: CpuAdjustment,
    pub memory_adjustment: MemoryAdjustment,
    pub details: DecisionDetails,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decision() -> Decision {
        Decision {
            timestamp: "2025-02-14T17:06:48Z".to_string(),
            cpu_adjustment: CpuAdjustment::ReduceNonCritical,
            memory_adjustment: MemoryAdjustment::Normal,
            details: DecisionDetails {
                cpu_avg: 85.0,
                memory_avg: 70.0,
            },
        }
    }

    #[test]
    fn decision_serializes_in_stable_key_order() {
        let json = serde_json::to_string(&decision()).unwrap();
        assert_eq!(
            json,
            r#"{"timestamp":"2025-02-14T17:06:48Z","cpu_adjustment":"reduce_non_critical","memory_adjustment":"normal","details":{"cpu_avg":85.0,"memory_avg":70.0}}"#
        );
    }

    #[test]
    fn adjustments_display_as_wire_names() {
        assert_eq!(CpuAdjustment::ReduceNonCritical.to_string(), "reduce_non_critical");
        assert_eq!(MemoryAdjustment::FlagHighUsage.to_string(), "flag_high_usage");
        assert_eq!(MemoryAdjustment::Normal.as_str(), "normal");
    }

    #[test]
    fn well_formed_sample_has_no_violations() {
        let s = MetricSample::new(50.0, 10.0, 90.0, 5.0);
        assert!(s.violations().is_empty());
        assert!(s.validate("cpu_percent").is_ok());
    }

    #[test]
    fn sample_violations_are_all_reported() {
        let s = MetricSample::new(50.0, 60.0, 40.0, -1.0);
        let v = s.violations();
        assert_eq!(v.len(), 3);
        assert!(v[0].contains("min"));
        assert!(v[1].contains("max"));
        assert!(v[2].contains("negative"));
    }

    #[test]
    fn nan_sample_is_rejected() {
        let s = MetricSample::new(f64::NAN, 0.0, 100.0, 1.0);
        let err = s.validate("memory_percent").unwrap_err();
        assert_eq!(err.field(), Some("memory_percent"));
        assert!(err.to_string().contains("not finite"));
    }

    #[test]
    fn aggregated_validate_names_offending_resource() {
        let metrics = AggregatedMetrics::new(
            MetricSample::new(50.0, 10.0, 90.0, 5.0),
            MetricSample::new(80.0, 10.0, 70.0, 5.0),
            "t",
        );
        let err = metrics.validate().unwrap_err();
        assert_eq!(err.field(), Some(MEMORY_PERCENT));
    }

    #[test]
    fn aggregated_serializes_extra_keys_inline() {
        let mut metrics = AggregatedMetrics::new(
            MetricSample::default(),
            MetricSample::default(),
            "t",
        );
        metrics
            .extra
            .insert("host".to_string(), Value::String("node-1".to_string()));
        let value = serde_json::to_value(&metrics).unwrap();
        assert_eq!(value["host"], "node-1");
        assert_eq!(value["timestamp"], "t");
        assert_eq!(value["cpu_percent"]["avg"], 0.0);
    }
}
