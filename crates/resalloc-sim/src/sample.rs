//! Fabricated inputs for demos and tests.

use tracing::debug;

use resalloc_core::{AggregatedMetrics, MetricSample};

use crate::window::summarize;

/// Timestamp carried by the fixed sample.
pub const SAMPLE_TIMESTAMP: &str = "2025-02-14T17:06:48Z";

/// The fixed sample: CPU over its default threshold, memory under.
pub fn sample_metrics() -> AggregatedMetrics {
    AggregatedMetrics::new(
        MetricSample::new(85.0, 60.0, 95.0, 8.5),
        MetricSample::new(70.0, 65.0, 75.0, 3.2),
        SAMPLE_TIMESTAMP,
    )
}

/// Build a snapshot from raw CPU and memory readings.
///
/// An empty window summarises to an all-zero sample.
pub fn aggregate(
    cpu_readings: &[f64],
    memory_readings: &[f64],
    timestamp: impl Into<String>,
) -> AggregatedMetrics {
    let cpu = summarize(cpu_readings).unwrap_or_default();
    let memory = summarize(memory_readings).unwrap_or_default();

    debug!(
        cpu_readings = cpu_readings.len(),
        memory_readings = memory_readings.len(),
        cpu_avg = cpu.avg,
        memory_avg = memory.avg,
        "aggregated metric windows"
    );

    AggregatedMetrics::new(cpu, memory, timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_matches_documented_values() {
        let m = sample_metrics();
        assert_eq!(m.cpu_percent.avg, 85.0);
        assert_eq!(m.memory_percent.avg, 70.0);
        assert_eq!(m.timestamp, "2025-02-14T17:06:48Z");
        assert!(m.validate().is_ok());
    }

    #[test]
    fn aggregate_summarises_each_window() {
        let m = aggregate(&[80.0, 90.0], &[50.0, 60.0, 70.0], "t1");
        assert_eq!(m.cpu_percent.avg, 85.0);
        assert_eq!(m.memory_percent.min, 50.0);
        assert_eq!(m.memory_percent.max, 70.0);
        assert_eq!(m.timestamp, "t1");
    }

    #[test]
    fn aggregate_empty_window_is_zero() {
        let m = aggregate(&[], &[10.0], "t");
        assert_eq!(m.cpu_percent, MetricSample::default());
        assert_eq!(m.memory_percent.avg, 10.0);
    }
}
