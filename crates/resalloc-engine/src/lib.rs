//! resalloc-engine — threshold-driven resource decisions.
//!
//! Takes an `AggregatedMetrics` snapshot, compares the CPU and memory
//! averages against `Thresholds`, and returns a `Decision`. Reporting the
//! decision is left to an optional `DecisionObserver`.
//!
//! # Decision Algorithm
//!
//! ```text
//! cpu_avg    = metrics.cpu_percent.avg     (0.0 when absent)
//! memory_avg = metrics.memory_percent.avg  (0.0 when absent)
//!
//! if cpu_avg > thresholds.cpu_threshold:
//!     cpu_adjustment = reduce_non_critical
//! else:
//!     cpu_adjustment = normal
//!
//! if memory_avg > thresholds.memory_threshold:
//!     memory_adjustment = flag_high_usage
//! else:
//!     memory_adjustment = normal
//!
//! timestamp = metrics.timestamp            (copied verbatim)
//! ```
//!
//! The comparison is strict, so an average exactly at the threshold is
//! `normal`. There is no smoothing or state between calls.

pub mod evaluator;
pub mod observer;

pub use evaluator::{Evaluator, evaluate, evaluate_json};
pub use observer::{DecisionObserver, NoopObserver, TracingObserver};
