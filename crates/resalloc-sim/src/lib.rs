//! resalloc-sim — stand-in for a real metrics source.
//!
//! Produces `AggregatedMetrics` either from the fixed documented sample or
//! by summarising windows of raw utilization readings. Nothing here reads
//! from the operating system.
//!
//! # Architecture
//!
//! ```text
//! MetricWindow (cpu)    ─┐
//!                        ├─▶ aggregate() ─▶ AggregatedMetrics
//! MetricWindow (memory) ─┘
//!
//! sample_metrics() ─────────────────────▶ AggregatedMetrics (fixed)
//! ```

pub mod sample;
pub mod window;

pub use sample::{SAMPLE_TIMESTAMP, aggregate, sample_metrics};
pub use window::{MetricWindow, summarize};
