//! resalloc-core — shared types for the resalloc decision pipeline.
//!
//! Holds the value records that flow through the pipeline
//! (`MetricSample`, `AggregatedMetrics`, `Decision`), the lenient JSON
//! reader for aggregated metrics, the `Thresholds` record, and the
//! `resalloc.toml` config parser.
//!
//! # Data flow
//!
//! ```text
//! JSON / simulator ─▶ AggregatedMetrics ─▶ evaluate(&Thresholds) ─▶ Decision
//! ```
//!
//! Nothing here performs I/O except `ResallocConfig::from_file`.

pub mod config;
pub mod error;
pub mod parse;
pub mod types;

pub use config::{LogFormat, LoggingConfig, ResallocConfig, Thresholds};
pub use error::{ConfigError, ConfigResult, EvalError, EvalResult};
pub use types::*;
