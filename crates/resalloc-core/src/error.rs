//! Error types for metric parsing, evaluation and configuration.

use thiserror::Error;

/// Result type alias for parsing and evaluation.
pub type EvalResult<T> = Result<T, EvalError>;

/// Result type alias for config loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while turning input into a decision.
#[derive(Debug, Error)]
pub enum EvalError {
    /// A required top-level key is absent.
    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("invalid metric field {field}: {reason}")]
    InvalidMetric { field: String, reason: String },

    /// A sample breaks `min <= avg <= max` or `std >= 0`.
    #[error("invalid sample {field}: {reason}")]
    InvalidSample { field: String, reason: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl EvalError {
    /// Name of the offending field, when the error is tied to one.
    pub fn field(&self) -> Option<&str> {
        match self {
            EvalError::MissingField(field) => Some(field.as_str()),
            EvalError::InvalidMetric { field, .. } | EvalError::InvalidSample { field, .. } => {
                Some(field.as_str())
            }
            EvalError::InvalidInput(_) | EvalError::Json(_) => None,
        }
    }
}

/// Errors raised while loading `resalloc.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid threshold {name}: {value}")]
    InvalidThreshold { name: &'static str, value: f64 },
}
