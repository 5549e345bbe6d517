//! resalloc.toml configuration parser.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, ConfigResult};

/// Default CPU threshold, in percent.
pub const DEFAULT_CPU_THRESHOLD: f64 = 80.0;
/// Default memory threshold, in percent.
pub const DEFAULT_MEMORY_THRESHOLD: f64 = 75.0;

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ResallocConfig {
    pub thresholds: Thresholds,
    pub logging: LoggingConfig,
}

/// Scalar boundaries a resource average must strictly exceed to be flagged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Thresholds {
    pub cpu_threshold: f64,
    pub memory_threshold: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            cpu_threshold: DEFAULT_CPU_THRESHOLD,
            memory_threshold: DEFAULT_MEMORY_THRESHOLD,
        }
    }
}

impl Thresholds {
    pub fn new(cpu_threshold: f64, memory_threshold: f64) -> Self {
        Self {
            cpu_threshold,
            memory_threshold,
        }
    }

    /// Reject NaN and infinite thresholds.
    pub fn validate(&self) -> ConfigResult<()> {
        for (name, value) in [
            ("cpu_threshold", self.cpu_threshold),
            ("memory_threshold", self.memory_threshold),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::InvalidThreshold { name, value });
            }
        }
        Ok(())
    }

    /// Replace whichever thresholds are given.
    pub fn with_overrides(mut self, cpu: Option<f64>, memory: Option<f64>) -> Self {
        if let Some(cpu) = cpu {
            self.cpu_threshold = cpu;
        }
        if let Some(memory) = memory {
            self.memory_threshold = memory;
        }
        self
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// `EnvFilter` directive; `RUST_LOG` takes precedence when set.
    pub filter: Option<String>,
}

impl ResallocConfig {
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        let config: ResallocConfig = toml::from_str(s)?;
        config.thresholds.validate()?;
        Ok(config)
    }
}
