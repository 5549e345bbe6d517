pub mod demo;
pub mod evaluate;
pub mod thresholds;

use clap::ValueEnum;

use resalloc_core::{Decision, Thresholds};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

/// Settings resolved from config file and flags.
#[derive(Debug, Clone)]
pub struct Settings {
    pub thresholds: Thresholds,
    pub format: OutputFormat,
    pub strict: bool,
}

/// Render a decision for stdout.
pub fn render_decision(
    decision: &Decision,
    thresholds: &Thresholds,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(decision)?),
        OutputFormat::Text => Ok(format!(
            "timestamp: {}\ncpu:       {} (avg {:.1}, threshold {:.1})\nmemory:    {} (avg {:.1}, threshold {:.1})",
            decision.timestamp,
            decision.cpu_adjustment,
            decision.details.cpu_avg,
            thresholds.cpu_threshold,
            decision.memory_adjustment,
            decision.details.memory_avg,
            thresholds.memory_threshold,
        )),
    }
}
