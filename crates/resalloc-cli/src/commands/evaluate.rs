use std::io::Read;
use std::path::Path;

use anyhow::Context;
use tracing::{info, warn};

use resalloc_core::AggregatedMetrics;
use resalloc_engine::{Evaluator, TracingObserver};

use super::{Settings, render_decision};

pub fn evaluate(input: &str, settings: &Settings) -> anyhow::Result<()> {
    let text = read_input(input)?;
    match evaluate_text(&text, settings) {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(e) => {
            warn!(input, error = %e, "evaluation failed");
            Err(e)
        }
    }
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading metrics from stdin")?;
        return Ok(text);
    }

    let path = Path::new(input);
    info!(path = %path.display(), "reading metrics");
    std::fs::read_to_string(path)
        .with_context(|| format!("reading metrics from {}", path.display()))
}

fn evaluate_text(text: &str, settings: &Settings) -> anyhow::Result<String> {
    let metrics = AggregatedMetrics::from_json_str(text)?;
    if settings.strict {
        metrics.validate()?;
    }

    let evaluator = Evaluator::new(settings.thresholds).with_observer(Box::new(TracingObserver));
    let decision = evaluator.evaluate(&metrics);

    render_decision(&decision, &settings.thresholds, settings.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::OutputFormat;
    use resalloc_core::{EvalError, Thresholds};
    use std::io::Write;

    fn settings(strict: bool) -> Settings {
        Settings {
            thresholds: Thresholds::default(),
            format: OutputFormat::Json,
            strict,
        }
    }

    fn eval_err(err: &anyhow::Error) -> &EvalError {
        err.downcast_ref::<EvalError>().unwrap()
    }

    #[test]
    fn evaluates_sample_fixture() {
        let text = include_str!("../../../../tests/fixtures/sample_metrics.json");
        let out = evaluate_text(text, &settings(false)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["cpu_adjustment"], "reduce_non_critical");
        assert_eq!(value["details"]["memory_avg"], 70.0);
    }

    #[test]
    fn missing_timestamp_error_names_field() {
        let text = include_str!("../../../../tests/fixtures/missing_timestamp.json");
        let err = evaluate_text(text, &settings(false)).unwrap_err();
        assert_eq!(eval_err(&err).field(), Some("timestamp"));
    }

    #[test]
    fn strict_mode_rejects_inconsistent_sample() {
        let text = include_str!("../../../../tests/fixtures/inconsistent_sample.json");
        assert!(evaluate_text(text, &settings(false)).is_ok());

        let err = evaluate_text(text, &settings(true)).unwrap_err();
        assert!(matches!(
            eval_err(&err),
            EvalError::InvalidSample { field, .. } if field == "cpu_percent"
        ));
    }

    #[test]
    fn reads_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "{}",
            include_str!("../../../../tests/fixtures/high_memory.json")
        )
        .unwrap();

        let text = read_input(file.path().to_str().unwrap()).unwrap();
        let out = evaluate_text(&text, &settings(true)).unwrap();
        assert!(out.contains("flag_high_usage"));
    }

    #[test]
    fn unreadable_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        let err = read_input(path.to_str().unwrap()).unwrap_err();
        assert!(format!("{err:#}").contains("nope.json"));
    }
}
