use serde::Serialize;

use resalloc_core::{AggregatedMetrics, Decision};
use resalloc_engine::{Evaluator, TracingObserver};

use super::{OutputFormat, Settings, render_decision};

#[derive(Serialize)]
struct DemoOutput<'a> {
    input: &'a AggregatedMetrics,
    decision: &'a Decision,
}

pub fn demo(settings: &Settings) -> anyhow::Result<()> {
    println!("{}", render_demo(settings)?);
    Ok(())
}

fn render_demo(settings: &Settings) -> anyhow::Result<String> {
    let input = resalloc_sim::sample_metrics();
    if settings.strict {
        input.validate()?;
    }

    let evaluator = Evaluator::new(settings.thresholds).with_observer(Box::new(TracingObserver));
    let decision = evaluator.evaluate(&input);

    match settings.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&DemoOutput {
            input: &input,
            decision: &decision,
        })?),
        OutputFormat::Text => Ok(format!(
            "Sample input:\n{}\n\nDecision:\n{}",
            serde_json::to_string_pretty(&input)?,
            render_decision(&decision, &settings.thresholds, OutputFormat::Text)?
        )),
    }
}
