//! Lenient JSON reader for aggregated metrics.
//!
//! Top-level keys are strict: a missing `cpu_percent`, `memory_percent` or
//! `timestamp` fails the whole read. Sample sub-fields are lenient: an
//! absent `avg`, `min`, `max` or `std` reads as `0.0`. A field that is
//! present with the wrong JSON type is always an error.

use serde_json::{Map, Value};

use crate::error::{EvalError, EvalResult};
use crate::types::{AggregatedMetrics, CPU_PERCENT, MEMORY_PERCENT, MetricSample, TIMESTAMP};

impl AggregatedMetrics {
    /// Read aggregated metrics from a parsed JSON document.
    ///
    /// Required keys are checked in the order `cpu_percent`,
    /// `memory_percent`, `timestamp`; the first absent one is reported.
    pub fn from_json(value: &Value) -> EvalResult<Self> {
        let object = value.as_object().ok_or_else(|| {
            EvalError::InvalidInput(format!(
                "expected a JSON object, got {}",
                json_type_name(value)
            ))
        })?;

        let cpu_percent = read_sample(object, CPU_PERCENT)?;
        let memory_percent = read_sample(object, MEMORY_PERCENT)?;
        let timestamp = match require(object, TIMESTAMP)? {
            Value::String(s) => s.clone(),
            other => {
                return Err(EvalError::InvalidMetric {
                    field: TIMESTAMP.to_string(),
                    reason: format!("expected a string, got {}", json_type_name(other)),
                });
            }
        };

        let extra = object
            .iter()
            .filter(|(k, _)| ![CPU_PERCENT, MEMORY_PERCENT, TIMESTAMP].contains(&k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Ok(Self {
            cpu_percent,
            memory_percent,
            timestamp,
            extra,
        })
    }

    /// Parse JSON text and read aggregated metrics from it.
    pub fn from_json_str(s: &str) -> EvalResult<Self> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_json(&value)
    }
}

fn require<'a>(object: &'a Map<String, Value>, key: &str) -> EvalResult<&'a Value> {
    object
        .get(key)
        .ok_or_else(|| EvalError::MissingField(key.to_string()))
}

fn read_sample(object: &Map<String, Value>, key: &str) -> EvalResult<MetricSample> {
    let fields = match require(object, key)? {
        Value::Object(fields) => fields,
        other => {
            return Err(EvalError::InvalidMetric {
                field: key.to_string(),
                reason: format!("expected an object, got {}", json_type_name(other)),
            });
        }
    };

    Ok(MetricSample {
        avg: read_number(fields, key, "avg")?,
        min: read_number(fields, key, "min")?,
        max: read_number(fields, key, "max")?,
        std: read_number(fields, key, "std")?,
    })
}

/// Absent reads as `0.0`; present-but-not-a-number is an error.
fn read_number(fields: &Map<String, Value>, parent: &str, name: &str) -> EvalResult<f64> {
    match fields.get(name) {
        None => Ok(0.0),
        Some(value) => value.as_f64().ok_or_else(|| EvalError::InvalidMetric {
            field: format!("{parent}.{name}"),
            reason: format!("expected a number, got {}", json_type_name(value)),
        }),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
