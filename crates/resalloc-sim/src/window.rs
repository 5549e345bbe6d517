//! Sampling windows — summarise raw readings into a `MetricSample`.

use resalloc_core::MetricSample;

/// Summarise a window of readings.
///
/// Returns population mean, min, max and population standard deviation.
/// Non-finite readings are skipped. Returns `None` if nothing is left.
pub fn summarize(readings: &[f64]) -> Option<MetricSample> {
    let finite: Vec<f64> = readings.iter().copied().filter(|r| r.is_finite()).collect();
    if finite.is_empty() {
        return None;
    }

    let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
    let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let scale = min.abs().max(max.abs());
    if scale == 0.0 {
        return Some(MetricSample::default());
    }

    // Work on readings scaled into [-1, 1] so neither the sum nor the
    // squared deviations can overflow.
    let n = finite.len() as f64;
    let mean = finite.iter().map(|r| r / scale).sum::<f64>() / n;
    let variance = finite
        .iter()
        .map(|r| (r / scale - mean).powi(2))
        .sum::<f64>()
        / n;

    // Rounding can push the mean a hair outside [min, max] for constant input.
    Some(MetricSample {
        avg: (mean * scale).clamp(min, max),
        min,
        max,
        std: variance.sqrt() * scale,
    })
}

/// Accumulates readings for one resource until the next summary.
#[derive(Debug, Clone, Default)]
pub struct MetricWindow {
    readings: Vec<f64>,
}

impl MetricWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, reading: f64) {
        self.readings.push(reading);
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Summary of the current window, all-zero when empty.
    pub fn summary(&self) -> MetricSample {
        summarize(&self.readings).unwrap_or_default()
    }

    /// Summarise and start a fresh window.
    pub fn take_summary(&mut self) -> MetricSample {
        let summary = self.summary();
        self.readings.clear();
        summary
    }
}

impl Extend<f64> for MetricWindow {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        self.readings.extend(iter);
    }
}

impl FromIterator<f64> for MetricWindow {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            readings: iter.into_iter().collect(),
        }
    }
}
