//! Lens verdicts.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// One metric a lens looked at.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyMetric {
    /// Label shown in the verdict block
    pub label: &'static str,
    /// Value, `None` when it could not be computed
    pub value: Option<f64>,
}

/// Result of evaluating a lens.
///
/// Serializes as an ordered map with the keys `Lens`, `Key Metrics`,
/// `Heuristics` and `Verdict`. Undefined key metrics serialize as `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    /// Lens name
    pub lens: &'static str,
    /// Metrics the lens looked at, in display order
    pub key_metrics: Vec<KeyMetric>,
    /// Heuristic notes, one per defined input
    pub heuristics: Vec<String>,
    /// Conclusion
    pub verdict: &'static str,
}

impl Verdict {
    /// Start a verdict for the named lens.
    pub const fn new(lens: &'static str, verdict: &'static str) -> Self {
        Self {
            lens,
            key_metrics: Vec::new(),
            heuristics: Vec::new(),
            verdict,
        }
    }

    /// Add a key metric.
    pub fn with_metric(mut self, label: &'static str, value: Option<f64>) -> Self {
        self.key_metrics.push(KeyMetric { label, value });
        self
    }

    /// Replace the heuristic notes.
    pub fn with_heuristics(mut self, heuristics: Vec<String>) -> Self {
        self.heuristics = heuristics;
        self
    }

    /// Look up a key metric by label.
    pub fn key_metric(&self, label: &str) -> Option<f64> {
        self.key_metrics
            .iter()
            .find(|m| m.label == label)
            .and_then(|m| m.value)
    }
}

struct KeyMetrics<'a>(&'a [KeyMetric]);

impl Serialize for KeyMetrics<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for metric in self.0 {
            map.serialize_entry(metric.label, &metric.value.filter(|v| v.is_finite()))?;
        }
        map.end()
    }
}

impl Serialize for Verdict {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("Lens", self.lens)?;
        map.serialize_entry("Key Metrics", &KeyMetrics(&self.key_metrics))?;
        map.serialize_entry("Heuristics", &self.heuristics)?;
        map.serialize_entry("Verdict", self.verdict)?;
        map.end()
    }
}
