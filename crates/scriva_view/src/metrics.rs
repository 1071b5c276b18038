//! Style metric card view-models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Card value; the profile surface mixes numbers and free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    /// Whole number, e.g. a word count
    Integer(i64),
    /// Fractional number, shown with one decimal
    Float(f64),
    /// Free text, e.g. a tone label
    Text(String),
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:.1}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for MetricValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for MetricValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for MetricValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for MetricValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Visual emphasis of a metric card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricVariant {
    /// Neutral card
    Default,
    /// Accented card
    Accent,
    /// Needs-attention card
    Warning,
}

impl Default for MetricVariant {
    fn default() -> Self {
        Self::Default
    }
}

/// A labeled style metric with a short description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleMetricView {
    /// Metric title
    pub title: String,
    /// Metric value
    pub value: MetricValue,
    /// One-line description under the title
    pub description: String,
    /// Emphasis variant
    #[serde(default)]
    pub variant: MetricVariant,
}

impl StyleMetricView {
    /// Create a neutral metric card
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        value: impl Into<MetricValue>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            description: description.into(),
            variant: MetricVariant::default(),
        }
    }

    /// Set the emphasis variant
    #[must_use]
    pub fn with_variant(mut self, variant: MetricVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Value formatted for display
    #[must_use]
    pub fn value_label(&self) -> String {
        self.value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_value_display() {
        assert_eq!(MetricValue::from(42i64).to_string(), "42");
        assert_eq!(MetricValue::from(17.25f64).to_string(), "17.2");
        assert_eq!(MetricValue::from("formal").to_string(), "formal");
    }

    #[test]
    fn test_metric_new() {
        let metric = StyleMetricView::new("Vocabulary", 180i64, "Frequent words");
        assert_eq!(metric.title, "Vocabulary");
        assert_eq!(metric.value_label(), "180");
        assert_eq!(metric.variant, MetricVariant::Default);
    }

    #[test]
    fn test_metric_with_variant() {
        let metric = StyleMetricView::new("Tone", "casual", "Dominant register")
            .with_variant(MetricVariant::Accent);
        assert_eq!(metric.variant, MetricVariant::Accent);
    }

    #[test]
    fn test_metric_variant_default() {
        assert_eq!(MetricVariant::default(), MetricVariant::Default);
    }

    #[test]
    fn test_metric_value_untagged_deserialize() {
        let v: MetricValue = serde_json::from_str("3").unwrap();
        assert_eq!(v, MetricValue::Integer(3));
        let v: MetricValue = serde_json::from_str("3.5").unwrap();
        assert_eq!(v, MetricValue::Float(3.5));
        let v: MetricValue = serde_json::from_str("\"neutral\"").unwrap();
        assert_eq!(v, MetricValue::Text("neutral".to_string()));
    }
}
