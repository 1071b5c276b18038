//! Confidence gauge view-model.
//!
//! The profile engine reports a confidence score plus how many samples it
//! has seen; the gauge communicates whether the profile is trained yet.

use serde::{Deserialize, Serialize};

/// Profile confidence state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceView {
    score: f64,
    samples: usize,
    min_samples: usize,
}

impl ConfidenceView {
    /// Create from the engine's raw numbers.
    ///
    /// Scores outside `0..=100` are clamped for display; NaN becomes zero.
    #[must_use]
    pub fn new(score: f64, samples: usize, min_samples: usize) -> Self {
        let score = if score.is_nan() {
            0.0
        } else {
            score.clamp(0.0, 100.0)
        };
        Self {
            score,
            samples,
            min_samples,
        }
    }

    /// Clamped confidence score
    #[must_use]
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Rounded score for the header, e.g. `87%`
    #[must_use]
    pub fn score_label(&self) -> String {
        format!("{}%", self.score.round() as u32)
    }

    /// Number of samples analyzed so far
    #[must_use]
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// True once enough samples were analyzed
    #[must_use]
    pub fn ready(&self) -> bool {
        self.samples >= self.min_samples
    }

    /// Gauge fill percent; a zero minimum counts as fully trained
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        if self.min_samples == 0 {
            return 100;
        }
        (self.samples * 100 / self.min_samples).min(100) as u8
    }

    /// Footer line under the gauge
    #[must_use]
    pub fn status_label(&self) -> String {
        if self.ready() {
            format!("based on {} samples", self.samples)
        } else {
            format!(
                "learning: {} more samples needed",
                self.min_samples - self.samples
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_ready() {
        let view = ConfidenceView::new(82.0, 20, 10);
        assert!(view.ready());
        assert_eq!(view.progress_percent(), 100);
        assert_eq!(view.status_label(), "based on 20 samples");
    }

    #[test]
    fn test_confidence_learning() {
        let view = ConfidenceView::new(35.0, 4, 10);
        assert!(!view.ready());
        assert_eq!(view.progress_percent(), 40);
        assert_eq!(view.status_label(), "learning: 6 more samples needed");
    }

    #[test]
    fn test_confidence_zero_min_samples() {
        let view = ConfidenceView::new(50.0, 0, 0);
        assert!(view.ready());
        assert_eq!(view.progress_percent(), 100);
    }

    #[test]
    fn test_confidence_score_clamped() {
        assert_eq!(ConfidenceView::new(120.0, 0, 1).score(), 100.0);
        assert_eq!(ConfidenceView::new(-5.0, 0, 1).score(), 0.0);
        assert_eq!(ConfidenceView::new(f64::NAN, 0, 1).score(), 0.0);
    }

    #[test]
    fn test_confidence_score_label() {
        assert_eq!(ConfidenceView::new(86.6, 1, 1).score_label(), "87%");
        assert_eq!(ConfidenceView::new(0.2, 1, 1).score_label(), "0%");
    }
}
