//! Distribution card view-model.
//!
//! Shows how activity splits across a category (context, mode, language)
//! as labeled percentage bars.

use crate::stats::Accent;
use serde::{Deserialize, Serialize};

/// One bar of a distribution card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionEntry {
    /// Category label
    pub label: String,
    /// Absolute count behind the percentage
    pub count: u64,
    /// Share in percent, clamped to `0..=100`
    pub percent: u8,
    /// Accent token for the bar
    pub accent: Accent,
}

impl DistributionEntry {
    /// Create an entry, clamping the percentage
    #[must_use]
    pub fn new(label: impl Into<String>, count: u64, percent: u8, accent: Accent) -> Self {
        Self {
            label: label.into(),
            count,
            percent: percent.min(100),
            accent,
        }
    }

    /// Right-hand label, e.g. `37%`
    #[must_use]
    pub fn percent_label(&self) -> String {
        format!("{}%", self.percent)
    }
}

/// A titled distribution card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionView {
    /// Card title
    pub title: String,
    /// Bars in display order
    pub entries: Vec<DistributionEntry>,
}

impl DistributionView {
    /// Placeholder shown when there are no entries
    pub const NO_DATA: &'static str = "no data";

    /// Create a distribution card
    #[must_use]
    pub fn new(title: impl Into<String>, entries: Vec<DistributionEntry>) -> Self {
        Self {
            title: title.into(),
            entries,
        }
    }

    /// True when the card has nothing to show
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_clamps_percent() {
        let entry = DistributionEntry::new("email", 12, 150, Accent::Purple);
        assert_eq!(entry.percent, 100);
    }

    #[test]
    fn test_entry_percent_label() {
        let entry = DistributionEntry::new("chat", 5, 37, Accent::Green);
        assert_eq!(entry.percent_label(), "37%");
    }

    #[test]
    fn test_view_empty() {
        let view = DistributionView::new("Contexts", Vec::new());
        assert!(view.is_empty());
    }

    #[test]
    fn test_view_keeps_order() {
        let view = DistributionView::new(
            "Contexts",
            vec![
                DistributionEntry::new("email", 10, 50, Accent::Purple),
                DistributionEntry::new("chat", 10, 50, Accent::Green),
            ],
        );
        assert_eq!(view.entries[0].label, "email");
        assert_eq!(view.entries[1].label, "chat");
    }
}
