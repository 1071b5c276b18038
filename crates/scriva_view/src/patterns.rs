//! Pattern chip list presenter.
//!
//! Turns an ordered list of detected style patterns into a plain-data view:
//! at most `max_display` chips, in input order, plus a summary of how many
//! items were left out.

use serde::{Deserialize, Serialize};

/// A detected pattern with an optional occurrence count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternItem {
    /// Literal pattern text (may be empty)
    pub text: String,
    /// Occurrence count; `None` means no frequency annotation is shown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

impl PatternItem {
    /// Create an item without a count
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            count: None,
        }
    }

    /// Create an item with an occurrence count
    #[must_use]
    pub fn with_count(text: impl Into<String>, count: u32) -> Self {
        Self {
            text: text.into(),
            count: Some(count),
        }
    }
}

/// Display configuration for a pattern list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternListConfig {
    /// Maximum number of chips shown. Zero shows no chips and reports
    /// every item as omitted.
    pub max_display: usize,
    /// Text shown verbatim when the input list is empty
    pub empty_label: String,
}

impl Default for PatternListConfig {
    fn default() -> Self {
        Self {
            max_display: 10,
            empty_label: "no patterns detected".to_string(),
        }
    }
}

impl PatternListConfig {
    /// Create a config with default limits
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display limit
    #[must_use]
    pub fn with_max_display(mut self, max_display: usize) -> Self {
        self.max_display = max_display;
        self
    }

    /// Set the empty placeholder text
    #[must_use]
    pub fn with_empty_label(mut self, label: impl Into<String>) -> Self {
        self.empty_label = label.into();
        self
    }
}

/// One rendered chip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternChip {
    /// Pattern text
    pub text: String,
    /// Occurrence count carried over from the item
    pub count: Option<u32>,
}

impl PatternChip {
    /// Chip label: the text quoted, with a `(Nx)` suffix when a count is present
    #[must_use]
    pub fn label(&self) -> String {
        match self.count {
            Some(n) => format!("\"{}\" ({}x)", self.text, n),
            None => format!("\"{}\"", self.text),
        }
    }
}

/// Plain-data view of a truncated pattern list
///
/// Built once per frame from the current items. The displayed chips are
/// always a prefix of the input, never reordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternListView {
    chips: Vec<PatternChip>,
    omitted: usize,
    empty_label: Option<String>,
}

impl PatternListView {
    /// Build the view from an ordered item list.
    ///
    /// Total over all inputs: never panics and never mutates `items`.
    /// Keeps the first `min(items.len(), config.max_display)` items and
    /// counts the rest as omitted.
    #[must_use]
    pub fn build(items: &[PatternItem], config: &PatternListConfig) -> Self {
        if items.is_empty() {
            return Self {
                chips: Vec::new(),
                omitted: 0,
                empty_label: Some(config.empty_label.clone()),
            };
        }

        let shown = items.len().min(config.max_display);
        let chips = items[..shown]
            .iter()
            .map(|item| PatternChip {
                text: item.text.clone(),
                count: item.count,
            })
            .collect();

        Self {
            chips,
            omitted: items.len() - shown,
            empty_label: None,
        }
    }

    /// Chips to draw, a prefix of the input in original order
    #[must_use]
    pub fn chips(&self) -> &[PatternChip] {
        &self.chips
    }

    /// Number of items not shown
    #[must_use]
    pub fn omitted(&self) -> usize {
        self.omitted
    }

    /// Summary line for omitted items, e.g. `+5 others`
    ///
    /// `None` when nothing was omitted.
    #[must_use]
    pub fn omitted_label(&self) -> Option<String> {
        if self.omitted > 0 {
            Some(format!("+{} others", self.omitted))
        } else {
            None
        }
    }

    /// Placeholder text, present exactly when the input was empty
    #[must_use]
    pub fn empty_label(&self) -> Option<&str> {
        self.empty_label.as_deref()
    }

    /// True when the input was empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.empty_label.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Import proptest macros
    use proptest::prelude::*;

    fn items(n: usize) -> Vec<PatternItem> {
        (0..n)
            .map(|i| PatternItem::with_count(format!("p{i}"), i as u32 + 1))
            .collect()
    }

    #[test]
    fn test_build_under_limit() {
        let items = vec![
            PatternItem::with_count("hello", 3),
            PatternItem::new("world"),
        ];
        let view = PatternListView::build(&items, &PatternListConfig::default());

        assert_eq!(view.chips().len(), 2);
        assert_eq!(view.chips()[0].label(), "\"hello\" (3x)");
        assert_eq!(view.chips()[1].label(), "\"world\"");
        assert_eq!(view.omitted(), 0);
        assert_eq!(view.omitted_label(), None);
        assert!(!view.is_empty());
    }

    #[test]
    fn test_build_over_limit() {
        let view = PatternListView::build(&items(15), &PatternListConfig::default());

        assert_eq!(view.chips().len(), 10);
        assert_eq!(view.omitted(), 5);
        assert_eq!(view.omitted_label(), Some("+5 others".to_string()));
    }

    #[test]
    fn test_build_empty() {
        let config = PatternListConfig::new().with_empty_label("none found");
        let view = PatternListView::build(&[], &config);

        assert!(view.is_empty());
        assert_eq!(view.chips().len(), 0);
        assert_eq!(view.empty_label(), Some("none found"));
        assert_eq!(view.omitted_label(), None);
    }

    #[test]
    fn test_build_zero_max_display() {
        // Policy: show nothing, report everything as omitted
        let config = PatternListConfig::new().with_max_display(0);
        let view = PatternListView::build(&items(4), &config);

        assert_eq!(view.chips().len(), 0);
        assert_eq!(view.omitted(), 4);
        assert_eq!(view.omitted_label(), Some("+4 others".to_string()));
        assert!(!view.is_empty());
    }

    #[test]
    fn test_build_exact_limit() {
        let config = PatternListConfig::new().with_max_display(4);
        let view = PatternListView::build(&items(4), &config);

        assert_eq!(view.chips().len(), 4);
        assert_eq!(view.omitted(), 0);
        assert_eq!(view.omitted_label(), None);
    }

    #[test]
    fn test_chip_label_empty_text() {
        let chip = PatternChip {
            text: String::new(),
            count: None,
        };
        assert_eq!(chip.label(), "\"\"");
    }

    #[test]
    fn test_chip_label_count_one() {
        // A count of 1 still gets the suffix; absence is what hides it
        let chip = PatternChip {
            text: "ok".to_string(),
            count: Some(1),
        };
        assert_eq!(chip.label(), "\"ok\" (1x)");
    }

    #[test]
    fn test_config_default() {
        let config = PatternListConfig::default();
        assert_eq!(config.max_display, 10);
        assert_eq!(config.empty_label, "no patterns detected");
    }

    #[test]
    fn test_build_preserves_order() {
        let items = vec![
            PatternItem::new("b"),
            PatternItem::new("a"),
            PatternItem::new("c"),
        ];
        let view = PatternListView::build(&items, &PatternListConfig::default());
        let texts: Vec<&str> = view.chips().iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_build_idempotent() {
        let items = items(12);
        let config = PatternListConfig::default();
        assert_eq!(
            PatternListView::build(&items, &config),
            PatternListView::build(&items, &config)
        );
    }

    proptest::proptest! {
        #[test]
        fn prop_displayed_len(texts: Vec<String>, max in 0usize..64) {
            let items: Vec<PatternItem> =
                texts.iter().map(PatternItem::new).collect();
            let config = PatternListConfig::new().with_max_display(max);
            let view = PatternListView::build(&items, &config);
            prop_assert_eq!(view.chips().len(), items.len().min(max));
        }

        #[test]
        fn prop_omitted_count(texts: Vec<String>, max in 0usize..64) {
            let items: Vec<PatternItem> =
                texts.iter().map(PatternItem::new).collect();
            let config = PatternListConfig::new().with_max_display(max);
            let view = PatternListView::build(&items, &config);
            prop_assert_eq!(view.omitted(), items.len().saturating_sub(max));
            prop_assert_eq!(view.chips().len() + view.omitted(), items.len());
        }

        #[test]
        fn prop_prefix_order(texts: Vec<String>, max in 0usize..64) {
            let items: Vec<PatternItem> =
                texts.iter().map(PatternItem::new).collect();
            let config = PatternListConfig::new().with_max_display(max);
            let view = PatternListView::build(&items, &config);
            for (chip, item) in view.chips().iter().zip(items.iter()) {
                prop_assert_eq!(&chip.text, &item.text);
                prop_assert_eq!(chip.count, item.count);
            }
        }

        #[test]
        fn prop_empty_iff_no_items(texts: Vec<String>, max in 0usize..64) {
            let items: Vec<PatternItem> =
                texts.iter().map(PatternItem::new).collect();
            let config = PatternListConfig::new().with_max_display(max);
            let view = PatternListView::build(&items, &config);
            prop_assert_eq!(view.is_empty(), items.is_empty());
            prop_assert_eq!(view.empty_label().is_some(), items.is_empty());
        }
    }
}
