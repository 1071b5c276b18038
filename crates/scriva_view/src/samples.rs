//! Reference sample list view-model with collapse/expand.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where a sample was captured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleContext {
    /// Email composition
    Email,
    /// Chat message
    Chat,
    /// Code or commit message
    Code,
    /// Long-form document
    Document,
    /// Anything else
    General,
}

impl Default for SampleContext {
    fn default() -> Self {
        Self::General
    }
}

impl SampleContext {
    /// Short label for the context badge
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Chat => "Message",
            Self::Code => "Code",
            Self::Document => "Document",
            Self::General => "General",
        }
    }
}

/// One captured reference text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleText {
    /// Sample content
    pub text: String,
    /// Capture context
    #[serde(default)]
    pub context: SampleContext,
    /// When the sample was recorded
    pub recorded_at: DateTime<Utc>,
}

impl SampleText {
    /// Badge timestamp, e.g. `05 Jan 14:32`
    #[must_use]
    pub fn date_label(&self) -> String {
        self.recorded_at.format("%d %b %H:%M").to_string()
    }
}

/// Collapsible sample list view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleListView {
    displayed: Vec<SampleText>,
    total: usize,
    max_initial: usize,
    expanded: bool,
}

impl SampleListView {
    /// Default number of samples shown before expanding
    pub const DEFAULT_INITIAL: usize = 5;

    /// Build the view.
    ///
    /// Collapsed, it shows the first `max_initial` samples; expanded, all
    /// of them. Order is preserved either way.
    #[must_use]
    pub fn build(samples: &[SampleText], max_initial: usize, expanded: bool) -> Self {
        let shown = if expanded {
            samples.len()
        } else {
            samples.len().min(max_initial)
        };
        Self {
            displayed: samples[..shown].to_vec(),
            total: samples.len(),
            max_initial,
            expanded,
        }
    }

    /// Samples to draw
    #[must_use]
    pub fn displayed(&self) -> &[SampleText] {
        &self.displayed
    }

    /// Total number of samples, shown in the header
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Samples currently hidden behind the toggle
    #[must_use]
    pub fn hidden(&self) -> usize {
        self.total - self.displayed.len()
    }

    /// Whether the list is expanded
    #[must_use]
    pub fn expanded(&self) -> bool {
        self.expanded
    }

    /// True when there are no samples at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Toggle line under the list; `None` when nothing is ever hidden
    #[must_use]
    pub fn toggle_label(&self) -> Option<String> {
        if self.total <= self.max_initial {
            return None;
        }
        if self.expanded {
            Some("show less".to_string())
        } else {
            Some(format!("show {} more", self.hidden()))
        }
    }
}
