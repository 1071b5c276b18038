//! Profile snapshot: the data contract with the analytics engine.
//!
//! The engine writes a JSON snapshot after each analysis pass; the dashboard
//! reads it and builds view-models from it. All computation (streaks, style
//! metrics, confidence scoring) has already happened upstream. File I/O
//! lives in the front end; this module is pure data plus presenter wiring.

use crate::confidence::ConfidenceView;
use crate::distribution::{DistributionEntry, DistributionView};
use crate::metrics::StyleMetricView;
use crate::patterns::{PatternItem, PatternListConfig, PatternListView};
use crate::samples::{SampleListView, SampleText};
use crate::stats::{Accent, StatCardView, Trend};
use crate::streak::StreakView;
use serde::{Deserialize, Serialize};

/// Top-level profile snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    /// Headline usage stats
    pub stats: StatsBlock,
    /// Activity streaks
    pub streak: StreakBlock,
    /// Detected style patterns by group
    #[serde(default)]
    pub patterns: PatternGroups,
    /// Frequent expressions with counts
    #[serde(default)]
    pub frequent_words: Vec<PatternItem>,
    /// Profile confidence
    pub confidence: ConfidenceBlock,
    /// Style metric cards, pre-formatted by the engine
    #[serde(default)]
    pub metrics: Vec<StyleMetricView>,
    /// Reference samples, newest first
    #[serde(default)]
    pub samples: Vec<SampleText>,
    /// Usage distributions (per context, mode, language)
    #[serde(default)]
    pub distributions: Vec<DistributionBlock>,
}

/// Headline usage stats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsBlock {
    /// Total words dictated
    pub total_words: u64,
    /// Total dictation sessions
    pub total_sessions: u64,
    /// Total minutes recorded
    pub total_minutes: u64,
    /// Average words per minute
    pub words_per_minute: f64,
    /// Optional period-over-period trend on the word count
    #[serde(default)]
    pub words_trend: Option<Trend>,
}

/// Activity streaks in days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakBlock {
    /// Current streak
    pub current_days: u32,
    /// Longest recorded streak
    pub longest_days: u32,
}

/// Detected style patterns, grouped the way the engine classifies them
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PatternGroups {
    /// Opening formulas
    #[serde(default)]
    pub greetings: Vec<PatternItem>,
    /// Closing formulas
    #[serde(default)]
    pub closings: Vec<PatternItem>,
    /// Transition phrases
    #[serde(default)]
    pub transitions: Vec<PatternItem>,
}

/// Profile confidence numbers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceBlock {
    /// Score in percent
    pub score: f64,
    /// Samples analyzed so far
    pub samples_analyzed: usize,
    /// Samples required before the profile counts as trained
    pub min_samples: usize,
}

/// One distribution card as stored in the snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionBlock {
    /// Card title
    pub title: String,
    /// Entries in display order
    #[serde(default)]
    pub entries: Vec<DistributionEntryBlock>,
}

/// One distribution entry as stored in the snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionEntryBlock {
    /// Category label
    pub label: String,
    /// Absolute count
    pub count: u64,
    /// Share in percent
    pub percent: u8,
}

/// How many chips a pattern group shows before truncating
const PATTERN_GROUP_LIMIT: usize = 5;
/// How many chips the frequent-expressions cloud shows
const FREQUENT_WORDS_LIMIT: usize = 20;

impl ProfileSnapshot {
    /// Headline stat cards for the dashboard grid
    #[must_use]
    pub fn stat_cards(&self) -> Vec<StatCardView> {
        let mut words = StatCardView::new("Words", self.stats.total_words.to_string())
            .with_accent(Accent::Purple);
        if let Some(trend) = self.stats.words_trend {
            words = words.with_trend(trend);
        }
        vec![
            words,
            StatCardView::new("Sessions", self.stats.total_sessions.to_string())
                .with_accent(Accent::Green),
            StatCardView::new("Minutes", self.stats.total_minutes.to_string())
                .with_accent(Accent::Blue),
            StatCardView::new("Words/min", format!("{:.0}", self.stats.words_per_minute))
                .with_subtitle("average pace")
                .with_accent(Accent::Orange),
        ]
    }

    /// Streak view for the dashboard header
    #[must_use]
    pub fn streak_view(&self) -> StreakView {
        StreakView::new(self.streak.current_days, self.streak.longest_days)
    }

    /// Pattern group views, titled, in a stable order
    #[must_use]
    pub fn pattern_lists(&self) -> Vec<(String, PatternListView)> {
        let config = PatternListConfig::new().with_max_display(PATTERN_GROUP_LIMIT);
        [
            ("Greetings", &self.patterns.greetings),
            ("Closings", &self.patterns.closings),
            ("Transitions", &self.patterns.transitions),
        ]
        .into_iter()
        .map(|(title, items)| (title.to_string(), PatternListView::build(items, &config)))
        .collect()
    }

    /// Frequent-expressions chip cloud
    #[must_use]
    pub fn frequent_words_view(&self) -> PatternListView {
        let config = PatternListConfig::new()
            .with_max_display(FREQUENT_WORDS_LIMIT)
            .with_empty_label("no expressions detected");
        PatternListView::build(&self.frequent_words, &config)
    }

    /// Confidence gauge view
    #[must_use]
    pub fn confidence_view(&self) -> ConfidenceView {
        ConfidenceView::new(
            self.confidence.score,
            self.confidence.samples_analyzed,
            self.confidence.min_samples,
        )
    }

    /// Sample list view at the given expansion state
    #[must_use]
    pub fn sample_list(&self, expanded: bool) -> SampleListView {
        SampleListView::build(&self.samples, SampleListView::DEFAULT_INITIAL, expanded)
    }

    /// Distribution cards with accents assigned by position
    #[must_use]
    pub fn distribution_views(&self) -> Vec<DistributionView> {
        self.distributions
            .iter()
            .map(|block| {
                let entries = block
                    .entries
                    .iter()
                    .enumerate()
                    .map(|(i, e)| {
                        DistributionEntry::new(
                            e.label.clone(),
                            e.count,
                            e.percent,
                            Accent::cycle(i),
                        )
                    })
                    .collect();
                DistributionView::new(block.title.clone(), entries)
            })
            .collect()
    }
}
