//! Stat card view-models for the analytics dashboard.

use serde::{Deserialize, Serialize};

/// Semantic accent for a card; the front end maps it to actual colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    /// Primary accent
    Purple,
    /// Positive / success
    Green,
    /// Informational
    Blue,
    /// Attention
    Orange,
}

impl Default for Accent {
    fn default() -> Self {
        Self::Purple
    }
}

impl Accent {
    /// Accent for the n-th entry of a series, cycling through the palette
    #[must_use]
    pub fn cycle(index: usize) -> Self {
        match index % 4 {
            0 => Self::Purple,
            1 => Self::Green,
            2 => Self::Blue,
            _ => Self::Orange,
        }
    }
}

/// Period-over-period trend annotation on a stat card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trend {
    /// Change in percent, always non-negative; direction is `positive`
    pub percent: u32,
    /// True when the change is an improvement
    pub positive: bool,
}

impl Trend {
    /// An upward trend
    #[must_use]
    pub fn up(percent: u32) -> Self {
        Self {
            percent,
            positive: true,
        }
    }

    /// A downward trend
    #[must_use]
    pub fn down(percent: u32) -> Self {
        Self {
            percent,
            positive: false,
        }
    }

    /// Label with direction marker, e.g. `▲ 12%` or `▼ 4%`
    #[must_use]
    pub fn label(&self) -> String {
        let arrow = if self.positive { '▲' } else { '▼' };
        format!("{arrow} {}%", self.percent)
    }
}

/// A single headline stat card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCardView {
    /// Card title, shown under the value
    pub title: String,
    /// Headline value, already formatted
    pub value: String,
    /// Optional secondary line
    pub subtitle: Option<String>,
    /// Optional trend annotation
    pub trend: Option<Trend>,
    /// Accent token
    pub accent: Accent,
}

impl StatCardView {
    /// Create a card with just a title and value
    #[must_use]
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            subtitle: None,
            trend: None,
            accent: Accent::default(),
        }
    }

    /// Add a subtitle line
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Add a trend annotation
    #[must_use]
    pub fn with_trend(mut self, trend: Trend) -> Self {
        self.trend = Some(trend);
        self
    }

    /// Set the accent
    #[must_use]
    pub fn with_accent(mut self, accent: Accent) -> Self {
        self.accent = accent;
        self
    }
}
