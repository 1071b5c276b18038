//! Terminal styling: accent mapping and shared draw helpers.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use scriva_view::{Accent, MetricVariant};
use serde::{Deserialize, Serialize};
use std::io;

/// Renderer for shared chrome (borders, status bar, errors)
#[derive(Debug)]
pub struct Renderer {
    /// Render configuration
    config: RenderConfig,
    /// Frame counter
    frame_count: usize,
}

impl Renderer {
    /// Create a new renderer
    #[must_use]
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            frame_count: 0,
        }
    }

    /// Get the configuration
    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Set the configuration
    #[must_use]
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Render a border with title
    pub fn render_border(&self, f: &mut Frame, area: Rect, title: &str) {
        let block = Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(self.config.border_style());

        f.render_widget(block, area);
    }

    /// Render the status bar
    pub fn render_status(&self, f: &mut Frame, area: Rect, message: &str) {
        let style = Style::default()
            .fg(self.config.status_color())
            .add_modifier(Modifier::BOLD);

        let paragraph = Paragraph::new(message)
            .style(style)
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, area);
    }

    /// Render an error message
    pub fn render_error(&self, f: &mut Frame, area: Rect, message: &str) {
        let style = Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD);

        let paragraph = Paragraph::new(message)
            .style(style)
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, area);
    }

    /// Increment frame counter
    pub fn tick(&mut self) {
        self.frame_count += 1;
    }

    /// Get frame count
    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }
}

/// Render configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Border style
    pub border_style: BorderStyle,
    /// Enable colors
    pub enable_colors: bool,
    /// Enable bold text
    pub enable_bold: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            border_style: BorderStyle::Rounded,
            enable_colors: true,
            enable_bold: true,
        }
    }
}

impl RenderConfig {
    /// Create a new render config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a minimal config (no colors, no bold)
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            border_style: BorderStyle::Plain,
            enable_colors: false,
            enable_bold: false,
        }
    }

    /// Create a high-contrast config
    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            border_style: BorderStyle::Double,
            enable_colors: true,
            enable_bold: true,
        }
    }

    /// Get the border style
    #[must_use]
    pub fn border_style(&self) -> Style {
        if !self.enable_colors {
            return Style::default().fg(Color::White);
        }

        let color = match self.border_style {
            BorderStyle::Plain => Color::White,
            BorderStyle::Rounded => Color::DarkGray,
            BorderStyle::Double => Color::Cyan,
        };

        Style::default().fg(color)
    }

    /// Border style for the focused panel or the selected card
    #[must_use]
    pub fn selected_border_style(&self) -> Style {
        let mut style = Style::default().fg(self.accent_color(Accent::Purple));
        if self.enable_bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    }

    /// Status bar color
    #[must_use]
    pub fn status_color(&self) -> Color {
        if self.enable_colors {
            Color::Cyan
        } else {
            Color::White
        }
    }

    /// Map a semantic accent token to a terminal color
    #[must_use]
    pub fn accent_color(&self, accent: Accent) -> Color {
        if !self.enable_colors {
            return Color::White;
        }

        match accent {
            Accent::Purple => Color::Magenta,
            Accent::Green => Color::Green,
            Accent::Blue => Color::Blue,
            Accent::Orange => Color::Yellow,
        }
    }

    /// Map a metric card variant to a terminal color
    #[must_use]
    pub fn variant_color(&self, variant: MetricVariant) -> Color {
        if !self.enable_colors {
            return Color::White;
        }

        match variant {
            MetricVariant::Default => Color::Gray,
            MetricVariant::Accent => Color::Magenta,
            MetricVariant::Warning => Color::Yellow,
        }
    }

    /// Trend color: green up, red down
    #[must_use]
    pub fn trend_color(&self, positive: bool) -> Color {
        if !self.enable_colors {
            return Color::White;
        }

        if positive {
            Color::Green
        } else {
            Color::Red
        }
    }

    /// Gauge color for a confidence fill percent
    #[must_use]
    pub fn gauge_color(&self, percent: u8) -> Color {
        if !self.enable_colors {
            return Color::White;
        }

        match percent {
            0..=33 => Color::Red,
            34..=66 => Color::Yellow,
            67..=99 => Color::Magenta,
            _ => Color::Green,
        }
    }

    /// Style for secondary text (subtitles, counts, placeholders)
    #[must_use]
    pub fn dim_style(&self) -> Style {
        Style::default().add_modifier(Modifier::DIM)
    }

    /// Style for headline values
    #[must_use]
    pub fn value_style(&self, accent: Accent) -> Style {
        let mut style = Style::default().fg(self.accent_color(accent));
        if self.enable_bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    }
}

/// Border style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// Plain borders
    Plain,
    /// Rounded borders
    Rounded,
    /// Double borders
    Double,
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self::Rounded
    }
}

/// Render-related errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// IO error
    #[error("IO error: {0}")]
    Io(String),
    /// Terminal error
    #[error("terminal error")]
    Terminal,
}

impl From<io::Error> for RenderError {
    fn from(err: io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
