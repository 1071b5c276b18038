//! Dashboard views.
//!
//! Each view consumes plain-data view-models from `scriva_view` and draws
//! them as widgets. Views hold no state of their own; the app rebuilds
//! them from the snapshot on every frame.

use crate::layout::Layout;
use crate::renderer::RenderConfig;
use crate::ui::Selection;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Wrap},
    Frame,
};
use scriva_view::{
    ConfidenceView, DistributionView, PatternListView, SampleListView, StatCardView, StreakView,
    StyleMetricView,
};
use unicode_width::UnicodeWidthStr;

/// Shared context handed to every view on render
pub struct RenderContext<'a> {
    /// Current selection state
    pub selection: Selection,
    /// Styling configuration
    pub style: &'a RenderConfig,
    /// Layout manager for card grids
    pub layout: &'a Layout,
}

/// Trait for dashboard views
pub trait View {
    /// Render the view
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext);

    /// Number of selectable items, for navigation bounds
    fn item_count(&self) -> usize;
}

fn selected_style() -> Style {
    Style::default().bg(Color::Blue).add_modifier(Modifier::BOLD)
}

/// Flow pattern chips into lines that fit `width`.
///
/// An empty view yields its placeholder; a truncated one gets the
/// omitted summary appended as a final line.
pub(crate) fn chip_lines(view: &PatternListView, width: u16) -> Vec<Line<'static>> {
    if let Some(label) = view.empty_label() {
        return vec![Line::from(Span::styled(
            label.to_string(),
            Style::default().add_modifier(Modifier::DIM | Modifier::ITALIC),
        ))];
    }

    let max_width = usize::from(width.max(10));
    let dim = Style::default().add_modifier(Modifier::DIM);

    let mut lines = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0usize;

    for chip in view.chips() {
        let label_width = chip.label().width();
        if used > 0 && used + 2 + label_width > max_width {
            lines.push(Line::from(std::mem::take(&mut spans)));
            used = 0;
        }
        if used > 0 {
            spans.push(Span::raw("  "));
            used += 2;
        }
        spans.push(Span::raw(format!("\"{}\"", chip.text)));
        if let Some(n) = chip.count {
            spans.push(Span::styled(format!(" ({n}x)"), dim));
        }
        used += label_width;
    }
    if !spans.is_empty() {
        lines.push(Line::from(spans));
    }

    if let Some(summary) = view.omitted_label() {
        lines.push(Line::from(Span::styled(summary, dim)));
    }

    lines
}

/// Lines for one distribution card: title, then one bar per entry
pub(crate) fn distribution_lines(
    view: &DistributionView,
    width: u16,
    style: &RenderConfig,
) -> Vec<Line<'static>> {
    let dim = Style::default().add_modifier(Modifier::DIM);

    let mut lines = vec![Line::from(Span::styled(
        view.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    if view.is_empty() {
        lines.push(Line::from(Span::styled(
            DistributionView::NO_DATA.to_string(),
            dim,
        )));
        return lines;
    }

    let bar_cells = usize::from(width / 2).clamp(4, 20);
    for entry in &view.entries {
        let filled = bar_cells * usize::from(entry.percent) / 100;
        lines.push(Line::from(vec![
            Span::raw(format!("{:<12} ", entry.label)),
            Span::styled(
                "█".repeat(filled),
                Style::default().fg(style.accent_color(entry.accent)),
            ),
            Span::styled("░".repeat(bar_cells - filled), dim),
            Span::raw(format!(" {:>4}", entry.percent_label())),
        ]));
    }

    lines
}

/// Stats dashboard: streak header, stat card grid, distributions
pub struct StatsView {
    streak: StreakView,
    cards: Vec<StatCardView>,
    distributions: Vec<DistributionView>,
}

impl StatsView {
    /// Create the stats view
    #[must_use]
    pub fn new(
        streak: StreakView,
        cards: Vec<StatCardView>,
        distributions: Vec<DistributionView>,
    ) -> Self {
        Self {
            streak,
            cards,
            distributions,
        }
    }

    fn streak_line(&self) -> Line<'static> {
        let marker_style = if self.streak.active() {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };

        let mut spans = vec![
            Span::styled("● ", marker_style),
            Span::styled(
                self.streak.current_label(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ];
        if self.streak.on_fire() {
            spans.push(Span::styled(
                " (on fire!)",
                Style::default().fg(Color::Yellow),
            ));
        }
        spans.push(Span::styled(
            format!("   {}", self.streak.longest_label()),
            Style::default().add_modifier(Modifier::DIM),
        ));

        Line::from(spans)
    }

    fn render_card(&self, f: &mut Frame, area: Rect, card: &StatCardView, selected: bool, style: &RenderConfig) {
        let border = if selected {
            style.selected_border_style()
        } else {
            style.border_style()
        };
        let block = Block::default()
            .title(format!(" {} ", card.title))
            .borders(Borders::ALL)
            .border_style(border);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut value_spans = vec![Span::styled(
            card.value.clone(),
            style.value_style(card.accent),
        )];
        if let Some(trend) = card.trend {
            value_spans.push(Span::styled(
                format!("  {}", trend.label()),
                Style::default().fg(style.trend_color(trend.positive)),
            ));
        }

        let mut lines = vec![Line::from(value_spans)];
        if let Some(subtitle) = &card.subtitle {
            lines.push(Line::from(Span::styled(
                subtitle.clone(),
                Style::default().add_modifier(Modifier::DIM),
            )));
        }

        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }
}

impl View for StatsView {
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let block = Block::default()
            .title(" Analytics ")
            .borders(Borders::ALL)
            .border_style(ctx.style.border_style());
        let inner = block.inner(area);
        f.render_widget(block, area);

        let (header, body) = ctx.layout.split_header(inner, 2);
        f.render_widget(Paragraph::new(self.streak_line()), header);

        let rects = ctx.layout.card_grid(body, self.cards.len());
        for (i, (card, rect)) in self.cards.iter().zip(rects.iter()).enumerate() {
            self.render_card(f, *rect, card, i == ctx.selection.line, ctx.style);
        }

        // Distributions go under the last card row
        let grid_height = rects
            .last()
            .map(|r| r.y + r.height - body.y)
            .unwrap_or(0);
        let dist_area = Rect {
            x: body.x,
            y: body.y + grid_height,
            width: body.width,
            height: body.height.saturating_sub(grid_height),
        };
        if dist_area.height > 0 && !self.distributions.is_empty() {
            let mut lines = Vec::new();
            for dist in &self.distributions {
                lines.extend(distribution_lines(dist, dist_area.width, ctx.style));
                lines.push(Line::default());
            }
            f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), dist_area);
        }
    }

    fn item_count(&self) -> usize {
        self.cards.len()
    }
}

/// Style patterns view: frequent expressions plus grouped pattern chips
pub struct PatternsView {
    frequent: PatternListView,
    groups: Vec<(String, PatternListView)>,
}

impl PatternsView {
    /// Create the patterns view
    #[must_use]
    pub fn new(frequent: PatternListView, groups: Vec<(String, PatternListView)>) -> Self {
        Self { frequent, groups }
    }

    fn section_lines(&self, width: u16, selection: &Selection) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        let sections = std::iter::once(("Frequent expressions".to_string(), &self.frequent))
            .chain(self.groups.iter().map(|(t, v)| (t.clone(), v)));

        for (i, (title, list)) in sections.enumerate() {
            let header_style = if i == selection.line {
                selected_style()
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            lines.push(Line::from(Span::styled(title, header_style)));
            lines.extend(chip_lines(list, width));
            lines.push(Line::default());
        }

        lines
    }
}

impl View for PatternsView {
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let block = Block::default()
            .title(" Style Patterns ")
            .borders(Borders::ALL)
            .border_style(ctx.style.border_style());
        let inner = block.inner(area);
        f.render_widget(block, area);

        let lines: Vec<Line> = self
            .section_lines(inner.width, &ctx.selection)
            .into_iter()
            .skip(ctx.selection.scroll)
            .collect();

        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }

    fn item_count(&self) -> usize {
        1 + self.groups.len()
    }
}

/// Profile view: confidence gauge plus style metric cards
pub struct ProfileView {
    confidence: ConfidenceView,
    metrics: Vec<StyleMetricView>,
}

impl ProfileView {
    /// Create the profile view
    #[must_use]
    pub fn new(confidence: ConfidenceView, metrics: Vec<StyleMetricView>) -> Self {
        Self {
            confidence,
            metrics,
        }
    }
}

impl View for ProfileView {
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let block = Block::default()
            .title(" Style Profile ")
            .borders(Borders::ALL)
            .border_style(ctx.style.border_style());
        let inner = block.inner(area);
        f.render_widget(block, area);

        let (header, body) = ctx.layout.split_header(inner, 3);

        let percent = self.confidence.progress_percent();
        let gauge = Gauge::default()
            .block(Block::default().title(format!(
                " Confidence {} ",
                self.confidence.score_label()
            )))
            .gauge_style(Style::default().fg(ctx.style.gauge_color(percent)))
            .percent(u16::from(percent))
            .label(self.confidence.status_label());
        f.render_widget(gauge, header);

        let rects = ctx.layout.card_grid(body, self.metrics.len());
        for (i, (metric, rect)) in self.metrics.iter().zip(rects.iter()).enumerate() {
            let border = if i == ctx.selection.line {
                ctx.style.selected_border_style()
            } else {
                Style::default().fg(ctx.style.variant_color(metric.variant))
            };
            let block = Block::default()
                .title(format!(" {} ", metric.title))
                .borders(Borders::ALL)
                .border_style(border);
            let card_inner = block.inner(*rect);
            f.render_widget(block, *rect);

            let lines = vec![
                Line::from(Span::styled(
                    metric.value_label(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    metric.description.clone(),
                    Style::default().add_modifier(Modifier::DIM),
                )),
            ];
            f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), card_inner);
        }
    }

    fn item_count(&self) -> usize {
        self.metrics.len()
    }
}

/// Reference samples view with expand/collapse
pub struct SamplesView {
    list: SampleListView,
}

impl SamplesView {
    /// Create the samples view
    #[must_use]
    pub fn new(list: SampleListView) -> Self {
        Self { list }
    }
}

impl View for SamplesView {
    fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let block = Block::default()
            .title(format!(" Reference Samples ({} total) ", self.list.total()))
            .borders(Borders::ALL)
            .border_style(ctx.style.border_style());

        if self.list.is_empty() {
            let placeholder = Paragraph::new(Span::styled(
                "no samples recorded yet",
                Style::default().add_modifier(Modifier::DIM | Modifier::ITALIC),
            ))
            .block(block)
            .wrap(Wrap { trim: false });
            f.render_widget(placeholder, area);
            return;
        }

        let dim = Style::default().add_modifier(Modifier::DIM);
        let mut items: Vec<ListItem> = self
            .list
            .displayed()
            .iter()
            .enumerate()
            .map(|(i, sample)| {
                let style = if i == ctx.selection.line {
                    selected_style()
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("[{}] {}  ", sample.context.label(), sample.date_label()),
                        dim,
                    ),
                    Span::raw(sample.text.clone()),
                ]))
                .style(style)
            })
            .collect();

        if let Some(toggle) = self.list.toggle_label() {
            items.push(ListItem::new(Line::from(Span::styled(
                format!("▸ {toggle} (press e)"),
                dim.add_modifier(Modifier::ITALIC),
            ))));
        }

        f.render_widget(List::new(items).block(block), area);
    }

    fn item_count(&self) -> usize {
        self.list.displayed().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scriva_view::{Accent, DistributionEntry, PatternItem, PatternListConfig};

    fn list_view(n: usize, max: usize) -> PatternListView {
        let items: Vec<PatternItem> = (0..n)
            .map(|i| PatternItem::with_count(format!("p{i}"), 2))
            .collect();
        let config = PatternListConfig::new().with_max_display(max);
        PatternListView::build(&items, &config)
    }

    #[test]
    fn test_chip_lines_empty_shows_placeholder() {
        let view = PatternListView::build(&[], &PatternListConfig::default());
        let lines = chip_lines(&view, 80);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_chip_lines_appends_omitted_summary() {
        let view = list_view(15, 10);
        let lines = chip_lines(&view, 200);
        // One wide line of chips plus the +5 others summary
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_chip_lines_wrap_to_width() {
        let view = list_view(6, 10);
        let wide = chip_lines(&view, 200);
        let narrow = chip_lines(&view, 14);
        assert!(narrow.len() > wide.len());
    }

    #[test]
    fn test_distribution_lines_counts() {
        let view = DistributionView::new(
            "Contexts",
            vec![
                DistributionEntry::new("email", 10, 60, Accent::Purple),
                DistributionEntry::new("chat", 5, 40, Accent::Green),
            ],
        );
        let lines = distribution_lines(&view, 60, &RenderConfig::default());
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_distribution_lines_empty() {
        let view = DistributionView::new("Modes", Vec::new());
        let lines = distribution_lines(&view, 60, &RenderConfig::default());
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_stats_view_item_count() {
        let view = StatsView::new(
            StreakView::new(2, 4),
            vec![StatCardView::new("Words", "10")],
            Vec::new(),
        );
        assert_eq!(view.item_count(), 1);
    }

    #[test]
    fn test_patterns_view_item_count() {
        let view = PatternsView::new(
            list_view(3, 10),
            vec![
                ("Greetings".to_string(), list_view(2, 5)),
                ("Closings".to_string(), list_view(1, 5)),
            ],
        );
        // Frequent expressions section plus two groups
        assert_eq!(view.item_count(), 3);
    }

    #[test]
    fn test_patterns_section_lines_include_all_groups() {
        let view = PatternsView::new(
            list_view(3, 10),
            vec![("Greetings".to_string(), list_view(2, 5))],
        );
        let lines = view.section_lines(80, &Selection::default());
        // 2 sections x (header + chips + blank)
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_samples_view_item_count() {
        use chrono::{TimeZone, Utc};
        use scriva_view::{SampleContext, SampleText};

        let samples: Vec<SampleText> = (0..8)
            .map(|i| SampleText {
                text: format!("s{i}"),
                context: SampleContext::General,
                recorded_at: Utc.with_ymd_and_hms(2026, 2, 1, 9, 0, 0).unwrap(),
            })
            .collect();
        let view = SamplesView::new(SampleListView::build(&samples, 5, false));
        assert_eq!(view.item_count(), 5);
    }
}
