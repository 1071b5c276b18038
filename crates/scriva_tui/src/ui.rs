//! Dashboard app: snapshot loading, event loop, and view switching.

use crate::input::{InputEvent, InputHandler};
use crate::layout::{CalculatedLayout, Layout};
use crate::renderer::{RenderConfig, Renderer};
use crate::view::{PatternsView, ProfileView, RenderContext, SamplesView, StatsView, View};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Frame,
};
use scriva_view::ProfileSnapshot;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Dashboard application state
#[derive(Debug)]
pub struct App {
    /// Where the snapshot was loaded from, for reloads
    snapshot_path: PathBuf,
    /// Current snapshot
    snapshot: ProfileSnapshot,
    /// Current view mode
    view_mode: ViewMode,
    /// Whether the sample list is expanded
    samples_expanded: bool,
    /// Input handler
    input: InputHandler,
    /// Renderer
    renderer: Renderer,
    /// Layout
    layout: Layout,
    /// Should quit
    should_quit: bool,
    /// Current selection
    selection: Selection,
    /// Status message
    status: String,
}

/// View mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Stats dashboard
    Stats,
    /// Style patterns
    Patterns,
    /// Profile metrics and confidence
    Profile,
    /// Reference samples
    Samples,
    /// Help
    Help,
}

/// Selection state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    /// Selected item in the current view
    pub line: usize,
    /// Scroll offset
    pub scroll: usize,
}

impl App {
    /// Load a snapshot file and create the app
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, TuiError> {
        let path = path.into();
        let snapshot = read_snapshot(&path)?;
        info!(
            sessions = snapshot.stats.total_sessions,
            samples = snapshot.samples.len(),
            path = %path.display(),
            "loaded profile snapshot"
        );
        Ok(Self::from_snapshot(path, snapshot))
    }

    fn from_snapshot(snapshot_path: PathBuf, snapshot: ProfileSnapshot) -> Self {
        let status = format!("{} sessions analyzed", snapshot.stats.total_sessions);
        Self {
            snapshot_path,
            snapshot,
            view_mode: ViewMode::Stats,
            samples_expanded: false,
            input: InputHandler::new(),
            renderer: Renderer::new(RenderConfig::default()),
            layout: Layout::new(),
            should_quit: false,
            selection: Selection::default(),
            status,
        }
    }

    /// Replace the render configuration
    #[must_use]
    pub fn with_render_config(mut self, config: RenderConfig) -> Self {
        self.renderer = Renderer::new(config);
        self
    }

    /// Run the TUI
    ///
    /// # Errors
    ///
    /// Returns error if terminal setup or execution fails
    pub fn run(&mut self) -> Result<(), TuiError> {
        enable_raw_mode().map_err(|e| TuiError::Terminal(e.to_string()))?;
        execute!(std::io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .map_err(|e| TuiError::Terminal(e.to_string()))?;

        let backend = CrosstermBackend::new(std::io::stdout());
        let mut terminal =
            ratatui::Terminal::new(backend).map_err(|e| TuiError::Terminal(e.to_string()))?;

        let result = self.run_inner(&mut terminal);

        disable_raw_mode().map_err(|e| TuiError::Terminal(e.to_string()))?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
        .map_err(|e| TuiError::Terminal(e.to_string()))?;

        result
    }

    fn run_inner(
        &mut self,
        terminal: &mut ratatui::Terminal<CrosstermBackend<std::io::Stdout>>,
    ) -> Result<(), TuiError> {
        let tick_rate = Duration::from_millis(250);

        loop {
            terminal
                .draw(|f| self.draw(f))
                .map_err(|e| TuiError::Render(e.to_string()))?;
            self.renderer.tick();

            if crossterm::event::poll(tick_rate).map_err(|e| TuiError::Io(e.to_string()))? {
                if let Some(event) = self
                    .input
                    .next_event()
                    .map_err(|e| TuiError::Terminal(e.to_string()))?
                {
                    self.handle_event(event);
                }
            }

            if self.should_quit {
                return Ok(());
            }
        }
    }

    fn draw(&self, f: &mut Frame) {
        let layout = self.layout.calculate(f.area());
        let ctx = RenderContext {
            selection: self.selection,
            style: self.renderer.config(),
            layout: &self.layout,
        };

        match self.view_mode {
            ViewMode::Stats => self.stats_view().render(f, layout.main_area, &ctx),
            ViewMode::Patterns => self.patterns_view().render(f, layout.main_area, &ctx),
            ViewMode::Profile => self.profile_view().render(f, layout.main_area, &ctx),
            ViewMode::Samples => self.samples_view().render(f, layout.main_area, &ctx),
            ViewMode::Help => self.render_help_screen(f, layout.main_area),
        }

        self.render_status(f, layout);
    }

    fn stats_view(&self) -> StatsView {
        StatsView::new(
            self.snapshot.streak_view(),
            self.snapshot.stat_cards(),
            self.snapshot.distribution_views(),
        )
    }

    fn patterns_view(&self) -> PatternsView {
        PatternsView::new(
            self.snapshot.frequent_words_view(),
            self.snapshot.pattern_lists(),
        )
    }

    fn profile_view(&self) -> ProfileView {
        ProfileView::new(self.snapshot.confidence_view(), self.snapshot.metrics.clone())
    }

    fn samples_view(&self) -> SamplesView {
        SamplesView::new(self.snapshot.sample_list(self.samples_expanded))
    }

    fn render_status(&self, f: &mut Frame, layout: CalculatedLayout) {
        let status_text = format!(
            " {} | {} | Press ? for help",
            self.view_mode_short(),
            self.status
        );
        self.renderer
            .render_status(f, layout.status_area, &status_text);
    }

    fn render_help_screen(&self, f: &mut Frame, area: ratatui::layout::Rect) {
        use ratatui::{
            layout::{Alignment, Constraint, Direction, Layout},
            style::{Modifier, Style},
            text::Line,
            widgets::{Block, Borders, Paragraph},
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(1), Constraint::Min(0)].as_ref())
            .split(area);

        let title = Paragraph::new("Key Bindings")
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD));

        let help_text = vec![
            Line::from("Navigation:"),
            Line::from("  j/↓    - Move down"),
            Line::from("  k/↑    - Move up"),
            Line::from("  g      - Go to top"),
            Line::from("  G      - Go to bottom"),
            Line::from(""),
            Line::from("Views:"),
            Line::from("  1      - Analytics dashboard"),
            Line::from("  2      - Style patterns"),
            Line::from("  3      - Style profile"),
            Line::from("  4      - Reference samples"),
            Line::from(""),
            Line::from("Actions:"),
            Line::from("  e/Enter - Expand or collapse samples"),
            Line::from("  r       - Reload snapshot"),
            Line::from("  q       - Quit"),
            Line::from("  ?       - Help"),
        ];

        let help = Paragraph::new(help_text)
            .block(Block::default().borders(Borders::ALL).title(" Help "));
        f.render_widget(title, chunks[0]);
        f.render_widget(help, chunks[1]);
    }

    fn view_mode_short(&self) -> &str {
        match self.view_mode {
            ViewMode::Stats => "Analytics",
            ViewMode::Patterns => "Patterns",
            ViewMode::Profile => "Profile",
            ViewMode::Samples => "Samples",
            ViewMode::Help => "Help",
        }
    }

    fn switch_view(&mut self, mode: ViewMode, label: &str) {
        self.view_mode = mode;
        self.selection = Selection::default();
        self.status = format!("{label} view");
    }

    fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => {
                self.should_quit = true;
            }
            InputEvent::Help => {
                self.view_mode = ViewMode::Help;
            }
            InputEvent::ViewStats => self.switch_view(ViewMode::Stats, "Analytics"),
            InputEvent::ViewPatterns => self.switch_view(ViewMode::Patterns, "Patterns"),
            InputEvent::ViewProfile => self.switch_view(ViewMode::Profile, "Profile"),
            InputEvent::ViewSamples => self.switch_view(ViewMode::Samples, "Samples"),
            InputEvent::Down => {
                if self.selection.line < self.max_line() {
                    self.selection.line += 1;
                    self.update_scroll();
                }
            }
            InputEvent::Up => {
                if self.selection.line > 0 {
                    self.selection.line -= 1;
                    self.update_scroll();
                }
            }
            InputEvent::GoTop => {
                self.selection = Selection::default();
            }
            InputEvent::GoBottom => {
                self.selection.line = self.max_line();
                self.update_scroll();
            }
            InputEvent::ToggleExpand => {
                self.samples_expanded = !self.samples_expanded;
                self.selection = Selection::default();
                self.status = if self.samples_expanded {
                    "samples expanded".to_string()
                } else {
                    "samples collapsed".to_string()
                };
            }
            InputEvent::Reload => self.reload(),
            InputEvent::Unknown => {}
        }
    }

    fn reload(&mut self) {
        match read_snapshot(&self.snapshot_path) {
            Ok(snapshot) => {
                info!(path = %self.snapshot_path.display(), "reloaded snapshot");
                self.snapshot = snapshot;
                self.selection = Selection::default();
                self.status = "snapshot reloaded".to_string();
            }
            Err(err) => {
                // Keep showing the previous snapshot
                warn!(path = %self.snapshot_path.display(), %err, "reload failed");
                self.status = format!("reload failed: {err}");
            }
        }
    }

    fn update_scroll(&mut self) {
        let max_scroll = self.selection.line.saturating_sub(10);
        if self.selection.scroll > max_scroll {
            self.selection.scroll = max_scroll;
        } else if self.selection.line < self.selection.scroll {
            self.selection.scroll = self.selection.line;
        }
    }

    fn max_line(&self) -> usize {
        match self.view_mode {
            ViewMode::Stats => self.stats_view().item_count(),
            ViewMode::Patterns => self.patterns_view().item_count(),
            ViewMode::Profile => self.profile_view().item_count(),
            ViewMode::Samples => self.samples_view().item_count(),
            ViewMode::Help => 0,
        }
        .saturating_sub(1)
    }
}

fn read_snapshot(path: &Path) -> Result<ProfileSnapshot, TuiError> {
    let text = std::fs::read_to_string(path).map_err(|e| TuiError::Snapshot {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    serde_json::from_str(&text).map_err(|e| TuiError::Snapshot {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// TUI errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum TuiError {
    /// Terminal error
    #[error("terminal error: {0}")]
    Terminal(String),
    /// IO error
    #[error("io error: {0}")]
    Io(String),
    /// Snapshot loading error
    #[error("snapshot {path}: {reason}")]
    Snapshot {
        /// Snapshot file path
        path: String,
        /// What went wrong
        reason: String,
    },
    /// Render error
    #[error("render error: {0}")]
    Render(String),
}
