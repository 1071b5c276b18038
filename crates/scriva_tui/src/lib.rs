//! SCRIVA TUI
//!
//! Terminal dashboard for profile snapshots produced by the analytics
//! engine. View-models come from `scriva_view`; this crate owns all
//! terminal concerns: layout, input, and drawing.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod input;
pub mod layout;
pub mod renderer;
pub mod ui;
pub mod view;

pub use input::{InputEvent, InputHandler, KeyBinding};
pub use layout::{Layout, LayoutConfig};
pub use renderer::{RenderConfig, RenderError, Renderer};
pub use ui::{App, Selection, TuiError, ViewMode};
pub use view::{PatternsView, ProfileView, RenderContext, SamplesView, StatsView, View};
