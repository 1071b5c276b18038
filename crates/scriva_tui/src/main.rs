//! SCRIVA TUI
//!
//! Terminal dashboard for profile snapshots.

#![warn(missing_docs)]
#![warn(clippy::all)]

use clap::Parser;
use color_eyre::Result;
use scriva_tui::renderer::RenderConfig;
use scriva_tui::ui::App;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "scriva-tui")]
#[command(about = "Terminal dashboard for Scriva profile snapshots", long_about = None)]
struct Args {
    /// Path to a profile snapshot JSON file
    #[arg(short, long)]
    snapshot: String,

    /// Disable colors and bold text
    #[arg(long)]
    minimal: bool,

    /// Use high-contrast borders
    #[arg(long, conflicts_with = "minimal")]
    high_contrast: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = if args.minimal {
        RenderConfig::minimal()
    } else if args.high_contrast {
        RenderConfig::high_contrast()
    } else {
        RenderConfig::default()
    };

    let mut app = App::load(&args.snapshot)?.with_render_config(config);
    app.run()?;

    Ok(())
}
