//! QueenStep terminal frontend.
//!
//! Renders the controller's observable state (board, counters, run state,
//! last highlight) in a ratatui view and maps key presses onto the
//! controller's control surface. Everything here is a collaborator of the
//! core: it only re-reads snapshots and invokes start/pause/reset.

mod app;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;

use queenstep_config::VisualizerConfig;

use crate::app::App;

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Parser)]
#[command(name = "queenstep", version, about = "Animate the N-Queens backtracking search")]
struct Cli {
    /// Configuration file (TOML or YAML).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Board size (4 to 20).
    #[arg(short = 'n', long)]
    size: Option<usize>,

    /// Delay between steps in milliseconds (0 to 500).
    #[arg(short, long)]
    delay: Option<u64>,

    /// Keep searching after the first solution instead of pausing.
    #[arg(long)]
    run_to_exhaustion: bool,
}

fn load_config(path: &Path) -> anyhow::Result<VisualizerConfig> {
    let by_extension = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => VisualizerConfig::from_yaml_file(path),
        _ => VisualizerConfig::from_toml_file(path),
    };
    by_extension.with_context(|| format!("failed to load config from {}", path.display()))
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    // Quiet by default; RUST_LOG opts in and output goes to stderr so the
    // board view stays intact when stderr is redirected.
    let filter = EnvFilter::builder()
        .with_default_directive("queenstep_controller=warn".parse().unwrap())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_banner() {
    println!("{} {}", "QueenStep".bold().magenta(), VERSION.dimmed());
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => VisualizerConfig::default(),
    };
    if let Some(size) = cli.size {
        config = config.with_board_size(size);
    }
    if let Some(delay) = cli.delay {
        config = config.with_delay_ms(delay);
    }
    if cli.run_to_exhaustion {
        config = config.with_stop_at_first(false);
    }
    config.validate()?;

    print_banner();

    let app = App::new(&config)?;
    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();

    match result {
        Ok(summary) => {
            println!(
                "{} steps, {} solutions on a {}-board",
                summary.steps.to_formatted_string(&Locale::en),
                summary.solutions.to_formatted_string(&Locale::en),
                summary.board_size,
            );
            Ok(())
        }
        Err(err) => Err(err),
    }
}
