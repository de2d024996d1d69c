//! PitchDeck - Animated agency-proposal pitch deck for the terminal
//!
//! Presents a sequence of full-viewport sections over a continuously
//! animated background that reacts to scroll position and mouse movement,
//! with keyboard-driven section navigation.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pitchdeck::config::Config;
use pitchdeck::constants::{APP_BINARY_NAME, APP_NAME};
use pitchdeck::tui;

/// PitchDeck - Animated agency-proposal pitch deck for the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Section id to start on (e.g. "investment")
    #[arg(short, long, value_name = "ID")]
    section: Option<String>,

    /// Disable mouse capture (background ignores the pointer)
    #[arg(long)]
    no_mouse: bool,

    /// Write debug logs to the config directory
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load().unwrap_or_else(|err| {
        eprintln!("Warning: failed to load config, using defaults: {err}");
        Config::default()
    });

    // The TUI owns stdout, so debug logs go to a file.
    let _log_guard = if cli.debug {
        Some(init_logging()?)
    } else {
        None
    };

    let mouse = config.ui.mouse && !cli.no_mouse;

    if let Some(id) = cli.section.as_deref() {
        let registry = pitchdeck::deck::SectionRegistry::standard();
        if registry.index_of(id).is_none() {
            eprintln!("Error: unknown section id: {id}");
            eprintln!();
            eprintln!("Known sections:");
            for section in registry.sections() {
                eprintln!("  {}", section.id);
            }
            eprintln!();
            eprintln!("Example:");
            eprintln!("  {APP_BINARY_NAME} --section investment");
            std::process::exit(1);
        }
    }

    let mut terminal = tui::setup_terminal(mouse)?;
    let mut app_state = tui::AppState::new(config, cli.section)?;

    // Run main TUI loop
    let result = tui::run_tui(&mut app_state, &mut terminal);

    // Restore terminal
    tui::restore_terminal(terminal, mouse)?;

    // Check for errors
    result?;

    Ok(())
}

/// Initializes tracing into a log file under the config directory.
fn init_logging() -> Result<tracing::subscriber::DefaultGuard> {
    let log_path = Config::log_file_path()?;
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .context(format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = std::fs::File::create(&log_path)
        .context(format!("Failed to create log file: {}", log_path.display()))?;

    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::sync::Arc::new(file))
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("{}=debug", env!("CARGO_PKG_NAME")))),
        )
        .with_ansi(false)
        .finish();

    eprintln!("{APP_NAME}: logging to {}", log_path.display());
    Ok(tracing::subscriber::set_default(subscriber))
}
