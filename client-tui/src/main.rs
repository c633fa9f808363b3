use std::path::PathBuf;

use chess_tui::session_file::load_game;
use chess_tui::{ui, AppState, Config};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Two-player chess in the terminal.
#[derive(Parser)]
#[command(name = "chess-tui", about = "Two-player chess in the terminal")]
struct Cli {
    /// Resume the game stored in this file.
    #[arg(long, value_name = "FILE")]
    load: Option<PathBuf>,

    /// File used by the save and load keys (defaults to $CHESS_TUI_SAVE_PATH
    /// or ~/.chess-tui/saved_game.json).
    #[arg(long, value_name = "FILE")]
    save_path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(cli.save_path);

    // Log to a file: stdout belongs to the board
    std::fs::create_dir_all(&config.log_dir).ok();
    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "chess-tui");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!(save_path = %config.save_path.display(), "chess-tui starting up");

    let state = match &cli.load {
        Some(path) => {
            let saved = load_game(path)?;
            AppState::from_saved(&saved)?
        }
        None => AppState::new(),
    };

    ui::run_app(state, &config)?;

    tracing::info!("chess-tui shutting down");
    Ok(())
}
