use chess_rules::{parse_fen, FenError, Game, Player};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::timer::ChessClock;

/// A saved game: position, side to move and time spent by each player.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedGame {
    pub fen: String,
    pub turn: Player,
    pub white_elapsed_ms: u64,
    pub black_elapsed_ms: u64,
    pub timestamp: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionFileError {
    #[error("Failed to access save file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse save file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Saved position is invalid: {0}")]
    Fen(#[from] FenError),
    #[error("Saved turn {turn} does not match the position's side to move")]
    TurnMismatch { turn: Player },
}

impl SavedGame {
    /// Snapshot a game and its clocks.
    pub fn capture(game: &Game, clock: &ChessClock) -> Self {
        let timestamp = {
            use std::time::SystemTime;
            let now = SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .unwrap_or_default();
            format!("{}", now.as_secs())
        };

        Self {
            fen: game.to_fen(),
            turn: game.turn(),
            white_elapsed_ms: duration_ms(clock.elapsed(Player::White)),
            black_elapsed_ms: duration_ms(clock.elapsed(Player::Black)),
            timestamp,
        }
    }

    /// Rebuild the game and (paused) clocks.
    pub fn restore(&self) -> Result<(Game, ChessClock), SessionFileError> {
        let (board, turn) = parse_fen(&self.fen)?;
        if turn != self.turn {
            return Err(SessionFileError::TurnMismatch { turn: self.turn });
        }
        let clock = ChessClock::with_elapsed(
            Duration::from_millis(self.white_elapsed_ms),
            Duration::from_millis(self.black_elapsed_ms),
        );
        Ok((Game::from_position(board, turn), clock))
    }
}

fn duration_ms(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

/// Save a game to `path`, creating parent directories as needed.
pub fn save_game(path: &Path, saved: &SavedGame) -> Result<(), SessionFileError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    let json = serde_json::to_string_pretty(saved)?;
    std::fs::write(path, json)?;
    tracing::info!(path = %path.display(), "game saved");
    Ok(())
}

/// Load a saved game from `path`, validating its position.
pub fn load_game(path: &Path) -> Result<SavedGame, SessionFileError> {
    let contents = std::fs::read_to_string(path)?;
    let saved: SavedGame = serde_json::from_str(&contents)?;
    parse_fen(&saved.fen)?;
    tracing::info!(path = %path.display(), "game loaded");
    Ok(saved)
}
