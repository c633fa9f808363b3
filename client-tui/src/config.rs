//! Configuration for the chess TUI
//!
//! Settings come from the command line first, then environment variables,
//! then built-in defaults:
//! 1. `--save-path` / `CHESS_TUI_SAVE_PATH`
//! 2. `$HOME/.chess-tui/saved_game.json`
//! 3. `./saved_game.json` when no home directory is known
//!
//! Logs go to `CHESS_TUI_LOG_DIR` or `./logs`.

use std::path::PathBuf;

const SAVE_DIR: &str = ".chess-tui";
const SAVE_FILE: &str = "saved_game.json";
const DEFAULT_LOG_DIR: &str = "logs";

#[derive(Debug, Clone)]
pub struct Config {
    pub save_path: PathBuf,
    pub log_dir: PathBuf,
}

impl Config {
    /// Resolve the configuration, letting an explicit save path win.
    pub fn resolve(save_path: Option<PathBuf>) -> Self {
        Self {
            save_path: save_path.unwrap_or_else(get_save_path),
            log_dir: get_log_dir(),
        }
    }
}

/// Get the file used by the save and load commands.
pub fn get_save_path() -> PathBuf {
    if let Ok(path) = std::env::var("CHESS_TUI_SAVE_PATH") {
        return PathBuf::from(path);
    }

    match dirs::home_dir() {
        Some(home) => home.join(SAVE_DIR).join(SAVE_FILE),
        None => PathBuf::from(SAVE_FILE),
    }
}

/// Get the directory for the rolling log file.
pub fn get_log_dir() -> PathBuf {
    std::env::var("CHESS_TUI_LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_save_path_wins() {
        let config = Config::resolve(Some(PathBuf::from("/tmp/game.json")));
        assert_eq!(config.save_path, PathBuf::from("/tmp/game.json"));
    }

    #[test]
    fn test_default_save_path_not_empty() {
        // Note: returns CHESS_TUI_SAVE_PATH if it is set in the test environment
        let path = get_save_path();
        assert!(!path.as_os_str().is_empty());
    }

    #[test]
    fn test_log_dir_not_empty() {
        assert!(!get_log_dir().as_os_str().is_empty());
    }
}
