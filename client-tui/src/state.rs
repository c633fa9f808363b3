use chess_rules::{Game, GameStatus, Player, Tile};
use std::path::Path;

use crate::session_file::{load_game, save_game, SavedGame, SessionFileError};
use crate::timer::ChessClock;

/// Everything the terminal UI needs: the game, the clocks and the pending
/// selection.
pub struct AppState {
    pub game: Game,
    pub clock: ChessClock,
    /// Tile under the keyboard cursor
    pub cursor: Tile,
    /// Tile of the piece picked up, waiting for a destination
    pub selected: Option<Tile>,
    /// Safe destinations of the selected piece
    pub highlights: Vec<Tile>,
    /// Status message to display
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::from_parts(Game::new(), ChessClock::new())
    }

    /// Resume a saved game.
    pub fn from_saved(saved: &SavedGame) -> Result<Self, SessionFileError> {
        let (game, clock) = saved.restore()?;
        Ok(Self::from_parts(game, clock))
    }

    fn from_parts(game: Game, mut clock: ChessClock) -> Self {
        clock.resume(game.turn());
        Self {
            game,
            clock,
            cursor: start_cursor(),
            selected: None,
            highlights: Vec::new(),
            status_message: None,
        }
    }

    pub fn turn(&self) -> Player {
        self.game.turn()
    }

    /// Fresh game with both clocks back at zero.
    pub fn new_game(&mut self) {
        self.game.reset();
        self.clock = ChessClock::new();
        self.clock.resume(self.game.turn());
        self.clear_selection();
        tracing::info!("new game");
    }

    pub fn on_tick(&mut self) {
        self.clock.tick();
    }

    pub fn move_cursor(&mut self, d_rank: i8, d_file: i8) {
        if let Some(tile) = self.cursor.offset(d_rank, d_file) {
            self.cursor = tile;
        }
    }

    pub fn activate_cursor(&mut self) {
        self.activate(self.cursor);
    }

    /// Handle a click on `tile`.
    ///
    /// With nothing selected, picks up a piece of the side to move and
    /// highlights its safe moves. With a piece selected, tries to move it to
    /// `tile`; the selection is dropped either way.
    pub fn activate(&mut self, tile: Tile) {
        let Some(from) = self.selected else {
            if self.game.board().is_occupied_by_player(tile, self.turn()) {
                self.selected = Some(tile);
                self.highlights = self.game.safe_moves_from(tile);
                tracing::debug!(%tile, moves = self.highlights.len(), "piece selected");
            }
            return;
        };

        match self.game.make_move(from, tile) {
            Ok(entry) => {
                self.clock.pause();
                self.status_message = Some(format!("Played {}", entry.notation));

                match self.game.status() {
                    GameStatus::Checkmate { winner } => {
                        tracing::info!(%winner, "checkmate");
                        self.new_game();
                        self.status_message = Some(format!("Checkmate! {winner} wins."));
                    }
                    GameStatus::Check(_) => {
                        self.status_message = Some("Check.".to_string());
                    }
                    GameStatus::Ongoing => {}
                }

                self.clock.resume(self.turn());
            }
            Err(e) => {
                tracing::debug!(%from, to = %tile, error = %e, "move rejected");
            }
        }

        self.clear_selection();
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.highlights.clear();
    }

    pub fn undo(&mut self) {
        match self.game.undo() {
            Ok(entry) => {
                self.status_message = Some(format!("Took back {}", entry.notation));
                self.clock.pause();
                self.clock.switch_to(self.turn());
            }
            Err(e) => self.status_message = Some(e.to_string()),
        }
        self.clear_selection();
    }

    /// Save to `path`; the clocks stand still while the file is written.
    pub fn save(&mut self, path: &Path) {
        self.clock.pause();
        let saved = SavedGame::capture(&self.game, &self.clock);
        self.status_message = Some(match save_game(path, &saved) {
            Ok(()) => format!("Saved to {}", path.display()),
            Err(e) => {
                tracing::warn!(error = %e, "save failed");
                e.to_string()
            }
        });
        self.clock.resume(self.turn());
    }

    /// Replace the current game with the one stored at `path`.
    pub fn load(&mut self, path: &Path) {
        self.clock.pause();
        let loaded = load_game(path).and_then(|saved| saved.restore());
        match loaded {
            Ok((game, clock)) => {
                self.game = game;
                self.clock = clock;
                self.clear_selection();
                self.status_message = Some(format!("Loaded {}", path.display()));
            }
            Err(e) => {
                tracing::warn!(error = %e, "load failed");
                self.status_message = Some(e.to_string());
            }
        }
        self.clock.resume(self.turn());
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// e2, where the first move is usually made.
fn start_cursor() -> Tile {
    Tile::new(1, 4).unwrap_or_default()
}
