use crate::board::Board;
use crate::fen::{format_fen, parse_fen, FenError};
use crate::moves::{Move, MoveError};
use crate::piece::Piece;
use crate::tile::Tile;
use crate::types::{PieceKind, Player};

/// A two-player game: the board, whose turn it is, and the moves played.
///
/// [`Board`] itself does not care whose turn it is; `Game` is the layer that
/// only lets the side to move pick up its own pieces.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Player,
    history: Vec<HistoryEntry>,
}

/// A played move, with the board as it was before (for undo).
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub mv: Move,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub board_before: Board,
    /// Short algebraic notation, e.g. `Nxe5+`.
    pub notation: String,
}

/// Result of evaluating the position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check(Player),
    Checkmate { winner: Player },
}

impl Game {
    /// Create a new game from the standard starting position
    pub fn new() -> Self {
        Self {
            board: Board::standard(),
            turn: Player::White,
            history: Vec::new(),
        }
    }

    /// Create a game from a FEN string
    pub fn from_fen(fen: &str) -> Result<Self, GameError> {
        let (board, turn) = parse_fen(fen)?;
        Ok(Self::from_position(board, turn))
    }

    pub fn from_position(board: Board, turn: Player) -> Self {
        Self {
            board,
            turn,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn to_fen(&self) -> String {
        format_fen(&self.board, self.turn)
    }

    /// Back to the starting position with White to move.
    pub fn reset(&mut self) {
        self.board.initialize();
        self.turn = Player::White;
        self.history.clear();
    }

    /// Safe destinations for the piece on `tile`, or nothing if that piece
    /// does not belong to the side to move.
    pub fn safe_moves_from(&self, tile: Tile) -> Vec<Tile> {
        match self.board.piece_at(tile) {
            Some(piece) if piece.owner == self.turn => piece.safe_moves(&self.board, tile),
            _ => Vec::new(),
        }
    }

    /// Play `from -> to` for the side to move and hand the turn over.
    pub fn make_move(&mut self, from: Tile, to: Tile) -> Result<HistoryEntry, GameError> {
        let piece = self
            .board
            .piece_at(from)
            .ok_or(GameError::Move(MoveError::EmptySource(from)))?;
        if piece.owner != self.turn {
            return Err(GameError::NotYourPiece {
                tile: from,
                turn: self.turn,
            });
        }

        let board_before = self.board;
        let captured = self.board.try_move(from, to)?;
        self.turn = self.turn.opposite();

        let notation = notation_for(piece, from, to, captured, &self.board, self.turn);
        let entry = HistoryEntry {
            mv: Move::new(from, to),
            piece,
            captured,
            board_before,
            notation,
        };
        tracing::info!(mv = %entry.mv, notation = %entry.notation, "move played");
        self.history.push(entry.clone());

        Ok(entry)
    }

    /// Undo the last move
    pub fn undo(&mut self) -> Result<HistoryEntry, GameError> {
        let entry = self.history.pop().ok_or(GameError::NothingToUndo)?;
        self.board = entry.board_before;
        self.turn = entry.piece.owner;
        tracing::info!(mv = %entry.mv, "move undone");
        Ok(entry)
    }

    /// Checkmate takes precedence over check.
    pub fn status(&self) -> GameStatus {
        if self.board.is_player_in_checkmate(self.turn) {
            GameStatus::Checkmate {
                winner: self.turn.opposite(),
            }
        } else if self.board.is_player_in_check(self.turn) {
            GameStatus::Check(self.turn)
        } else {
            GameStatus::Ongoing
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Short algebraic notation for a move already applied to `after`.
fn notation_for(
    piece: Piece,
    from: Tile,
    to: Tile,
    captured: Option<Piece>,
    after: &Board,
    next: Player,
) -> String {
    let mut san = String::new();

    match piece.kind {
        PieceKind::Pawn => {
            if captured.is_some() {
                san.push(from.file_char());
            }
        }
        other => san.push(other.to_char_upper()),
    }

    if captured.is_some() {
        san.push('x');
    }
    san.push_str(&to.to_string());

    if after.is_player_in_checkmate(next) {
        san.push('#');
    } else if after.is_player_in_check(next) {
        san.push('+');
    }

    san
}

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("{tile} does not hold a {turn} piece")]
    NotYourPiece { tile: Tile, turn: Player },
    #[error(transparent)]
    Move(#[from] MoveError),
    #[error("Nothing to undo")]
    NothingToUndo,
    #[error("FEN parse error: {0}")]
    FenError(#[from] FenError),
}
