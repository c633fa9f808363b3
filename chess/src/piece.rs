//! Pieces and their movement geometry.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::tile::Tile;
use crate::types::{PieceKind, Player};

/// A piece on the board: its movement variant plus the player owning it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub owner: Player,
}

impl Piece {
    pub const fn new(kind: PieceKind, owner: Player) -> Self {
        Self { kind, owner }
    }

    /// Unicode glyph used for rendering.
    pub fn symbol(self) -> char {
        match (self.owner, self.kind) {
            (Player::White, PieceKind::King) => '♔',
            (Player::White, PieceKind::Queen) => '♕',
            (Player::White, PieceKind::Rook) => '♖',
            (Player::White, PieceKind::Bishop) => '♗',
            (Player::White, PieceKind::Knight) => '♘',
            (Player::White, PieceKind::Pawn) => '♙',
            (Player::Black, PieceKind::King) => '♚',
            (Player::Black, PieceKind::Queen) => '♛',
            (Player::Black, PieceKind::Rook) => '♜',
            (Player::Black, PieceKind::Bishop) => '♝',
            (Player::Black, PieceKind::Knight) => '♞',
            (Player::Black, PieceKind::Pawn) => '♟',
        }
    }

    /// FEN letter: uppercase for White, lowercase for Black.
    pub fn fen_char(self) -> char {
        match self.owner {
            Player::White => self.kind.to_char_upper(),
            Player::Black => self.kind.to_char_lower(),
        }
    }

    pub fn from_fen_char(c: char) -> Option<Self> {
        let kind = PieceKind::from_char(c)?;
        let owner = if c.is_ascii_uppercase() {
            Player::White
        } else {
            Player::Black
        };
        Some(Self::new(kind, owner))
    }

    /// Raw movement legality from `from` to `to`, ignoring whether the move
    /// would expose the mover's own king.
    pub fn can_move(self, board: &Board, from: Tile, to: Tile) -> bool {
        if from == to {
            return false;
        }

        let d_rank = to.rank() as i8 - from.rank() as i8;
        let d_file = to.file() as i8 - from.file() as i8;

        match self.kind {
            PieceKind::Rook => self.can_slide_straight(board, from, to, d_rank, d_file),
            PieceKind::Bishop => self.can_slide_diagonal(board, from, to, d_rank, d_file),
            PieceKind::Queen => {
                self.can_slide_straight(board, from, to, d_rank, d_file)
                    || self.can_slide_diagonal(board, from, to, d_rank, d_file)
            }
            PieceKind::Knight => {
                let (dr, df) = (d_rank.abs(), d_file.abs());
                matches!((dr, df), (1, 2) | (2, 1)) && self.can_move_or_capture(board, to)
            }
            PieceKind::King => {
                d_rank.abs() <= 1 && d_file.abs() <= 1 && self.can_move_or_capture(board, to)
            }
            PieceKind::Pawn => self.can_pawn_move(board, from, to, d_rank, d_file),
        }
    }

    /// True if `to` is empty or holds an opponent's piece.
    pub fn can_move_or_capture(self, board: &Board, to: Tile) -> bool {
        match board.piece_at(to) {
            None => true,
            Some(other) => other.owner != self.owner,
        }
    }

    /// Destinations reachable from `from` that do not leave the mover's king
    /// attacked, in board scan order.
    ///
    /// Each candidate is played on a copy of the grid and checked there; the
    /// live board is never touched.
    pub fn safe_moves(self, board: &Board, from: Tile) -> Vec<Tile> {
        Tile::all()
            .filter(|&to| self.can_move(board, from, to))
            .filter(|&to| !self.exposes_king(board, from, to))
            .collect()
    }

    /// Simulate `from -> to` on a scratch board and report whether the
    /// mover ends up in check.
    pub(crate) fn exposes_king(self, board: &Board, from: Tile, to: Tile) -> bool {
        let mut scratch = *board;
        scratch.relocate(from, to);
        scratch.is_player_in_check(self.owner)
    }

    fn can_slide_straight(
        self,
        board: &Board,
        from: Tile,
        to: Tile,
        d_rank: i8,
        d_file: i8,
    ) -> bool {
        (d_rank == 0 || d_file == 0)
            && self.can_move_or_capture(board, to)
            && !board.is_path_blocked(from, to)
    }

    fn can_slide_diagonal(
        self,
        board: &Board,
        from: Tile,
        to: Tile,
        d_rank: i8,
        d_file: i8,
    ) -> bool {
        d_rank.abs() == d_file.abs()
            && d_rank != 0
            && self.can_move_or_capture(board, to)
            && !board.is_path_blocked(from, to)
    }

    fn can_pawn_move(self, board: &Board, from: Tile, to: Tile, d_rank: i8, d_file: i8) -> bool {
        let forward = self.owner.pawn_direction();

        if d_file == 0 {
            if d_rank == forward {
                return !board.is_occupied(to);
            }
            if d_rank == 2 * forward && from.rank() == self.owner.pawn_start_rank() {
                return !board.is_occupied(to) && !board.is_path_blocked(from, to);
            }
            return false;
        }

        d_file.abs() == 1
            && d_rank == forward
            && board.is_occupied_by_player(to, self.owner.opposite())
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
