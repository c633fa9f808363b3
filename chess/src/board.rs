//! The 8x8 grid and the rules that need a whole position to answer.

use crate::moves::MoveError;
use crate::piece::Piece;
use crate::tile::Tile;
use crate::types::{PieceKind, Player};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 grid of optional pieces, indexed `[rank][file]`.
///
/// The board is a plain value: copying it is how moves get simulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard starting position.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        board.initialize();
        board
    }

    /// Reset to the standard starting arrangement, discarding every piece.
    pub fn initialize(&mut self) {
        self.squares = [[None; 8]; 8];
        for player in [Player::White, Player::Black] {
            let back = player.back_rank() as usize;
            let pawns = player.pawn_start_rank() as usize;
            for (file, kind) in BACK_RANK.iter().enumerate() {
                self.squares[back][file] = Some(Piece::new(*kind, player));
                self.squares[pawns][file] = Some(Piece::new(PieceKind::Pawn, player));
            }
        }
    }

    pub fn piece_at(&self, tile: Tile) -> Option<Piece> {
        self.squares[tile.rank() as usize][tile.file() as usize]
    }

    pub fn is_occupied(&self, tile: Tile) -> bool {
        self.piece_at(tile).is_some()
    }

    pub fn is_occupied_by_player(&self, tile: Tile, player: Player) -> bool {
        self.piece_at(tile).is_some_and(|p| p.owner == player)
    }

    /// Put `piece` on `tile`, returning whatever was there.
    pub fn place(&mut self, tile: Tile, piece: Piece) -> Option<Piece> {
        self.slot(tile).replace(piece)
    }

    pub fn remove(&mut self, tile: Tile) -> Option<Piece> {
        self.slot(tile).take()
    }

    /// Every piece owned by `player`, in scan order.
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = (Tile, Piece)> + '_ {
        Tile::all().filter_map(move |tile| {
            self.piece_at(tile)
                .filter(|p| p.owner == player)
                .map(|p| (tile, p))
        })
    }

    pub fn king_tile(&self, player: Player) -> Option<Tile> {
        self.pieces(player)
            .find(|(_, p)| p.kind == PieceKind::King)
            .map(|(tile, _)| tile)
    }

    /// True if any tile strictly between `from` and `to` is occupied.
    ///
    /// Only meaningful for tiles on a common rank, file or diagonal; any
    /// other pair has no path and reports `false`.
    pub fn is_path_blocked(&self, from: Tile, to: Tile) -> bool {
        let d_rank = to.rank() as i8 - from.rank() as i8;
        let d_file = to.file() as i8 - from.file() as i8;
        let aligned = d_rank == 0 || d_file == 0 || d_rank.abs() == d_file.abs();
        if !aligned || from == to {
            return false;
        }

        let step = (d_rank.signum(), d_file.signum());
        let mut current = from.offset(step.0, step.1);
        while let Some(tile) = current {
            if tile == to {
                return false;
            }
            if self.is_occupied(tile) {
                return true;
            }
            current = tile.offset(step.0, step.1);
        }
        false
    }

    /// Apply `from -> to` if it is one of the piece's safe moves.
    ///
    /// Returns `false` and leaves the grid untouched otherwise. Whose turn it
    /// is is not checked here.
    pub fn move_piece(&mut self, from: Tile, to: Tile) -> bool {
        self.try_move(from, to).is_ok()
    }

    /// Like [`Board::move_piece`], but reports the captured piece on success
    /// and the reason on failure.
    pub fn try_move(&mut self, from: Tile, to: Tile) -> Result<Option<Piece>, MoveError> {
        let piece = self.piece_at(from).ok_or(MoveError::EmptySource(from))?;

        if !piece.can_move(self, from, to) || piece.exposes_king(self, from, to) {
            tracing::debug!(%from, %to, piece = %piece.fen_char(), "rejected move");
            return Err(MoveError::IllegalMove { from, to });
        }

        let captured = self.relocate(from, to);
        tracing::debug!(%from, %to, piece = %piece.fen_char(), ?captured, "applied move");
        Ok(captured)
    }

    /// Move whatever is on `from` to `to` without any validation.
    pub(crate) fn relocate(&mut self, from: Tile, to: Tile) -> Option<Piece> {
        let moving = self.remove(from);
        let captured = self.remove(to);
        if let Some(piece) = moving {
            self.place(to, piece);
        }
        captured
    }

    /// True if any piece of `attacker` could move to `tile`, ignoring pins.
    pub fn is_attacked_by(&self, tile: Tile, attacker: Player) -> bool {
        self.pieces(attacker)
            .any(|(from, piece)| piece.can_move(self, from, tile))
    }

    /// True if `player`'s king is attacked. A side without a king is never
    /// in check.
    pub fn is_player_in_check(&self, player: Player) -> bool {
        match self.king_tile(player) {
            Some(king) => self.is_attacked_by(king, player.opposite()),
            None => false,
        }
    }

    /// True if any piece of `player` has at least one safe move.
    pub fn has_safe_moves(&self, player: Player) -> bool {
        self.pieces(player).any(|(from, piece)| {
            Tile::all()
                .any(|to| piece.can_move(self, from, to) && !piece.exposes_king(self, from, to))
        })
    }

    /// In check with no safe move left. Stalemate is not reported here.
    pub fn is_player_in_checkmate(&self, player: Player) -> bool {
        self.is_player_in_check(player) && !self.has_safe_moves(player)
    }

    fn slot(&mut self, tile: Tile) -> &mut Option<Piece> {
        &mut self.squares[tile.rank() as usize][tile.file() as usize]
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

/// Plain-text diagram, rank 8 on top, `.` for empty tiles.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let c = self.squares[rank][file].map_or('.', Piece::fen_char);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  abcdefgh")
    }
}
