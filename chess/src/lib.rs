//! Rules engine for two-player chess: board model, per-piece movement,
//! self-check filtering and check/checkmate detection.
//!
//! Castling, en passant and promotion are not part of the rules modelled here.

pub mod board;
pub mod fen;
pub mod game;
pub mod moves;
pub mod piece;
pub mod tile;
pub mod types;

pub use board::Board;
pub use fen::{format_fen, parse_fen, FenError, STARTING_FEN};
pub use game::{Game, GameError, GameStatus, HistoryEntry};
pub use moves::{Move, MoveError};
pub use piece::Piece;
pub use tile::{Tile, TileError};
pub use types::{PieceKind, Player};
