use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::tile::{Tile, TileError};

/// An attempted move between two tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Tile,
    pub to: Tile,
}

impl Move {
    pub fn new(from: Tile, to: Tile) -> Self {
        Self { from, to }
    }
}

/// Coordinate notation, e.g. `e2e4`.
impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = TileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 4 || !s.is_ascii() {
            return Err(TileError::InvalidNotation(s.to_string()));
        }
        Ok(Self {
            from: s[..2].parse()?,
            to: s[2..].parse()?,
        })
    }
}

/// Why [`crate::Board::try_move`] refused a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("no piece on {0}")]
    EmptySource(Tile),
    #[error("illegal move {from}{to}")]
    IllegalMove { from: Tile, to: Tile },
}
