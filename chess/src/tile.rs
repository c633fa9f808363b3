//! Board coordinates.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the 64 squares, addressed by `(rank, file)`.
///
/// Rank 0 is White's back rank and file 0 is the a-file, so `(0, 0)` prints
/// as `a1` and `(7, 7)` as `h8`. Both coordinates are always in `0..8`; the
/// only way to build a `Tile` from raw numbers is [`Tile::new`], which rejects
/// anything outside the board. The default tile is `a1`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Tile {
    rank: u8,
    file: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TileError {
    #[error("tile ({rank}, {file}) is off the board")]
    OutOfRange { rank: i32, file: i32 },
    #[error("invalid square notation: {0:?}")]
    InvalidNotation(String),
}

impl Tile {
    pub fn new(rank: u8, file: u8) -> Result<Self, TileError> {
        if rank < 8 && file < 8 {
            Ok(Self { rank, file })
        } else {
            Err(TileError::OutOfRange {
                rank: rank.into(),
                file: file.into(),
            })
        }
    }

    /// Build a tile from a 0..64 index in scan order (`rank * 8 + file`).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < 64).then(|| Self {
            rank: (index / 8) as u8,
            file: (index % 8) as u8,
        })
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    pub fn file(self) -> u8 {
        self.file
    }

    pub fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// The tile `d_rank`/`d_file` steps away, if it is still on the board.
    pub fn offset(self, d_rank: i8, d_file: i8) -> Option<Self> {
        let rank = self.rank as i8 + d_rank;
        let file = self.file as i8 + d_file;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Self {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }

    /// All 64 tiles, rank-major then file.
    pub fn all() -> impl Iterator<Item = Tile> {
        (0..64).filter_map(Self::from_index)
    }

    pub fn file_char(self) -> char {
        (b'a' + self.file) as char
    }

    pub fn rank_char(self) -> char {
        (b'1' + self.rank) as char
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Tile {
    type Err = TileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TileError::InvalidNotation(s.to_string());
        let bytes = s.trim().as_bytes();
        let [file, rank] = bytes else {
            return Err(invalid());
        };
        let file = file.to_ascii_lowercase();
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(rank) {
            return Err(invalid());
        }
        Self::new(rank - b'1', file - b'a')
    }
}

impl TryFrom<String> for Tile {
    type Error = TileError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Tile> for String {
    fn from(tile: Tile) -> Self {
        tile.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> Tile {
        s.parse().unwrap()
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert!(Tile::new(7, 7).is_ok());
        assert_eq!(
            Tile::new(8, 0),
            Err(TileError::OutOfRange { rank: 8, file: 0 })
        );
        assert!(Tile::new(0, 8).is_err());
    }

    #[test]
    fn algebraic_display() {
        assert_eq!(Tile::new(0, 0).unwrap().to_string(), "a1");
        assert_eq!(Tile::new(1, 4).unwrap().to_string(), "e2");
        assert_eq!(Tile::new(7, 7).unwrap().to_string(), "h8");
    }

    #[test]
    fn parses_algebraic() {
        assert_eq!(t("e4"), Tile::new(3, 4).unwrap());
        assert_eq!(t("A8"), Tile::new(7, 0).unwrap());
        assert!("i1".parse::<Tile>().is_err());
        assert!("a9".parse::<Tile>().is_err());
        assert!("e".parse::<Tile>().is_err());
        assert!("e22".parse::<Tile>().is_err());
    }

    #[test]
    fn offset_stays_on_board() {
        assert_eq!(t("a1").offset(1, 2), Some(t("c2")));
        assert_eq!(t("a1").offset(-1, 0), None);
        assert_eq!(t("h8").offset(0, 1), None);
        assert_eq!(t("d4").offset(-3, 3), Some(t("g1")));
    }

    #[test]
    fn all_is_scan_order() {
        let tiles: Vec<Tile> = Tile::all().collect();
        assert_eq!(tiles.len(), 64);
        assert_eq!(tiles[0], t("a1"));
        assert_eq!(tiles[1], t("b1"));
        assert_eq!(tiles[8], t("a2"));
        assert_eq!(tiles[63], t("h8"));
        assert!(tiles.iter().enumerate().all(|(i, tile)| tile.index() == i));
    }

    #[test]
    fn serializes_as_notation() {
        let json = serde_json::to_string(&t("g7")).unwrap();
        assert_eq!(json, "\"g7\"");
        let back: Tile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t("g7"));
        assert!(serde_json::from_str::<Tile>("\"z0\"").is_err());
    }
}
