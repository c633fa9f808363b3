//! FEN encoding of the position: the grid plus the side to move.
//!
//! Castling, en passant and move clocks are not modelled, so their fields
//! are written as `- - 0 1` and ignored when reading.

use crate::board::Board;
use crate::piece::Piece;
use crate::tile::Tile;
use crate::types::{PieceKind, Player};

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

/// Parse the placement and side-to-move fields of a FEN string.
///
/// The position must be playable: one king per side, and the side that
/// just moved may not be left in check.
pub fn parse_fen(fen: &str) -> Result<(Board, Player), FenError> {
    let mut fields = fen.split_whitespace();
    let placement = fields.next().ok_or(FenError::InvalidFormat)?;
    let turn = match fields.next() {
        Some("w") | None => Player::White,
        Some("b") => Player::Black,
        Some(other) => return Err(FenError::InvalidSideToMove(other.to_string())),
    };

    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::InvalidBoardLayout);
    }

    let mut board = Board::empty();
    for (rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_idx as u8;
        let mut file = 0u8;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                if !(1..=8).contains(&skip) {
                    return Err(FenError::InvalidBoardLayout);
                }
                file += skip as u8;
            } else {
                let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPiece(c))?;
                let tile = Tile::new(rank, file).map_err(|_| FenError::InvalidBoardLayout)?;
                board.place(tile, piece);
                file += 1;
            }
            if file > 8 {
                return Err(FenError::InvalidBoardLayout);
            }
        }
        if file != 8 {
            return Err(FenError::InvalidBoardLayout);
        }
    }

    validate_position(&board, turn)?;
    Ok((board, turn))
}

fn validate_position(board: &Board, turn: Player) -> Result<(), FenError> {
    for player in [Player::White, Player::Black] {
        let kings = board
            .pieces(player)
            .filter(|(_, piece)| piece.kind == PieceKind::King)
            .count();
        if kings != 1 {
            return Err(FenError::KingCount { player, kings });
        }
    }
    if board.is_player_in_check(turn.opposite()) {
        return Err(FenError::WaitingSideInCheck(turn.opposite()));
    }
    Ok(())
}

/// Format the board and side to move as a full six-field FEN string.
pub fn format_fen(board: &Board, turn: Player) -> String {
    let mut placement = String::new();
    for rank in (0..8u8).rev() {
        let mut empty = 0;
        for tile in Tile::all().filter(|t| t.rank() == rank) {
            match board.piece_at(tile) {
                Some(piece) => {
                    if empty > 0 {
                        placement.push_str(&empty.to_string());
                        empty = 0;
                    }
                    placement.push(piece.fen_char());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            placement.push_str(&empty.to_string());
        }
        if rank > 0 {
            placement.push('/');
        }
    }

    let side = match turn {
        Player::White => 'w',
        Player::Black => 'b',
    };
    format!("{placement} {side} - - 0 1")
}

#[derive(Debug, thiserror::Error)]
pub enum FenError {
    #[error("Invalid FEN format")]
    InvalidFormat,
    #[error("Invalid board layout")]
    InvalidBoardLayout,
    #[error("Invalid piece character: {0}")]
    InvalidPiece(char),
    #[error("Invalid side to move: {0}")]
    InvalidSideToMove(String),
    #[error("{player} has {kings} kings, expected exactly one")]
    KingCount { player: Player, kings: usize },
    #[error("{0} is in check but it is not their move")]
    WaitingSideInCheck(Player),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_roundtrip() {
        let (board, turn) = parse_fen(STARTING_FEN).unwrap();
        assert_eq!(board, Board::standard());
        assert_eq!(turn, Player::White);
        assert_eq!(format_fen(&board, turn), STARTING_FEN);
    }

    #[test]
    fn accepts_standard_fen_with_castling_fields() {
        let (board, turn) =
            parse_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1").unwrap();
        assert_eq!(turn, Player::Black);
        assert_eq!(
            board.piece_at("e4".parse().unwrap()),
            Some(Piece::new(PieceKind::Pawn, Player::White))
        );
        assert!(!board.is_occupied("e2".parse().unwrap()));
    }

    #[test]
    fn placement_only_defaults_to_white() {
        let (board, turn) = parse_fen("4k3/8/8/8/8/8/8/4K3").unwrap();
        assert_eq!(turn, Player::White);
        assert_eq!(board.king_tile(Player::White), Some("e1".parse().unwrap()));
    }

    #[test]
    fn formats_black_to_move() {
        let mut board = Board::standard();
        assert!(board.move_piece("e2".parse().unwrap(), "e4".parse().unwrap()));
        assert_eq!(
            format_fen(&board, Player::Black),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b - - 0 1"
        );
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(parse_fen(""), Err(FenError::InvalidFormat)));
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8 w"),
            Err(FenError::InvalidBoardLayout)
        ));
        assert!(matches!(
            parse_fen("9/8/8/8/8/8/8/8 w"),
            Err(FenError::InvalidBoardLayout)
        ));
        assert!(matches!(
            parse_fen("7/8/8/8/8/8/8/8 w"),
            Err(FenError::InvalidBoardLayout)
        ));
        assert!(matches!(
            parse_fen("ppppppppp/8/8/8/8/8/8/8 w"),
            Err(FenError::InvalidBoardLayout)
        ));
        assert!(matches!(
            parse_fen("x7/8/8/8/8/8/8/8 w"),
            Err(FenError::InvalidPiece('x'))
        ));
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/8 x"),
            Err(FenError::InvalidSideToMove(_))
        ));
    }

    #[test]
    fn rejects_positions_without_one_king_each() {
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/R7 w"),
            Err(FenError::KingCount {
                player: Player::White,
                kings: 0
            })
        ));
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/4K3 w"),
            Err(FenError::KingCount {
                player: Player::Black,
                kings: 0
            })
        ));
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/K3K3 w"),
            Err(FenError::KingCount {
                player: Player::White,
                kings: 2
            })
        ));
    }

    #[test]
    fn rejects_side_not_to_move_in_check() {
        assert!(matches!(
            parse_fen("4k3/8/8/8/8/8/8/K3R3 w"),
            Err(FenError::WaitingSideInCheck(Player::Black))
        ));
        // Same placement with Black to move is an ordinary check.
        let (board, turn) = parse_fen("4k3/8/8/8/8/8/8/K3R3 b").unwrap();
        assert!(board.is_player_in_check(turn));
    }
}
