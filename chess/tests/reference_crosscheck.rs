//! Compares safe-move generation against cozy-chess on positions where the
//! rules the engine leaves out (castling, en passant, promotion) cannot occur
//! or are folded away.

use std::collections::BTreeSet;

use chess_rules::{format_fen, parse_fen, Board, Player, Tile};
use proptest::prelude::*;

fn to_tile(sq: cozy_chess::Square) -> Tile {
    Tile::new(sq.rank() as u8, sq.file() as u8).unwrap()
}

/// Legal from/to pairs according to cozy-chess. Promotions collapse to a
/// single pair. `None` if cozy-chess refuses the position.
fn reference_moves(fen: &str) -> Option<BTreeSet<(Tile, Tile)>> {
    let board: cozy_chess::Board = fen.parse().ok()?;
    let mut out = BTreeSet::new();
    board.generate_moves(|mvs| {
        for mv in mvs {
            out.insert((to_tile(mv.from), to_tile(mv.to)));
        }
        false
    });
    Some(out)
}

fn engine_moves(board: &Board, player: Player) -> BTreeSet<(Tile, Tile)> {
    board
        .pieces(player)
        .flat_map(|(from, piece)| {
            piece
                .safe_moves(board, from)
                .into_iter()
                .map(move |to| (from, to))
        })
        .collect()
}

fn assert_matches_reference(fen: &str) {
    let (board, turn) = parse_fen(fen).unwrap();
    let expected = reference_moves(fen).expect("reference rejected the position");
    let actual = engine_moves(&board, turn);
    assert_eq!(actual, expected, "{fen}");
}

#[test]
fn fixed_positions_match_reference() {
    for fen in [
        chess_rules::STARTING_FEN,
        "r1bqkbnr/pppp1ppp/2n5/1B2p3/4P3/5N2/PPPP1PPP/RNBQK2R b - - 0 3",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w - - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "4k3/8/8/8/1b6/8/8/R3K2N w - - 0 1",
        "4r2k/8/8/8/8/8/4B3/4K3 w - - 0 1",
        "6k1/5ppp/8/8/8/8/5PPP/3r2K1 w - - 0 1",
    ] {
        assert_matches_reference(fen);
    }
}

#[test]
fn checkmate_agrees_with_reference() {
    let fen = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w - - 0 3";
    let (board, turn) = parse_fen(fen).unwrap();
    let reference: cozy_chess::Board = fen.parse().unwrap();
    assert!(matches!(reference.status(), cozy_chess::GameStatus::Won));
    assert!(board.is_player_in_checkmate(turn));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn random_playouts_match_reference(choices in prop::collection::vec(any::<u16>(), 1..40)) {
        let mut board = Board::standard();
        let mut turn = Player::White;

        for choice in choices {
            let fen = format_fen(&board, turn);
            let Some(expected) = reference_moves(&fen) else {
                // e.g. a pawn parked on the last rank
                break;
            };
            let actual = engine_moves(&board, turn);
            prop_assert_eq!(&actual, &expected, "{}", fen);

            if actual.is_empty() {
                break;
            }
            let (from, to) = *actual.iter().nth(choice as usize % actual.len()).unwrap();

            let before = board;
            prop_assert!(!board.move_piece(from, from));
            prop_assert_eq!(board, before);

            prop_assert!(board.move_piece(from, to));
            prop_assert!(!board.is_player_in_check(turn));
            turn = turn.opposite();
        }
    }
}
