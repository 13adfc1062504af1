// SPDX-License-Identifier: MIT OR Apache-2.0

use chessboard_core::{Color, Coord, GameError, GameState, PieceKind, BACK_RANK};

fn sq(row: u8, col: u8) -> Coord {
    Coord::new(row, col).unwrap()
}

fn populated() -> GameState {
    let mut game = GameState::new();
    game.populate_board().expect("setup on an empty board");
    game
}

#[test]
fn fresh_game_has_no_pieces_and_white_to_move() {
    let game = GameState::new();
    assert_eq!(game.turn(), Color::White);
    assert!(game.board().is_empty());
    for coord in Coord::all() {
        assert!(game.piece_at(coord).is_none(), "{} should be empty", coord);
    }
}

#[test]
fn setup_places_thirty_two_pieces() {
    let game = populated();
    assert_eq!(game.board().occupied_count(), 32);
    assert_eq!(game.board().count_for(Color::White), 16);
    assert_eq!(game.board().count_for(Color::Black), 16);
    assert_eq!(game.turn(), Color::White);
}

#[test]
fn setup_matches_starting_table() {
    let game = populated();

    for col in 0..8u8 {
        let kind = BACK_RANK[col as usize];

        let black = game.piece_at(sq(0, col)).unwrap();
        assert_eq!((black.color(), black.kind()), (Color::Black, kind));

        let white = game.piece_at(sq(7, col)).unwrap();
        assert_eq!((white.color(), white.kind()), (Color::White, kind));

        let black_pawn = game.piece_at(sq(1, col)).unwrap();
        assert_eq!((black_pawn.color(), black_pawn.kind()), (Color::Black, PieceKind::Pawn));

        let white_pawn = game.piece_at(sq(6, col)).unwrap();
        assert_eq!((white_pawn.color(), white_pawn.kind()), (Color::White, PieceKind::Pawn));
    }

    for row in 2..6u8 {
        for col in 0..8u8 {
            assert!(game.piece_at(sq(row, col)).is_none());
        }
    }
}

#[test]
fn setup_spot_checks() {
    let game = populated();

    let king = game.piece_at(sq(0, 4)).unwrap();
    assert_eq!(king.color(), Color::Black);
    assert_eq!(king.kind(), PieceKind::King);

    let queen = game.piece_at(sq(7, 3)).unwrap();
    assert_eq!(queen.color(), Color::White);
    assert_eq!(queen.kind(), PieceKind::Queen);

    // (0,6) and (0,1) are both knights; neither overwrites the other
    assert_eq!(game.piece_at(sq(0, 1)).unwrap().kind(), PieceKind::Knight);
    assert_eq!(game.piece_at(sq(0, 6)).unwrap().kind(), PieceKind::Knight);

    let white_pawns = game
        .board()
        .pieces()
        .filter(|p| p.kind() == PieceKind::Pawn && p.color() == Color::White)
        .filter(|p| p.location().row() == 6)
        .count();
    assert_eq!(white_pawns, 8);
}

#[test]
fn every_piece_knows_its_square() {
    let game = populated();
    assert!(game.board().is_consistent());
    for coord in Coord::all() {
        if let Some(piece) = game.piece_at(coord) {
            assert_eq!(piece.location(), coord);
        }
    }
}

#[test]
fn second_setup_is_rejected() {
    let mut game = populated();
    let err = game.populate_board().unwrap_err();
    assert!(matches!(err, GameError::InvalidState(_)));
    assert_eq!(game.board().occupied_count(), 32);
    assert!(game.board().is_consistent());
}

#[test]
fn setup_works_again_after_clearing() {
    let mut game = populated();
    game.board_mut().clear();
    game.populate_board().unwrap();
    assert_eq!(game.board().occupied_count(), 32);
}

#[test]
fn display_strings_name_color_kind_and_square() {
    let game = populated();
    for piece in game.board().pieces() {
        let text = piece.to_string();
        assert!(text.contains(&piece.color().to_string()));
        assert!(text.contains(&piece.kind().to_string()));
        assert!(text.contains(&piece.location().to_string()));
    }
    assert_eq!(game.piece_at(sq(7, 4)).unwrap().to_string(), "White King at (7,4)");
}
