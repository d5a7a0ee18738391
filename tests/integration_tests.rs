use pgn2fen::board::{Color, PieceKind, Square};
use pgn2fen::pgn::MoveClass;
use pgn2fen::{fen, fen_after, position_after, Error, Replay};

// Integration tests for replaying movetext into FEN records
// The reference game is Morphy's Opera Game, stored with tags, comments,
// a variation and annotation glyphs under test/data.

const SICILIAN: &str = "1. e4 c5 2. Nf3 d6";

fn opera_game() -> String {
    std::fs::read_to_string("test/data/opera_game.pgn")
        .expect("Failed to read opera_game.pgn test file")
}

#[test]
fn test_position_after_white_move() {
    assert_eq!(
        fen_after(SICILIAN, 2, Color::White).unwrap(),
        "rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"
    );
}

#[test]
fn test_position_after_black_move() {
    assert_eq!(
        fen_after(SICILIAN, 2, Color::Black).unwrap(),
        "rnbqkbnr/pp2pppp/3p4/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 0 3"
    );
}

#[test]
fn test_missing_move_is_reported() {
    assert_eq!(
        fen_after(SICILIAN, 3, Color::White),
        Err(Error::MoveNotFound { move_number: 3, side: Color::White })
    );
    assert_eq!(
        fen_after("1. e4", 1, Color::Black),
        Err(Error::MoveNotFound { move_number: 1, side: Color::Black })
    );
    assert_eq!(
        fen_after("", 1, Color::White),
        Err(Error::MoveNotFound { move_number: 1, side: Color::White })
    );
}

#[test]
fn test_move_zero_is_rejected() {
    assert_eq!(fen_after(SICILIAN, 0, Color::White), Err(Error::InvalidMoveNumber(0)));
}

#[test]
fn test_kingside_castling() {
    let movetext = "1. e4 e5 2. Nf3 Nc6 3. Bc4 Bc5 4. O-O Nf6";
    let state = position_after(movetext, 4, Color::White).unwrap();

    let g1 = Square::from_algebraic("g1").unwrap();
    let f1 = Square::from_algebraic("f1").unwrap();
    assert_eq!(state.board.get(g1).map(|p| p.kind), Some(PieceKind::King));
    assert_eq!(state.board.get(f1).map(|p| p.kind), Some(PieceKind::Rook));
    assert!(!state.castling_rights.white_kingside);
    assert!(!state.castling_rights.white_queenside);

    assert_eq!(
        fen::encode(&state),
        "r1bqk1nr/pppp1ppp/2n5/2b1p3/2B1P3/5N2/PPPP1PPP/RNBQ1RK1 b kq - 5 4"
    );
}

#[test]
fn test_zero_castling_matches_letter_castling() {
    let zeros = "1. e4 e5 2. Nf3 Nc6 3. Bc4 Bc5 4. 0-0 Nf6";
    let letters = "1. e4 e5 2. Nf3 Nc6 3. Bc4 Bc5 4. O-O Nf6";
    assert_eq!(
        fen_after(zeros, 4, Color::Black).unwrap(),
        fen_after(letters, 4, Color::Black).unwrap()
    );
}

#[test]
fn test_castling_through_pieces_aborts() {
    assert_eq!(
        fen_after("1. O-O", 1, Color::White),
        Err(Error::AmbiguousOrigin { token: "O-O".to_string(), candidates: 0 })
    );
}

#[test]
fn test_en_passant_capture() {
    let movetext = "1. e4 a6 2. e5 d5 3. exd6";

    assert_eq!(
        fen_after(movetext, 2, Color::Black).unwrap(),
        "rnbqkbnr/1pp1pppp/p7/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3"
    );

    let state = position_after(movetext, 3, Color::White).unwrap();
    assert_eq!(state.board.get(Square::from_algebraic("d5").unwrap()), None);
    assert_eq!(state.halfmove_clock, 0);
    assert_eq!(
        fen::encode(&state),
        "rnbqkbnr/1pp1pppp/p2P4/8/8/8/PPPP1PPP/RNBQKBNR b KQkq - 0 3"
    );
}

#[test]
fn test_promotion_capturing_rook() {
    let movetext = "1. h4 g5 2. hxg5 h6 3. gxh6 Nf6 4. hxg7 Ne4 5. gxh8=Q";
    assert_eq!(
        fen_after(movetext, 5, Color::White).unwrap(),
        "rnbqkb1Q/pppppp2/8/8/4n3/8/PPPPPPP1/RNBQKBNR b KQq - 0 5"
    );
}

#[test]
fn test_opera_game_positions() {
    let pgn = opera_game();

    assert_eq!(
        fen_after(&pgn, 1, Color::Black).unwrap(),
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2"
    );
    assert_eq!(
        fen_after(&pgn, 12, Color::White).unwrap(),
        "r3kb1r/p2nqppp/5n2/1B2p1B1/4P3/1Q6/PPP2PPP/2KR3R b kq - 2 12"
    );
    assert_eq!(
        fen_after(&pgn, 17, Color::White).unwrap(),
        "1n1Rkb1r/p4ppp/4q3/4p1B1/4P3/8/PPP2PPP/2K5 b k - 1 17"
    );
}

#[test]
fn test_opera_game_ends_at_result() {
    let pgn = opera_game();
    assert_eq!(
        fen_after(&pgn, 17, Color::Black),
        Err(Error::MoveNotFound { move_number: 17, side: Color::Black })
    );
}

#[test]
fn test_malformed_token_aborts() {
    match fen_after("1. e4 e5 2. Nf9 Nc6", 2, Color::White) {
        Err(Error::MalformedToken(_)) => {}
        other => panic!("expected MalformedToken, got {:?}", other),
    }
    // a stray coordinate with no piece letter in front of it
    assert_eq!(
        fen_after("1. e4 e5 2. 33 Nc6", 2, Color::White),
        Err(Error::MalformedToken("33".to_string()))
    );
}

#[test]
fn test_unresolvable_origin_aborts() {
    // no white knight can reach e5 on move one
    match fen_after("1. Ne5", 1, Color::White) {
        Err(Error::AmbiguousOrigin { token, candidates }) => {
            assert_eq!(token, "Ne5");
            assert_eq!(candidates, 0);
        }
        other => panic!("expected AmbiguousOrigin, got {:?}", other),
    }
}

/// Walk the whole Opera Game one ply at a time and check the bookkeeping
/// invariants after every move.
#[test]
fn test_state_invariants_across_a_game() {
    let pgn = opera_game();
    let mut replay = Replay::new(&pgn);
    let mut previous = replay.state().clone();

    while replay.step().expect("Opera Game should replay cleanly") {
        let state = replay.state();
        let token = replay.moves().last().unwrap();

        // exactly one ply per applied token, sides alternate
        assert_eq!(state.ply, previous.ply + 1);
        assert_eq!(state.side_to_move, previous.side_to_move.opposite());

        // halfmove clock resets on pawn moves and captures, otherwise counts up
        let resets = token.class() == MoveClass::Pawn || token.is_capture();
        let expected = if resets { 0 } else { previous.halfmove_clock + 1 };
        assert_eq!(state.halfmove_clock, expected, "halfmove clock after {}", token);

        // castling rights never come back
        assert!(
            state.castling_rights.is_subset_of(&previous.castling_rights),
            "castling rights grew after {}",
            token
        );

        // en passant target only right after a double push, on rank 3 or 6
        if let Some(target) = state.en_passant_target {
            assert_eq!(token.class(), MoveClass::Pawn);
            assert!(!token.is_capture());
            assert!(target.rank() == 2 || target.rank() == 5);
        }

        // never more than the 32 starting pieces
        assert!(state.board.pieces().count() <= 32);

        previous = state.clone();
    }

    assert_eq!(previous.ply, 33);
}

#[test]
fn test_placement_round_trip() {
    let state = position_after(&opera_game(), 15, Color::Black).unwrap();
    let field = fen::placement(&state.board);

    // Decode the placement field back into occupied squares
    let mut decoded = Vec::new();
    for (row, rank_text) in field.split('/').enumerate() {
        let rank = 7 - row as u8;
        let mut file = 0u8;
        for c in rank_text.chars() {
            if let Some(run) = c.to_digit(10) {
                file += run as u8;
            } else {
                decoded.push((Square::new(file, rank).unwrap(), c));
                file += 1;
            }
        }
    }
    decoded.sort_by_key(|(square, _)| square.0);

    let live: Vec<(Square, char)> = state
        .board
        .pieces()
        .map(|(square, piece)| (square, piece.to_fen_char()))
        .collect();
    assert_eq!(decoded, live);
}
