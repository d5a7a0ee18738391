use std::fmt;

use crate::board::{Board, GameState, Square};

/// Serialize a game state as a six-field FEN record
pub fn encode(state: &GameState) -> String {
    let en_passant = state
        .en_passant_target
        .map(Square::to_algebraic)
        .unwrap_or_else(|| "-".to_string());

    format!(
        "{} {} {} {} {} {}",
        placement(&state.board),
        state.side_to_move.fen_char(),
        state.castling_rights.to_fen(),
        en_passant,
        state.halfmove_clock,
        state.fullmove_number()
    )
}

/// Piece placement field: rank 8 down to rank 1, empty runs as digits
pub fn placement(board: &Board) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match board.get(Square(rank * 8 + file)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.to_fen_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", encode(self))
    }
}
