//! Piece movement geometry.
//!
//! Each piece kind is described by a table of direction vectors, either
//! sliding (repeat the step until blocked) or leaping (one step only).
//! Origin search runs these tables *backwards* from the destination square:
//! a piece can reach the destination exactly when the scan from the
//! destination along the same vectors hits it first.
//!
//! Scan order is fixed by the tables below, nearer squares before farther
//! ones along each line, so every search is deterministic.

use super::grid::Board;
use super::square::{Color, Piece, PieceKind, Square};

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (1, 0),
    (0, -1),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, -1),
    (-1, 1),
];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub const KING_OFFSETS: [(i8, i8); 8] = QUEEN_DIRECTIONS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Sliding(&'static [(i8, i8)]),
    Leaping(&'static [(i8, i8)]),
}

impl Movement {
    /// Movement table for a piece kind. Pawns move asymmetrically and have none.
    pub fn of(kind: PieceKind) -> Option<Movement> {
        match kind {
            PieceKind::Rook => Some(Movement::Sliding(&ROOK_DIRECTIONS)),
            PieceKind::Bishop => Some(Movement::Sliding(&BISHOP_DIRECTIONS)),
            PieceKind::Queen => Some(Movement::Sliding(&QUEEN_DIRECTIONS)),
            PieceKind::Knight => Some(Movement::Leaping(&KNIGHT_OFFSETS)),
            PieceKind::King => Some(Movement::Leaping(&KING_OFFSETS)),
            PieceKind::Pawn => None,
        }
    }

    /// Occupied squares from which a piece with this movement would reach
    /// `target`: the first blocker on each sliding line, or each occupied
    /// leap square.
    pub fn reaching(self, board: &Board, target: Square) -> Vec<Square> {
        let mut found = Vec::new();
        match self {
            Movement::Sliding(directions) => {
                for &(df, dr) in directions {
                    let mut cursor = target.offset(df, dr);
                    while let Some(square) = cursor {
                        if board.is_occupied(square) {
                            found.push(square);
                            break;
                        }
                        cursor = square.offset(df, dr);
                    }
                }
            }
            Movement::Leaping(offsets) => {
                for &(df, dr) in offsets {
                    if let Some(square) = target.offset(df, dr) {
                        if board.is_occupied(square) {
                            found.push(square);
                        }
                    }
                }
            }
        }
        found
    }
}

/// Squares holding `piece` that could move to `target` in one step of its
/// own geometry, in scan order.
pub fn origins(board: &Board, piece: Piece, target: Square) -> Vec<Square> {
    let Some(movement) = Movement::of(piece.kind) else {
        return Vec::new();
    };
    movement
        .reaching(board, target)
        .into_iter()
        .filter(|&square| board.get(square) == Some(piece))
        .collect()
}

/// Check if a square is attacked by the specified color
pub fn is_square_attacked(board: &Board, square: Square, by_color: Color) -> bool {
    let sliders_and_leapers = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::King,
    ];
    if sliders_and_leapers
        .iter()
        .any(|&kind| !origins(board, Piece::new(kind, by_color), square).is_empty())
    {
        return true;
    }

    // Pawns attack diagonally forward, so look diagonally backward from the square
    let pawn = Piece::new(PieceKind::Pawn, by_color);
    [-1, 1].iter().any(|&df| {
        square
            .offset(df, -by_color.pawn_step())
            .is_some_and(|from| board.get(from) == Some(pawn))
    })
}
