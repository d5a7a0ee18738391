pub mod castling;
pub mod geometry;
pub mod grid;
pub mod position;
pub mod square;

pub use castling::CastlingRights;
pub use grid::Board;
pub use position::GameState;
pub use square::{Color, Piece, PieceKind, Square};
