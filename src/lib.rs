//! PGN to FEN Library
//!
//! Replays the movetext of a chess game, given in PGN-style algebraic
//! notation, and reports the FEN record of the position reached after a
//! chosen move.
//!
//! ```
//! use pgn2fen::{fen_after, Color};
//!
//! let fen = fen_after("1. e4 c5 2. Nf3 d6", 2, Color::White).unwrap();
//! assert_eq!(fen, "rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2");
//! ```

pub mod board;
pub mod error;
pub mod fen;
pub mod pgn;
pub mod replay;

pub use board::{Color, GameState};
pub use error::{Error, Result};
pub use pgn::{tokenize, MoveToken};
pub use replay::{fen_after, position_after, Replay};
