//! Game state and move application.
//!
//! `GameState` replays SAN tokens without a move generator. Every origin
//! square is recovered from board geometry alone:
//!
//! - pawns: one or two squares straight behind the destination, or one rank
//!   behind on the file named by a capture
//! - pieces: the movement tables in `geometry`, filtered by the token's
//!   file/rank hints
//! - castles: fixed king and rook squares on the mover's back rank
//!
//! Legality is never checked. The one concession is pins: when two pieces of
//! the same kind can reach a square, SAN leaves out the hint if one of them is
//! pinned, so a candidate whose move would expose its own king is dropped.

use log::debug;

use super::castling::CastlingRights;
use super::geometry;
use super::grid::Board;
use super::square::{Color, Piece, PieceKind, Square};
use crate::error::{Error, Result};
use crate::pgn::san::{MoveClass, MoveToken};

/// Complete chess position state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,

    /// Whose turn to move
    pub side_to_move: Color,

    /// Castling availability (updated as king/rooks move or rooks are captured)
    pub castling_rights: CastlingRights,

    /// Square skipped by a pawn double push, live for one ply only
    pub en_passant_target: Option<Square>,

    /// Plies since the last pawn move or capture
    pub halfmove_clock: u32,

    /// Plies applied since the starting position
    pub ply: u32,
}

impl GameState {
    pub fn starting_position() -> Self {
        GameState {
            board: Board::starting_position(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::new(),
            en_passant_target: None,
            halfmove_clock: 0,
            ply: 0,
        }
    }

    /// State for an arbitrary board. Castling rights are held wherever king
    /// and rook still stand on their original squares.
    pub fn with_board(board: Board, side_to_move: Color) -> Self {
        let mut castling_rights = CastlingRights::none();
        for color in [Color::White, Color::Black] {
            let home = color.home_rank();
            let on = |file: u8, kind: PieceKind| {
                board.get(Square(home * 8 + file)) == Some(Piece::new(kind, color))
            };
            if on(4, PieceKind::King) {
                match color {
                    Color::White => {
                        castling_rights.white_kingside = on(7, PieceKind::Rook);
                        castling_rights.white_queenside = on(0, PieceKind::Rook);
                    }
                    Color::Black => {
                        castling_rights.black_kingside = on(7, PieceKind::Rook);
                        castling_rights.black_queenside = on(0, PieceKind::Rook);
                    }
                }
            }
        }

        GameState {
            board,
            side_to_move,
            castling_rights,
            en_passant_target: None,
            halfmove_clock: 0,
            ply: 0,
        }
    }

    /// FEN fullmove number: starts at 1 and increments after Black moves
    pub fn fullmove_number(&self) -> u32 {
        1 + self.ply / 2
    }

    /// Apply a move to the position, advancing exactly one ply.
    ///
    /// The state is left untouched when an error is returned.
    pub fn apply_move(&mut self, token: &MoveToken) -> Result<()> {
        let mover = self.side_to_move;

        let (from, to) = match token.class() {
            MoveClass::CastleKingside => self.castle(token, mover, true)?,
            MoveClass::CastleQueenside => self.castle(token, mover, false)?,
            MoveClass::Pawn => self.pawn_move(token, mover)?,
            MoveClass::Rook
            | MoveClass::Knight
            | MoveClass::Bishop
            | MoveClass::Queen
            | MoveClass::King => self.piece_move(token, mover)?,
        };

        self.side_to_move = mover.opposite();
        self.ply += 1;

        debug!(
            "ply {}: {} {} ({}-{}), halfmove clock {}",
            self.ply, mover, token, from, to, self.halfmove_clock
        );
        Ok(())
    }

    fn pawn_move(&mut self, token: &MoveToken, mover: Color) -> Result<(Square, Square)> {
        let to = destination(token)?;
        let pawn = Piece::new(PieceKind::Pawn, mover);
        let step = mover.pawn_step();
        let behind = to.offset(0, -step).ok_or_else(|| ambiguous(token, 0))?;

        let (from, double_push_target) = if let Some(file) = token.from_file() {
            (Square::new(file, behind.rank()).ok_or_else(|| ambiguous(token, 0))?, None)
        } else if self.board.get(behind) == Some(pawn) {
            (behind, None)
        } else if to.rank() == mover.double_push_rank() && !self.board.is_occupied(behind) {
            let start = behind.offset(0, -step).ok_or_else(|| ambiguous(token, 0))?;
            (start, Some(behind))
        } else {
            return Err(ambiguous(token, 0));
        };

        if self.board.get(from) != Some(pawn) {
            return Err(ambiguous(token, 0));
        }

        // En passant: the passed pawn stands beside the capturing pawn
        if token.is_capture() && self.en_passant_target == Some(to) && !self.board.is_occupied(to) {
            if let Some(passed) = Square::new(to.file(), from.rank()) {
                self.board.take(passed);
            }
        }

        self.revoke_for_captured_rook(to, mover);
        self.board.take(from);
        let landing = match token.promotion() {
            Some(kind) => Piece::new(kind, mover),
            None => pawn,
        };
        self.board.place(to, landing);

        self.en_passant_target = double_push_target;
        self.halfmove_clock = 0;
        Ok((from, to))
    }

    fn piece_move(&mut self, token: &MoveToken, mover: Color) -> Result<(Square, Square)> {
        let kind = token
            .class()
            .piece_kind()
            .ok_or_else(|| Error::MalformedToken(token.raw().to_string()))?;
        let piece = Piece::new(kind, mover);
        let to = destination(token)?;
        let from = self.resolve_origin(token, piece, to)?;

        self.revoke_for_captured_rook(to, mover);
        self.board.take(from);
        let captured = self.board.place(to, piece).is_some();

        match kind {
            PieceKind::King => self.castling_rights.disable_castling(mover, None),
            PieceKind::Rook => self.castling_rights.disable_for_corner(mover, from),
            _ => {}
        }

        self.en_passant_target = None;
        if captured || token.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        Ok((from, to))
    }

    fn castle(
        &mut self,
        token: &MoveToken,
        mover: Color,
        kingside: bool,
    ) -> Result<(Square, Square)> {
        let home = mover.home_rank() * 8;
        let (king_to, rook_from, rook_to) = if kingside { (6, 7, 5) } else { (2, 0, 3) };
        let king = Piece::new(PieceKind::King, mover);
        let rook = Piece::new(PieceKind::Rook, mover);
        let king_from = Square(home + 4);
        let king_to = Square(home + king_to);
        let rook_from = Square(home + rook_from);

        // King and rook on their original squares, nothing between them
        let mut between = if kingside { 5..7 } else { 1..4 };
        if self.board.get(king_from) != Some(king)
            || self.board.get(rook_from) != Some(rook)
            || between.any(|file| self.board.is_occupied(Square(home + file)))
        {
            return Err(ambiguous(token, 0));
        }

        self.board.take(king_from);
        self.board.take(rook_from);
        self.board.place(king_to, king);
        self.board.place(Square(home + rook_to), rook);

        self.castling_rights.disable_castling(mover, None);
        self.en_passant_target = None;
        self.halfmove_clock += 1;
        Ok((king_from, king_to))
    }

    /// Find the single square the moving piece comes from
    fn resolve_origin(&self, token: &MoveToken, piece: Piece, to: Square) -> Result<Square> {
        if let Some(origin) = token.full_origin() {
            return if self.board.get(origin) == Some(piece) {
                Ok(origin)
            } else {
                Err(ambiguous(token, 0))
            };
        }

        let candidates: Vec<Square> = geometry::origins(&self.board, piece, to)
            .into_iter()
            .filter(|square| token.from_file().map_or(true, |file| square.file() == file))
            .filter(|square| token.from_rank().map_or(true, |rank| square.rank() == rank))
            .collect();

        match candidates.as_slice() {
            [origin] => Ok(*origin),
            [] => Err(ambiguous(token, 0)),
            _ => {
                let unpinned: Vec<Square> = candidates
                    .iter()
                    .copied()
                    .filter(|&from| !self.exposes_king(from, to, piece))
                    .collect();
                match unpinned.as_slice() {
                    [origin] => {
                        debug!("{}: pin leaves {} as the only origin", token, origin);
                        Ok(*origin)
                    }
                    _ => Err(ambiguous(token, candidates.len())),
                }
            }
        }
    }

    /// Would moving `piece` from `from` to `to` leave its own king attacked?
    fn exposes_king(&self, from: Square, to: Square, piece: Piece) -> bool {
        let mut board = self.board.clone();
        board.take(from);
        board.place(to, piece);
        board
            .find_king(piece.color)
            .is_some_and(|king| geometry::is_square_attacked(&board, king, piece.color.opposite()))
    }

    /// Captured rook disables opponent castling on that wing
    fn revoke_for_captured_rook(&mut self, to: Square, mover: Color) {
        let opponent = mover.opposite();
        if self.board.get(to) == Some(Piece::new(PieceKind::Rook, opponent)) {
            self.castling_rights.disable_for_corner(opponent, to);
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::starting_position()
    }
}

fn destination(token: &MoveToken) -> Result<Square> {
    token
        .destination()
        .ok_or_else(|| Error::MalformedToken(token.raw().to_string()))
}

fn ambiguous(token: &MoveToken, candidates: usize) -> Error {
    Error::AmbiguousOrigin {
        token: token.raw().to_string(),
        candidates,
    }
}
