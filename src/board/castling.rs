use super::square::{Color, Square};

/// Castling rights tracking. Rights are only ever revoked, never granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    pub fn new() -> Self {
        CastlingRights {
            white_kingside: true,
            white_queenside: true,
            black_kingside: true,
            black_queenside: true,
        }
    }

    pub fn none() -> Self {
        CastlingRights {
            white_kingside: false,
            white_queenside: false,
            black_kingside: false,
            black_queenside: false,
        }
    }

    pub fn can_castle(&self, color: Color, kingside: bool) -> bool {
        match (color, kingside) {
            (Color::White, true) => self.white_kingside,
            (Color::White, false) => self.white_queenside,
            (Color::Black, true) => self.black_kingside,
            (Color::Black, false) => self.black_queenside,
        }
    }

    /// `kingside: None` revokes both wings
    pub fn disable_castling(&mut self, color: Color, kingside: Option<bool>) {
        match (color, kingside) {
            (Color::White, Some(true)) => self.white_kingside = false,
            (Color::White, Some(false)) => self.white_queenside = false,
            (Color::White, None) => {
                self.white_kingside = false;
                self.white_queenside = false;
            }
            (Color::Black, Some(true)) => self.black_kingside = false,
            (Color::Black, Some(false)) => self.black_queenside = false,
            (Color::Black, None) => {
                self.black_kingside = false;
                self.black_queenside = false;
            }
        }
    }

    /// Revoke the right tied to a rook's original corner, if `square` is one
    pub fn disable_for_corner(&mut self, color: Color, square: Square) {
        if square.rank() != color.home_rank() {
            return;
        }
        match square.file() {
            0 => self.disable_castling(color, Some(false)),
            7 => self.disable_castling(color, Some(true)),
            _ => {}
        }
    }

    /// True when every right held here is also held by `earlier`
    pub fn is_subset_of(&self, earlier: &CastlingRights) -> bool {
        (!self.white_kingside || earlier.white_kingside)
            && (!self.white_queenside || earlier.white_queenside)
            && (!self.black_kingside || earlier.black_kingside)
            && (!self.black_queenside || earlier.black_queenside)
    }

    /// FEN castling field: `KQkq` order, `-` when nothing is left
    pub fn to_fen(&self) -> String {
        let field: String = [
            (self.white_kingside, 'K'),
            (self.white_queenside, 'Q'),
            (self.black_kingside, 'k'),
            (self.black_queenside, 'q'),
        ]
        .iter()
        .filter(|(held, _)| *held)
        .map(|(_, letter)| *letter)
        .collect();

        if field.is_empty() {
            "-".to_string()
        } else {
            field
        }
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::new()
    }
}
