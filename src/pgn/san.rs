//! SAN move tokens.
//!
//! A `MoveToken` is the parsed form of one move as written in the movetext
//! (`Nf3`, `exd5`, `e8=Q`, `Rad1`, `Qf5g4`, `O-O-O`). Parsing never edits the
//! raw text: capture markers, hints and promotion letters are read off into
//! fields and the original string is kept verbatim for error messages.

use std::fmt;
use std::str::FromStr;

use crate::board::square::{file_index, rank_index, PieceKind, Square};
use crate::error::{Error, Result};

/// Closed set of move classes, keyed by the token's leading character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveClass {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
    CastleKingside,
    CastleQueenside,
}

impl MoveClass {
    /// Kind of the moving piece; castles move two pieces and have none
    pub fn piece_kind(self) -> Option<PieceKind> {
        match self {
            MoveClass::Pawn => Some(PieceKind::Pawn),
            MoveClass::Rook => Some(PieceKind::Rook),
            MoveClass::Knight => Some(PieceKind::Knight),
            MoveClass::Bishop => Some(PieceKind::Bishop),
            MoveClass::Queen => Some(PieceKind::Queen),
            MoveClass::King => Some(PieceKind::King),
            MoveClass::CastleKingside | MoveClass::CastleQueenside => None,
        }
    }

    fn from_piece_letter(letter: char) -> Option<MoveClass> {
        match PieceKind::from_san_letter(letter)? {
            PieceKind::Rook => Some(MoveClass::Rook),
            PieceKind::Knight => Some(MoveClass::Knight),
            PieceKind::Bishop => Some(MoveClass::Bishop),
            PieceKind::Queen => Some(MoveClass::Queen),
            PieceKind::King => Some(MoveClass::King),
            PieceKind::Pawn => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveToken {
    raw: String,
    class: MoveClass,
    destination: Option<Square>,
    capture: bool,
    promotion: Option<PieceKind>,
    from_file: Option<u8>,
    from_rank: Option<u8>,
}

impl MoveToken {
    /// The token exactly as it appeared in the movetext
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn class(&self) -> MoveClass {
        self.class
    }

    /// Destination square; `None` only for castles
    pub fn destination(&self) -> Option<Square> {
        self.destination
    }

    pub fn is_capture(&self) -> bool {
        self.capture
    }

    pub fn promotion(&self) -> Option<PieceKind> {
        self.promotion
    }

    /// Origin file hint (`Nbd7`, or the capturing file of a pawn capture)
    pub fn from_file(&self) -> Option<u8> {
        self.from_file
    }

    /// Origin rank hint (`R1a3`)
    pub fn from_rank(&self) -> Option<u8> {
        self.from_rank
    }

    /// Origin square when the token spells it out in full (`Qf5g4`)
    pub fn full_origin(&self) -> Option<Square> {
        Square::new(self.from_file?, self.from_rank?)
    }

    fn new(raw: &str, class: MoveClass) -> Self {
        MoveToken {
            raw: raw.to_string(),
            class,
            destination: None,
            capture: false,
            promotion: None,
            from_file: None,
            from_rank: None,
        }
    }
}

impl FromStr for MoveToken {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        // Check and annotation suffixes carry no position information
        let cleaned: Vec<char> = raw
            .chars()
            .filter(|c| !matches!(c, '+' | '#' | '!' | '?'))
            .collect();

        match cleaned.first() {
            Some('O' | '0') => parse_castle(raw, &cleaned),
            Some('a'..='h') => parse_pawn(raw, &cleaned),
            Some(&letter) => match MoveClass::from_piece_letter(letter) {
                Some(class) => parse_piece(raw, class, &cleaned[1..]),
                None => Err(malformed(raw)),
            },
            None => Err(malformed(raw)),
        }
    }
}

impl fmt::Display for MoveToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

fn malformed(raw: &str) -> Error {
    Error::MalformedToken(raw.to_string())
}

fn parse_castle(raw: &str, cleaned: &[char]) -> Result<MoveToken> {
    let class = match cleaned {
        ['O', '-', 'O'] | ['0', '-', '0'] => MoveClass::CastleKingside,
        ['O', '-', 'O', '-', 'O'] | ['0', '-', '0', '-', '0'] => MoveClass::CastleQueenside,
        _ => return Err(malformed(raw)),
    };
    Ok(MoveToken::new(raw, class))
}

fn parse_pawn(raw: &str, cleaned: &[char]) -> Result<MoveToken> {
    let mut token = MoveToken::new(raw, MoveClass::Pawn);

    // Split off the promotion piece, with or without '='
    let body = match cleaned {
        [body @ .., '=', letter] | [body @ .., letter]
            if body.len() >= 2 && letter.is_ascii_uppercase() =>
        {
            let promoted = match PieceKind::from_san_letter(*letter) {
                Some(PieceKind::King) | None => return Err(malformed(raw)),
                promoted => promoted,
            };
            token.promotion = promoted;
            body
        }
        _ => cleaned,
    };

    let (file, rank) = match body {
        [file, rank] => (*file, *rank),
        [from, 'x', file, rank] => {
            token.capture = true;
            token.from_file = Some(file_index(*from).ok_or_else(|| malformed(raw))?);
            (*file, *rank)
        }
        _ => return Err(malformed(raw)),
    };

    let destination = file_index(file)
        .zip(rank_index(rank))
        .and_then(|(f, r)| Square::new(f, r))
        .ok_or_else(|| malformed(raw))?;

    let last_rank = destination.rank() == 0 || destination.rank() == 7;
    if token.promotion.is_some() != last_rank {
        return Err(malformed(raw));
    }

    token.destination = Some(destination);
    Ok(token)
}

fn parse_piece(raw: &str, class: MoveClass, rest: &[char]) -> Result<MoveToken> {
    let mut token = MoveToken::new(raw, class);
    token.capture = rest.contains(&'x');

    // Geometry only: drop capture and long-notation separators
    let geometry: Vec<char> = rest.iter().copied().filter(|&c| c != 'x' && c != '-').collect();
    if geometry.len() < 2 || geometry.len() > 4 {
        return Err(malformed(raw));
    }

    let (hints, target) = geometry.split_at(geometry.len() - 2);
    let destination = file_index(target[0])
        .zip(rank_index(target[1]))
        .and_then(|(f, r)| Square::new(f, r))
        .ok_or_else(|| malformed(raw))?;

    for &hint in hints {
        if let Some(file) = file_index(hint) {
            if token.from_file.replace(file).is_some() {
                return Err(malformed(raw));
            }
        } else if let Some(rank) = rank_index(hint) {
            if token.from_rank.replace(rank).is_some() {
                return Err(malformed(raw));
            }
        } else {
            return Err(malformed(raw));
        }
    }

    token.destination = Some(destination);
    Ok(token)
}
