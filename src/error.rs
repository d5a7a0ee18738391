use thiserror::Error;

use crate::board::Color;

/// Everything that can go wrong while replaying movetext.
///
/// The core never recovers from any of these: the first error aborts the
/// replay and is handed back to the caller untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The movetext ran out before the requested ply was reached
    #[error("move {move_number} by {side} does not exist")]
    MoveNotFound { move_number: u32, side: Color },

    /// Geometric search found no origin, or more than one, for a piece move
    #[error("cannot resolve origin of '{token}': {candidates} candidate(s)")]
    AmbiguousOrigin { token: String, candidates: usize },

    /// A token that does not start like any known move class
    #[error("malformed move token '{0}'")]
    MalformedToken(String),

    /// Move numbers start at 1
    #[error("invalid move number {0}")]
    InvalidMoveNumber(u32),
}

pub type Result<T> = std::result::Result<T, Error>;
