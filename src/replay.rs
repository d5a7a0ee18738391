//! Replay driver: pulls move tokens out of the movetext and applies them to
//! a `GameState` until the requested ply is reached.

use log::debug;

use crate::board::{Color, GameState};
use crate::error::{Error, Result};
use crate::fen;
use crate::pgn::{tokenize, MoveToken, Tokenizer};

/// Ply reached after `side` plays its `move_number`-th move
pub fn target_ply(move_number: u32, side: Color) -> Result<u32> {
    let ply = move_number.checked_mul(2).and_then(|ply| match side {
        Color::White => ply.checked_sub(1),
        Color::Black => Some(ply),
    });
    match ply {
        Some(ply) if ply > 0 => Ok(ply),
        _ => Err(Error::InvalidMoveNumber(move_number)),
    }
}

/// Game state after `side` plays its `move_number`-th move
pub fn position_after(movetext: &str, move_number: u32, side: Color) -> Result<GameState> {
    let mut replay = Replay::new(movetext);
    replay.play_to(target_ply(move_number, side)?)?;
    Ok(replay.into_state())
}

/// FEN of the position after `side` plays its `move_number`-th move
pub fn fen_after(movetext: &str, move_number: u32, side: Color) -> Result<String> {
    position_after(movetext, move_number, side).map(|state| fen::encode(&state))
}

/// Step-wise replay of one game's movetext
pub struct Replay<'a> {
    tokens: Tokenizer<'a>,
    state: GameState,
    moves: Vec<MoveToken>,
}

impl<'a> Replay<'a> {
    pub fn new(movetext: &'a str) -> Self {
        Replay {
            tokens: tokenize(movetext),
            state: GameState::starting_position(),
            moves: Vec::new(),
        }
    }

    /// Apply the next move. Returns false once the movetext is exhausted.
    pub fn step(&mut self) -> Result<bool> {
        let token = match self.tokens.next() {
            Some(token) => token?,
            None => return Ok(false),
        };
        if let Err(e) = self.state.apply_move(&token) {
            debug!(
                "{} failed at ply {}:\n{}",
                token,
                self.state.ply + 1,
                self.state.board.display_board()
            );
            return Err(e);
        }
        self.moves.push(token);
        Ok(true)
    }

    /// Apply moves until exactly `ply` plies have been played
    pub fn play_to(&mut self, ply: u32) -> Result<()> {
        while self.state.ply < ply {
            if !self.step()? {
                debug!("movetext ended after {} plies", self.state.ply);
                return Err(Error::MoveNotFound {
                    move_number: ply / 2 + ply % 2,
                    side: if ply % 2 == 1 { Color::White } else { Color::Black },
                });
            }
        }
        Ok(())
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Moves applied so far, in order
    pub fn moves(&self) -> &[MoveToken] {
        &self.moves
    }

    pub fn into_state(self) -> GameState {
        self.state
    }
}
