//! Player input parsing.

use std::io::{self, BufRead};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use shakmaty::{Role, Square};
use thiserror::Error;

use crate::alpha_beta_searcher::SearchDepth;
use crate::board::parse_square;

static MOVE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([a-h][1-8])\s*-?\s*([a-h][1-8])\s*=?([qrbn])?$")
        .expect("MOVE_RE regex should be valid")
});
static MOVES_FROM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^moves\s+([a-h][1-8])$").expect("MOVES_FROM_RE regex should be valid")
});
static DEPTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^depth\s+(\S+)$").expect("DEPTH_RE regex should be valid"));

#[derive(Error, Debug)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PlayerInput {
    /// A move by coordinates, e.g. `e2e4`, `e2 e4` or `e7e8q`.
    Move {
        from: Square,
        to: Square,
        promotion: Option<Role>,
    },
    /// `moves e2`: list the legal moves from a square.
    ShowMoves { square: Square },
    /// `depth 4`: search depth for the computer's next moves.
    SetDepth { depth: SearchDepth },
    /// Turn the board around.
    Flip,
    Undo,
    NewGame,
    Quit,
}

impl FromStr for PlayerInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalized = input.trim().to_lowercase();
        let invalid = || InputError::InvalidInput {
            input: input.to_string(),
        };

        match normalized.as_str() {
            "undo" | "u" => return Ok(PlayerInput::Undo),
            "new" => return Ok(PlayerInput::NewGame),
            "flip" => return Ok(PlayerInput::Flip),
            "quit" | "exit" | "q" => return Ok(PlayerInput::Quit),
            _ => {}
        }

        if let Some(caps) = MOVES_FROM_RE.captures(&normalized) {
            let square = parse_square(&caps[1]).map_err(|_| invalid())?;
            return Ok(PlayerInput::ShowMoves { square });
        }

        if let Some(caps) = DEPTH_RE.captures(&normalized) {
            let depth = SearchDepth::parse_lenient(&caps[1]);
            return Ok(PlayerInput::SetDepth { depth });
        }

        if let Some(caps) = MOVE_RE.captures(&normalized) {
            let from = parse_square(&caps[1]).map_err(|_| invalid())?;
            let to = parse_square(&caps[2]).map_err(|_| invalid())?;
            let promotion = caps.get(3).and_then(|m| promotion_role(m.as_str()));
            return Ok(PlayerInput::Move {
                from,
                to,
                promotion,
            });
        }

        Err(invalid())
    }
}

fn promotion_role(input: &str) -> Option<Role> {
    match input {
        "q" => Some(Role::Queen),
        "r" => Some(Role::Rook),
        "b" => Some(Role::Bishop),
        "n" => Some(Role::Knight),
        _ => None,
    }
}

/// Reads one line of player input. End of input reads as `Quit`.
pub fn read_player_input<R: BufRead>(reader: &mut R) -> Result<PlayerInput, InputError> {
    let mut line = String::new();
    let bytes = reader
        .read_line(&mut line)
        .map_err(|error| InputError::IOError {
            error: error.to_string(),
        })?;

    if bytes == 0 {
        return Ok(PlayerInput::Quit);
    }
    line.parse()
}

/// Reads one line of player input from stdin.
pub fn parse_player_input() -> Result<PlayerInput, InputError> {
    let stdin = io::stdin();
    let mut handle = stdin.lock();
    read_player_input(&mut handle)
}
