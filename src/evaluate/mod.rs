//! Static evaluation of chess positions.
//!
//! Scores are from White's point of view: positive favors White, negative
//! favors Black.

use shakmaty::{Color, Position};

use crate::alpha_beta_searcher::{Score, TerminalState};
use crate::board::ChessPosition;

pub mod piece_values;

use piece_values::material_value;

/// Score for a checkmated side. Larger than any material and mobility sum
/// reachable with the standard set of pieces.
pub const CHECKMATE_SCORE: Score = 9999;

/// Points per legal move available to the side to move.
pub const MOBILITY_WEIGHT: Score = 2;

/// Scores a position.
///
/// Checkmate scores `-CHECKMATE_SCORE` when White is mated and
/// `CHECKMATE_SCORE` when Black is mated. Every draw scores exactly 0.
/// Anything else is material plus mobility.
pub fn score(position: &ChessPosition) -> Score {
    match position.terminal_state() {
        TerminalState::Checkmate => checkmate_score(position.turn()),
        state if state.is_draw() => 0,
        _ => material_score(position) + mobility_score(position),
    }
}

fn checkmate_score(mated: Color) -> Score {
    match mated {
        Color::White => -CHECKMATE_SCORE,
        Color::Black => CHECKMATE_SCORE,
    }
}

/// Sum of piece values, White's pieces positive and Black's negative.
pub fn material_score(position: &ChessPosition) -> Score {
    let board = position.inner().board();
    board
        .occupied()
        .into_iter()
        .filter_map(|square| board.piece_at(square))
        .map(|piece| match piece.color {
            Color::White => material_value(piece.role),
            Color::Black => -material_value(piece.role),
        })
        .sum()
}

/// Legal-move count of the side to move, weighted and signed by that side.
pub fn mobility_score(position: &ChessPosition) -> Score {
    let legal_move_count = position.inner().legal_moves().len() as Score;
    let mobility = legal_move_count * MOBILITY_WEIGHT;
    match position.turn() {
        Color::White => mobility,
        Color::Black => -mobility,
    }
}
