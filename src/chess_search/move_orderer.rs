//! Chess-specific move ordering for improved alpha-beta pruning.

use std::cmp::Reverse;

use crate::alpha_beta_searcher::{MoveOrderer, Score};
use crate::board::ChessMove;
use crate::evaluate::piece_values::material_value;

/// Searches the most valuable captures first. Non-captures keep the order the
/// move generator produced them in, after every capture.
#[derive(Clone, Default, Debug)]
pub struct CaptureValueOrderer;

impl MoveOrderer<ChessMove> for CaptureValueOrderer {
    #[inline]
    fn order_moves(&self, moves: &mut [ChessMove]) {
        // stable, so equal-valued moves keep their generated order
        moves.sort_by_key(|chess_move| Reverse(capture_value(chess_move)));
    }
}

fn capture_value(chess_move: &ChessMove) -> Score {
    chess_move.captures().map_or(0, material_value)
}
