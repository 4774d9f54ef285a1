//! Chess-specific trait implementations for the alpha-beta search.

use shakmaty::Color;

use crate::alpha_beta_searcher::{
    find_best_move, EvaluationError, Evaluator, OracleError, PositionOracle, Score, SearchContext,
    SearchError, Side, Signature, TerminalState,
};
use crate::board::{BoardError, ChessMove, ChessMoveList, ChessPosition};
use crate::evaluate;

use super::move_orderer::CaptureValueOrderer;

impl From<BoardError> for OracleError {
    fn from(error: BoardError) -> Self {
        match error {
            BoardError::EmptyHistory => OracleError::EmptyUndoStack,
            other => OracleError::IllegalMove(other.to_string()),
        }
    }
}

impl PositionOracle for ChessPosition {
    type Move = ChessMove;
    type MoveList = ChessMoveList;

    #[inline]
    fn legal_moves(&self) -> ChessMoveList {
        ChessPosition::legal_moves(self)
    }

    #[inline]
    fn apply(&mut self, chess_move: &ChessMove) -> Result<(), OracleError> {
        Ok(self.play(chess_move)?)
    }

    #[inline]
    fn undo(&mut self) -> Result<ChessMove, OracleError> {
        Ok(self.take_back()?)
    }

    #[inline]
    fn ply(&self) -> usize {
        ChessPosition::ply(self)
    }

    #[inline]
    fn terminal_state(&self) -> TerminalState {
        ChessPosition::terminal_state(self)
    }

    #[inline]
    fn side_to_move(&self) -> Side {
        match self.turn() {
            Color::White => Side::White,
            Color::Black => Side::Black,
        }
    }

    #[inline]
    fn signature(&self) -> Signature {
        ChessPosition::signature(self)
    }
}

#[derive(Clone, Default, Debug)]
pub struct ChessEvaluator;

impl ChessEvaluator {
    pub fn new() -> Self {
        Self
    }
}

impl Evaluator<ChessPosition> for ChessEvaluator {
    #[inline]
    fn evaluate(&self, position: &ChessPosition) -> Result<Score, EvaluationError> {
        Ok(evaluate::score(position))
    }
}

/// Searches for the best chess move from the given position at the context's
/// depth. Returns `Ok(None)` when the side to move has no legal moves.
#[must_use = "search returns the best move found"]
pub fn search_best_move(
    context: &mut SearchContext<ChessMove>,
    position: &mut ChessPosition,
) -> Result<Option<ChessMove>, SearchError> {
    let evaluator = ChessEvaluator::default();
    let move_orderer = CaptureValueOrderer;

    find_best_move(context, position, &evaluator, &move_orderer)
}
