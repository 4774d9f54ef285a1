//! Core traits for generic alpha-beta search.
//!
//! The searcher never inspects game rules directly. Everything it needs from a
//! position (legal moves, apply/undo, terminal detection, a cache signature) goes
//! through [`PositionOracle`].

use std::fmt::Debug;

use smallvec::SmallVec;
use thiserror::Error;

/// Signed score. Positive values favor the maximizing side (White in chess).
pub type Score = i32;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn opposite(&self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    pub fn is_maximizing(&self) -> bool {
        match self {
            Side::White => true,
            Side::Black => false,
        }
    }

    pub fn from_maximizing(maximizing: bool) -> Self {
        if maximizing {
            Side::White
        } else {
            Side::Black
        }
    }
}

/// Game-over conditions reported by the oracle. Everything except `None` ends
/// the game; everything except `None` and `Checkmate` is a draw.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TerminalState {
    None,
    Checkmate,
    Stalemate,
    Repetition,
    InsufficientMaterial,
    FiftyMoveRule,
}

impl TerminalState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TerminalState::None)
    }

    pub fn is_draw(&self) -> bool {
        matches!(
            self,
            TerminalState::Stalemate
                | TerminalState::Repetition
                | TerminalState::InsufficientMaterial
                | TerminalState::FiftyMoveRule
        )
    }

    /// Draws that depend on how the position was reached rather than on the
    /// position itself. Scores for these must not be cached by signature.
    pub fn is_path_dependent(&self) -> bool {
        matches!(
            self,
            TerminalState::Repetition | TerminalState::FiftyMoveRule
        )
    }
}

/// Rules-equivalence key for a position.
///
/// `key` indexes the transposition cache. `verification` is a second,
/// independent fingerprint of the same position; two positions with equal keys
/// but different verifications are a hash collision.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Signature {
    pub key: u64,
    pub verification: u64,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OracleError {
    #[error("illegal move: {0}")]
    IllegalMove(String),
    #[error("cannot undo, no moves have been applied")]
    EmptyUndoStack,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct EvaluationError(pub String);

/// The rules engine consumed by the searcher.
///
/// `apply` and `undo` mutate the position in place and must be strictly LIFO:
/// every `apply` is paired with exactly one `undo` before control returns to a
/// shallower caller.
pub trait PositionOracle {
    type Move: Clone + PartialEq + Debug;
    type MoveList: MoveCollection<Self::Move>;

    /// Generates all legal moves for the side to move.
    fn legal_moves(&self) -> Self::MoveList;

    /// Applies a legal move. Illegal moves are rejected without mutation.
    fn apply(&mut self, game_move: &Self::Move) -> Result<(), OracleError>;

    /// Reverts the most recently applied move and returns it.
    fn undo(&mut self) -> Result<Self::Move, OracleError>;

    /// Number of moves currently on the undo stack.
    fn ply(&self) -> usize;

    fn terminal_state(&self) -> TerminalState;

    fn side_to_move(&self) -> Side;

    fn signature(&self) -> Signature;
}

/// Evaluates a game position and returns a score.
pub trait Evaluator<P: PositionOracle> {
    /// Evaluates the given position. Higher scores favor the maximizing side.
    /// Must be pure: repeated calls on an unmodified position agree.
    fn evaluate(&self, position: &P) -> Result<Score, EvaluationError>;
}

/// Orders moves to improve alpha-beta pruning efficiency.
pub trait MoveOrderer<M> {
    /// Sorts moves in-place, placing "better" moves first.
    fn order_moves(&self, moves: &mut [M]);
}

/// A no-op move orderer for games without move ordering heuristics.
#[derive(Clone, Default, Debug)]
pub struct NoOpMoveOrderer;

impl<M> MoveOrderer<M> for NoOpMoveOrderer {
    #[inline(always)]
    fn order_moves(&self, _moves: &mut [M]) {}
}

/// Abstraction over move collections (Vec, SmallVec, etc.)
pub trait MoveCollection<M>: AsRef<[M]> + AsMut<[M]> {
    #[inline]
    fn is_empty(&self) -> bool {
        self.as_ref().is_empty()
    }

    #[inline]
    fn len(&self) -> usize {
        self.as_ref().len()
    }
}

impl<M> MoveCollection<M> for Vec<M> {}

impl<A: smallvec::Array> MoveCollection<A::Item> for SmallVec<A> {}
