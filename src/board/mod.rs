//! Chess position state for the search and the session.
//!
//! Move legality, check and draw detection come from `shakmaty`. This module
//! adds what the searcher needs on top: an exact undo stack, Zobrist
//! signatures, and repetition tracking across the moves played so far.

pub mod chess_move;
pub mod error;

mod display;


use std::str::FromStr;

use shakmaty::fen::Fen;
use shakmaty::zobrist::{Zobrist64, ZobristHash};
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, Piece, Position, Role, Square};
use smallvec::SmallVec;

use crate::alpha_beta_searcher::{Signature, TerminalState};

pub use chess_move::ChessMove;
pub use error::BoardError;

pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Positions repeated this many times are drawn.
const REPETITION_LIMIT: usize = 3;
/// Halfmoves without a capture or pawn move before the fifty-move rule applies.
const FIFTY_MOVE_HALFMOVES: u32 = 100;

pub type ChessMoveList = SmallVec<[ChessMove; 64]>;

#[derive(Clone, Debug)]
struct UndoRecord {
    position: Chess,
    signature: Signature,
    chess_move: ChessMove,
}

/// A chess position with its move history.
///
/// `play` and `take_back` are strictly LIFO. Each undo record holds the full
/// prior position, so taking back a move restores castling rights, en passant
/// state and counters exactly.
#[derive(Clone, Debug)]
pub struct ChessPosition {
    position: Chess,
    signature: Signature,
    history: Vec<UndoRecord>,
}

impl Default for ChessPosition {
    fn default() -> Self {
        Self::from_chess(Chess::default())
    }
}

impl ChessPosition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fen(fen: &str) -> Result<Self, BoardError> {
        let parsed: Fen = fen
            .trim()
            .parse()
            .map_err(|err| BoardError::InvalidFen(format!("{:?}: {}", fen, err)))?;
        let position: Chess = parsed
            .into_position(CastlingMode::Standard)
            .map_err(|err| BoardError::InvalidPosition(err.to_string()))?;
        Ok(Self::from_chess(position))
    }

    fn from_chess(position: Chess) -> Self {
        let signature = compute_signature(&position);
        Self {
            position,
            signature,
            history: Vec::new(),
        }
    }

    pub fn fen(&self) -> String {
        Fen::from_position(self.position.clone(), EnPassantMode::Legal).to_string()
    }

    /// The underlying rules-engine position.
    pub fn inner(&self) -> &Chess {
        &self.position
    }

    pub fn turn(&self) -> Color {
        self.position.turn()
    }

    pub fn is_check(&self) -> bool {
        self.position.is_check()
    }

    pub fn halfmoves(&self) -> u32 {
        self.position.halfmoves()
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position.board().piece_at(square)
    }

    pub fn signature(&self) -> Signature {
        self.signature
    }

    pub fn legal_moves(&self) -> ChessMoveList {
        self.position
            .legal_moves()
            .into_iter()
            .filter_map(ChessMove::from_legal)
            .collect()
    }

    pub fn legal_moves_from(&self, square: Square) -> ChessMoveList {
        self.legal_moves()
            .into_iter()
            .filter(|chess_move| chess_move.from_square() == square)
            .collect()
    }

    /// Finds the legal move between two squares. A pawn reaching the last rank
    /// promotes to `promotion`, or to a queen if none is given. A promotion
    /// piece on any other move matches nothing.
    pub fn find_move(&self, from: Square, to: Square, promotion: Option<Role>) -> Option<ChessMove> {
        self.legal_moves().into_iter().find(|chess_move| {
            chess_move.from_square() == from
                && chess_move.to_square() == to
                && match (chess_move.promotion(), promotion) {
                    (Some(promoted), requested) => promoted == requested.unwrap_or(Role::Queen),
                    (None, requested) => requested.is_none(),
                }
        })
    }

    /// Plays a legal move and records it so that it can be taken back.
    pub fn play(&mut self, chess_move: &ChessMove) -> Result<(), BoardError> {
        if !self.position.is_legal(chess_move.inner()) {
            return Err(BoardError::IllegalMove(chess_move.to_string()));
        }

        let mut next = self.position.clone();
        next.play_unchecked(chess_move.inner());
        let next_signature = compute_signature(&next);

        let previous = std::mem::replace(&mut self.position, next);
        let previous_signature = std::mem::replace(&mut self.signature, next_signature);

        self.history.push(UndoRecord {
            position: previous,
            signature: previous_signature,
            chess_move: chess_move.clone(),
        });
        Ok(())
    }

    /// Takes back the most recently played move and returns it.
    pub fn take_back(&mut self) -> Result<ChessMove, BoardError> {
        let record = self.history.pop().ok_or(BoardError::EmptyHistory)?;
        self.position = record.position;
        self.signature = record.signature;
        Ok(record.chess_move)
    }

    /// Number of moves that can be taken back.
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    pub fn last_move(&self) -> Option<&ChessMove> {
        self.history.last().map(|record| &record.chess_move)
    }

    /// Pieces captured so far by `by`, in the order they were taken.
    pub fn captured_pieces(&self, by: Color) -> Vec<Piece> {
        self.history
            .iter()
            .filter(|record| record.position.turn() == by)
            .filter_map(|record| record.chess_move.captures())
            .map(|role| Piece {
                color: by.other(),
                role,
            })
            .collect()
    }

    /// How many times the current position has occurred, counting this one.
    pub fn repetition_count(&self) -> usize {
        1 + self
            .history
            .iter()
            .filter(|record| record.signature == self.signature)
            .count()
    }

    pub fn terminal_state(&self) -> TerminalState {
        if self.position.is_checkmate() {
            TerminalState::Checkmate
        } else if self.position.is_stalemate() {
            TerminalState::Stalemate
        } else if self.position.is_insufficient_material() {
            TerminalState::InsufficientMaterial
        } else if self.repetition_count() >= REPETITION_LIMIT {
            TerminalState::Repetition
        } else if self.position.halfmoves() >= FIFTY_MOVE_HALFMOVES {
            TerminalState::FiftyMoveRule
        } else {
            TerminalState::None
        }
    }
}

impl FromStr for ChessPosition {
    type Err = BoardError;

    fn from_str(fen: &str) -> Result<Self, Self::Err> {
        Self::from_fen(fen)
    }
}

/// Parses a square in algebraic notation, e.g. `e4`.
pub fn parse_square(input: &str) -> Result<Square, BoardError> {
    input
        .trim()
        .parse()
        .map_err(|_| BoardError::InvalidSquare(input.to_string()))
}

/// Piece placement, side to move, castling rights and the legal en passant
/// square. Move counters are left out, so positions that differ only in their
/// clocks are transpositions.
fn compute_signature(position: &Chess) -> Signature {
    let Zobrist64(key) = position.zobrist_hash::<Zobrist64>(EnPassantMode::Legal);
    Signature {
        key,
        verification: position.board().occupied().0,
    }
}
