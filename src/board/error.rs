use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid FEN: {0}")]
    InvalidFen(String),
    #[error("FEN does not describe a legal position: {0}")]
    InvalidPosition(String),
    #[error("invalid square: {0:?}")]
    InvalidSquare(String),
    #[error("cannot apply chess move {0}, it is not legal in this position")]
    IllegalMove(String),
    #[error("cannot undo, no moves have been played")]
    EmptyHistory,
}
