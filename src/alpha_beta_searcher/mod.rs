//! Generic alpha-beta search over any game that implements [`PositionOracle`].

mod depth;
mod search;
mod traits;
mod transposition_table;

#[cfg(test)]
pub(crate) mod reference;

pub use depth::SearchDepth;
pub use search::{alpha_beta_minimax, find_best_move, SearchContext, SearchError, SearchStats};
pub use traits::{
    EvaluationError, Evaluator, MoveCollection, MoveOrderer, NoOpMoveOrderer, OracleError,
    PositionOracle, Score, Side, Signature, TerminalState,
};
pub use transposition_table::{BoundType, CacheEntry, CacheError, TranspositionCache};
