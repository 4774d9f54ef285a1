//! Alpha-beta search algorithm implementation.
//!
//! # Core Algorithm
//!
//! Alpha-beta pruning is an optimization of minimax search that maintains a window [alpha, beta]
//! representing the range of scores that matter. Moves that fall outside this window can be
//! pruned without affecting the final result. The algorithm guarantees finding the same move as
//! minimax but explores fewer nodes.
//!
//! Scores are always from the maximizing side's point of view: the maximizing side folds child
//! scores with `max` and raises alpha, the minimizing side folds with `min` and lowers beta.
//!
//! ## Transposition Cache
//! Every node result is cached under `(signature, depth, side)` together with its bound type.
//! Results produced by a cutoff are only reused when they still decide the node for the window
//! at hand, so a warm cache changes the node count but never the chosen move.
//!
//! ## Move Ordering
//! Candidates are reordered by a [`MoveOrderer`] before being searched. Better ordering leads to
//! earlier cutoffs.
//!
//! ## Root
//! Every root candidate is searched with the full window so that its score is exact. The first
//! candidate with the strictly best score wins, which makes ties resolve to the earliest move in
//! ordered enumeration.

use std::cmp::{max, min};
use std::time::{Duration, Instant};

use log::debug;
use thiserror::Error;

use super::depth::SearchDepth;
use super::transposition_table::{BoundType, CacheError, TranspositionCache};
use super::traits::{
    EvaluationError, Evaluator, MoveCollection, MoveOrderer, OracleError, PositionOracle, Score,
    Side, Signature, TerminalState,
};

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("oracle error: {0}")]
    Oracle(#[from] OracleError),
    #[error("evaluation failed: {0}")]
    Evaluation(#[from] EvaluationError),
    #[error("transposition cache error: {0}")]
    Cache(#[from] CacheError),
    #[error("apply/undo imbalance: search started at ply {expected} but ended at ply {found}")]
    UnbalancedUndo { expected: usize, found: usize },
}

/// Statistics collected during the most recent search.
#[derive(Clone, Debug, Default)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub evaluations: usize,
    pub cache_hits: usize,
    pub cutoffs: usize,
    pub last_score: Option<Score>,
    pub last_duration: Option<Duration>,
}

pub struct SearchContext<M> {
    depth: SearchDepth,
    cache: TranspositionCache,
    stats: SearchStats,
    root_scores: Vec<(M, Score)>,
}

impl<M: Clone> SearchContext<M> {
    pub fn new(depth: SearchDepth) -> Self {
        Self {
            depth,
            cache: TranspositionCache::new(),
            stats: SearchStats::default(),
            root_scores: Vec::new(),
        }
    }

    pub fn search_depth(&self) -> SearchDepth {
        self.depth
    }

    pub fn set_search_depth(&mut self, depth: SearchDepth) {
        self.depth = depth;
    }

    pub fn cache(&self) -> &TranspositionCache {
        &self.cache
    }

    /// Drops every cached score. Must be called whenever the authoritative position
    /// changes outside of a search.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Reset stats but keep transposition cache entries.
    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
        self.root_scores.clear();
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn searched_position_count(&self) -> usize {
        self.stats.positions_searched
    }

    pub fn last_score(&self) -> Option<Score> {
        self.stats.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.stats.last_duration
    }

    /// Scores of every root candidate from the most recent search, in the order
    /// they were searched.
    pub fn root_scores(&self) -> &[(M, Score)] {
        &self.root_scores
    }
}

/// Applies a move, executes a closure with the new position, then undoes the move.
/// The undo runs whether or not the closure succeeded.
fn with_move_applied<P, F, R>(position: &mut P, game_move: &P::Move, f: F) -> Result<R, SearchError>
where
    P: PositionOracle,
    F: FnOnce(&mut P) -> Result<R, SearchError>,
{
    position.apply(game_move)?;
    let result = f(position);
    position.undo()?;
    result
}

/// Updates the best move if `score` is strictly better for the side to move.
/// Returns true if the best move was replaced.
fn update_best<M: Clone>(
    score: Score,
    candidate_move: &M,
    maximizing_player: bool,
    best: &mut Option<(M, Score)>,
) -> bool {
    let is_better = match best {
        None => true,
        Some((_, best_score)) if maximizing_player => score > *best_score,
        Some((_, best_score)) => score < *best_score,
    };

    if is_better {
        *best = Some((candidate_move.clone(), score));
    }
    is_better
}

fn evaluate_leaf<P, E>(
    context: &mut SearchContext<P::Move>,
    position: &P,
    evaluator: &E,
    signature: Signature,
    depth: u8,
    side: Side,
    terminal_state: TerminalState,
) -> Result<Score, SearchError>
where
    P: PositionOracle,
    E: Evaluator<P>,
{
    context.stats.evaluations += 1;
    let score = evaluator.evaluate(position)?;

    // repetition and fifty-move draws belong to the line, not the position
    if !terminal_state.is_path_dependent() {
        context
            .cache
            .put(signature, depth, side, score, BoundType::Exact)?;
    }
    Ok(score)
}

/// Scores `position` by alpha-beta minimax to the given depth.
///
/// The position is mutated during the search but is restored before this
/// function returns, on success and on error alike.
#[allow(clippy::too_many_arguments)]
pub fn alpha_beta_minimax<P, E, O>(
    context: &mut SearchContext<P::Move>,
    position: &mut P,
    evaluator: &E,
    move_orderer: &O,
    depth: u8,
    mut alpha: Score,
    mut beta: Score,
    maximizing_player: bool,
) -> Result<Score, SearchError>
where
    P: PositionOracle,
    E: Evaluator<P>,
    O: MoveOrderer<P::Move>,
{
    context.stats.positions_searched += 1;

    let signature = position.signature();
    let side = Side::from_maximizing(maximizing_player);

    if let Some(score) = context.cache.probe(signature, depth, side, alpha, beta)? {
        context.stats.cache_hits += 1;
        return Ok(score);
    }

    let terminal_state = position.terminal_state();
    if depth == 0 || terminal_state.is_terminal() {
        return evaluate_leaf(
            context,
            position,
            evaluator,
            signature,
            depth,
            side,
            terminal_state,
        );
    }

    let mut candidates = position.legal_moves();
    if candidates.is_empty() {
        return evaluate_leaf(
            context,
            position,
            evaluator,
            signature,
            depth,
            side,
            terminal_state,
        );
    }
    move_orderer.order_moves(candidates.as_mut());

    let (original_alpha, original_beta) = (alpha, beta);
    let mut best_score = if maximizing_player {
        Score::MIN
    } else {
        Score::MAX
    };

    for game_move in candidates.as_ref().iter() {
        let score = with_move_applied(position, game_move, |position| {
            alpha_beta_minimax(
                context,
                position,
                evaluator,
                move_orderer,
                depth - 1,
                alpha,
                beta,
                !maximizing_player,
            )
        })?;

        if maximizing_player {
            best_score = max(best_score, score);
            alpha = max(alpha, score);
        } else {
            best_score = min(best_score, score);
            beta = min(beta, score);
        }

        if alpha >= beta {
            context.stats.cutoffs += 1;
            break;
        }
    }

    let bound_type = if best_score <= original_alpha {
        BoundType::Upper
    } else if best_score >= original_beta {
        BoundType::Lower
    } else {
        BoundType::Exact
    };
    context
        .cache
        .put(signature, depth, side, best_score, bound_type)?;

    Ok(best_score)
}

/// Searches for the best move for the side to move, at the context's depth.
///
/// # Returns
///
/// - `Ok(Some(best_move))` - The best move; it is *not* applied to `position`
/// - `Ok(None)` - The side to move has no legal moves; the caller's terminal-state
///   check is authoritative for what that means
/// - `Err(_)` - An oracle, evaluator or cache failure. `position` is left as it was.
#[must_use = "search returns the best move found"]
pub fn find_best_move<P, E, O>(
    context: &mut SearchContext<P::Move>,
    position: &mut P,
    evaluator: &E,
    move_orderer: &O,
) -> Result<Option<P::Move>, SearchError>
where
    P: PositionOracle,
    E: Evaluator<P>,
    O: MoveOrderer<P::Move>,
{
    let depth = context.search_depth().plies();
    debug!("alpha-beta search depth: {}", depth);

    context.reset_stats();
    let start = Instant::now();
    let starting_ply = position.ply();
    let maximizing_player = position.side_to_move().is_maximizing();

    let mut candidates = position.legal_moves();
    if candidates.is_empty() {
        debug!("no legal moves at the root");
        return Ok(None);
    }
    move_orderer.order_moves(candidates.as_mut());

    let mut best = None;
    for game_move in candidates.as_ref().iter() {
        let score = with_move_applied(position, game_move, |position| {
            alpha_beta_minimax(
                context,
                position,
                evaluator,
                move_orderer,
                depth - 1,
                Score::MIN,
                Score::MAX,
                !maximizing_player,
            )
        })?;
        debug!("root move {:?} scored {}", game_move, score);

        context.root_scores.push((game_move.clone(), score));
        update_best(score, game_move, maximizing_player, &mut best);
    }

    if position.ply() != starting_ply {
        return Err(SearchError::UnbalancedUndo {
            expected: starting_ply,
            found: position.ply(),
        });
    }

    let duration = start.elapsed();
    let best_score = best.as_ref().map(|(_, score)| *score);
    context.stats.last_score = best_score;
    context.stats.last_duration = Some(duration);
    debug!(
        "searched {} positions ({} cache hits, {} cutoffs) in {:?}, best score {:?}",
        context.stats.positions_searched,
        context.stats.cache_hits,
        context.stats.cutoffs,
        duration,
        best_score
    );

    Ok(best.map(|(best_move, _)| best_move))
}
