//! Exhaustive minimax without pruning or caching, used to check the searcher.

use super::traits::{Evaluator, MoveCollection, MoveOrderer, PositionOracle, Score};

pub(crate) fn minimax<P, E, O>(
    position: &mut P,
    evaluator: &E,
    move_orderer: &O,
    depth: u8,
    maximizing_player: bool,
    node_count: &mut usize,
) -> Score
where
    P: PositionOracle,
    E: Evaluator<P>,
    O: MoveOrderer<P::Move>,
{
    *node_count += 1;

    if depth == 0 || position.terminal_state().is_terminal() {
        return evaluator.evaluate(position).unwrap();
    }

    let mut candidates = position.legal_moves();
    if candidates.is_empty() {
        return evaluator.evaluate(position).unwrap();
    }
    move_orderer.order_moves(candidates.as_mut());

    let scores = candidates.as_ref().iter().map(|game_move| {
        position.apply(game_move).unwrap();
        let score = minimax(
            position,
            evaluator,
            move_orderer,
            depth - 1,
            !maximizing_player,
            node_count,
        );
        position.undo().unwrap();
        score
    });

    if maximizing_player {
        scores.max().unwrap()
    } else {
        scores.min().unwrap()
    }
}

/// Best root move by exhaustive minimax, with the first strictly-best move
/// winning ties. Returns the move, its score and the number of nodes visited
/// below the root.
pub(crate) fn best_move<P, E, O>(
    position: &mut P,
    evaluator: &E,
    move_orderer: &O,
    depth: u8,
) -> Option<(P::Move, Score, usize)>
where
    P: PositionOracle,
    E: Evaluator<P>,
    O: MoveOrderer<P::Move>,
{
    let maximizing_player = position.side_to_move().is_maximizing();
    let mut candidates = position.legal_moves();
    move_orderer.order_moves(candidates.as_mut());

    let mut node_count = 0;
    let mut best: Option<(P::Move, Score)> = None;
    for game_move in candidates.as_ref().iter() {
        position.apply(game_move).unwrap();
        let score = minimax(
            position,
            evaluator,
            move_orderer,
            depth - 1,
            !maximizing_player,
            &mut node_count,
        );
        position.undo().unwrap();

        let is_better = match &best {
            None => true,
            Some((_, best_score)) if maximizing_player => score > *best_score,
            Some((_, best_score)) => score < *best_score,
        };
        if is_better {
            best = Some((game_move.clone(), score));
        }
    }

    best.map(|(best_move, score)| (best_move, score, node_count))
}
