//! Chess-specific tests for the alpha-beta search.
//!
//! Test coverage:
//! - Mate in 1 for both sides
//! - Winning material and avoiding losing it
//! - Root positions with no legal moves
//! - Parity with exhaustive minimax on chess positions
//! - Transposition cache reuse and invalidation with chess positions

use shakmaty::Square;

use crate::alpha_beta_searcher::reference;
use crate::alpha_beta_searcher::{
    find_best_move, NoOpMoveOrderer, OracleError, PositionOracle, SearchContext, SearchDepth,
};
use crate::board::{ChessMove, ChessPosition};
use crate::evaluate::CHECKMATE_SCORE;

use super::*;

fn position(fen: &str) -> ChessPosition {
    ChessPosition::from_fen(fen).unwrap()
}

fn search_context(depth: u8) -> SearchContext<ChessMove> {
    SearchContext::new(SearchDepth::from(depth))
}

#[test]
fn test_starting_position_returns_a_legal_move() {
    let mut start = ChessPosition::default();
    let fen = start.fen();
    let mut context = search_context(2);

    let best_move = search_best_move(&mut context, &mut start).unwrap().unwrap();

    assert!(start.legal_moves().contains(&best_move));
    assert_eq!(start.fen(), fen);
    assert_eq!(start.ply(), 0);
    assert_eq!(context.root_scores().len(), 20);
}

#[test]
fn test_find_mate_in_1_white() {
    let mut back_rank = position("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");

    for depth in 1..=3 {
        let mut context = search_context(depth);
        let best_move = search_best_move(&mut context, &mut back_rank)
            .unwrap()
            .unwrap();
        assert_eq!(best_move.to_string(), "a1a8", "depth {}", depth);
        assert_eq!(context.last_score(), Some(CHECKMATE_SCORE));
    }
}

#[test]
fn test_find_mate_in_1_black() {
    let mut back_rank = position("r5k1/8/8/8/8/8/5PPP/6K1 b - - 0 1");

    for depth in 1..=3 {
        let mut context = search_context(depth);
        let best_move = search_best_move(&mut context, &mut back_rank)
            .unwrap()
            .unwrap();
        assert_eq!(best_move.to_string(), "a8a1", "depth {}", depth);
        assert_eq!(context.last_score(), Some(-CHECKMATE_SCORE));
    }
}

#[test]
fn test_captures_hanging_queen() {
    let mut hanging = position("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1");
    let mut context = search_context(2);

    let best_move = search_best_move(&mut context, &mut hanging).unwrap().unwrap();
    assert_eq!(best_move.from_square(), Square::E4);
    assert_eq!(best_move.to_square(), Square::D5);
}

#[test]
fn test_no_move_when_checkmated_or_stalemated() {
    let mut fools_mate = position("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
    let mut stalemate = position("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    let mut context = search_context(3);

    assert_eq!(search_best_move(&mut context, &mut fools_mate).unwrap(), None);
    assert_eq!(search_best_move(&mut context, &mut stalemate).unwrap(), None);
}

#[test]
fn test_matches_exhaustive_minimax() {
    let fens = [
        "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4",
        "4k3/8/8/3q1r2/4P3/8/8/4K3 w - - 0 1",
        "r5k1/8/8/8/8/8/5PPP/6K1 b - - 0 1",
    ];

    for fen in fens {
        let mut chess_position = position(fen);
        let mut context = search_context(2);

        let best_move = search_best_move(&mut context, &mut chess_position)
            .unwrap()
            .unwrap();
        let (expected_move, expected_score, exhaustive_nodes) = reference::best_move(
            &mut chess_position,
            &ChessEvaluator,
            &CaptureValueOrderer,
            2,
        )
        .unwrap();

        assert_eq!(best_move, expected_move, "{}", fen);
        assert_eq!(context.last_score(), Some(expected_score), "{}", fen);
        assert!(context.searched_position_count() <= exhaustive_nodes);
        assert_eq!(chess_position.fen(), fen);
    }
}

#[test]
fn test_move_ordering_does_not_change_the_score() {
    let mut chess_position =
        position("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4");

    let mut ordered = search_context(3);
    search_best_move(&mut ordered, &mut chess_position).unwrap();

    let mut unordered = search_context(3);
    find_best_move(
        &mut unordered,
        &mut chess_position,
        &ChessEvaluator,
        &NoOpMoveOrderer,
    )
    .unwrap();

    assert_eq!(ordered.last_score(), unordered.last_score());
}

#[test]
fn test_warm_cache_matches_cold_cache() {
    let mut chess_position =
        position("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4");
    let mut context = search_context(3);

    let cold_move = search_best_move(&mut context, &mut chess_position).unwrap();
    let cold_score = context.last_score();
    let cold_nodes = context.searched_position_count();

    let warm_move = search_best_move(&mut context, &mut chess_position).unwrap();

    assert_eq!(cold_move, warm_move);
    assert_eq!(cold_score, context.last_score());
    assert!(context.searched_position_count() < cold_nodes);
}

#[test]
fn test_search_after_external_move_with_cleared_cache() {
    let mut chess_position = ChessPosition::default();
    let mut context = search_context(2);
    search_best_move(&mut context, &mut chess_position).unwrap();
    assert!(!context.cache().is_empty());

    let e4 = chess_position.find_move(Square::E2, Square::E4, None).unwrap();
    chess_position.play(&e4).unwrap();
    context.clear_cache();

    let warm_reply = search_best_move(&mut context, &mut chess_position).unwrap();
    let mut fresh = search_context(2);
    let cold_reply = search_best_move(&mut fresh, &mut chess_position).unwrap();

    assert_eq!(warm_reply, cold_reply);
    assert_eq!(context.last_score(), fresh.last_score());
    assert_eq!(
        context.searched_position_count(),
        fresh.searched_position_count()
    );
}

#[test]
fn test_oracle_round_trip_through_trait() {
    let mut chess_position =
        position("r3k2r/pppq1ppp/2n2n2/3pp3/3PP3/2N2N2/PPPQ1PPP/R3K2R w KQkq - 0 8");
    let fen = chess_position.fen();
    let signature = PositionOracle::signature(&chess_position);

    let moves = PositionOracle::legal_moves(&chess_position);
    assert!(!moves.is_empty());
    for chess_move in moves.iter() {
        chess_position.apply(chess_move).unwrap();
        assert_eq!(PositionOracle::ply(&chess_position), 1);
        assert_eq!(chess_position.undo().unwrap(), *chess_move);
        assert_eq!(chess_position.fen(), fen);
        assert_eq!(PositionOracle::signature(&chess_position), signature);
    }
}

#[test]
fn test_oracle_errors() {
    let mut start = ChessPosition::default();
    assert_eq!(start.undo(), Err(OracleError::EmptyUndoStack));

    let e4 = start.find_move(Square::E2, Square::E4, None).unwrap();
    start.apply(&e4).unwrap();
    assert!(matches!(start.apply(&e4), Err(OracleError::IllegalMove(_))));
    assert_eq!(start.ply(), 1);
}
