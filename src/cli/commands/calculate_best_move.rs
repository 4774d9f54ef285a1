//! Calculate best move command - determine the best move from a position.

use chess_ai::alpha_beta_searcher::{SearchContext, SearchDepth};
use chess_ai::board::ChessPosition;
use chess_ai::chess_search::search_best_move;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct CalculateBestMoveArgs {
    #[structopt(short, long, default_value = "3")]
    pub depth: SearchDepth,
    #[structopt(long = "fen")]
    pub starting_position: ChessPosition,
}

impl Command for CalculateBestMoveArgs {
    fn execute(self) {
        let mut position = self.starting_position;
        let mut context = SearchContext::new(self.depth);

        match search_best_move(&mut context, &mut position) {
            Ok(Some(best_move)) => {
                println!("{}", best_move);
                if let Some(score) = context.last_score() {
                    println!("score: {}", score);
                }
                println!("positions searched: {}", context.searched_position_count());
            }
            Ok(None) => eprintln!("There are no valid moves in the given position."),
            Err(err) => eprintln!("Failed to calculate best move: {}", err),
        }
    }
}
