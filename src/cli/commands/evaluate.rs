//! Evaluate command - print the static score of a position.

use chess_ai::board::ChessPosition;
use chess_ai::evaluate;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct EvaluateArgs {
    #[structopt(long = "fen")]
    pub starting_position: ChessPosition,
}

impl Command for EvaluateArgs {
    fn execute(self) {
        let position = self.starting_position;

        println!("{}\n", position);
        println!("terminal state: {:?}", position.terminal_state());
        println!("material: {}", evaluate::material_score(&position));
        println!("mobility: {}", evaluate::mobility_score(&position));
        println!("score: {}", evaluate::score(&position));
    }
}
