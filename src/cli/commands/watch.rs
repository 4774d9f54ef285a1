//! Watch command - watch the computer play against itself.

use chess_ai::alpha_beta_searcher::SearchDepth;
use chess_ai::board::{ChessPosition, STARTING_POSITION_FEN};
use chess_ai::game::GameMode;
use structopt::StructOpt;

use super::util::{create_config, run_game_loop, WatchLimits};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short, long, default_value = "3")]
    pub depth: SearchDepth,
    #[structopt(long = "fen", default_value = STARTING_POSITION_FEN)]
    pub starting_position: ChessPosition,
    #[structopt(
        long = "delay",
        default_value = "500",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
    #[structopt(long = "max-moves", help = "Stop after this many moves")]
    pub max_moves: Option<usize>,
}

impl Command for WatchArgs {
    fn execute(self) {
        let config = create_config(
            self.depth,
            self.starting_position,
            GameMode::ComputerVsComputer,
            None,
        );
        run_game_loop(
            config,
            Some(WatchLimits {
                delay_ms: self.delay_ms,
                max_moves: self.max_moves,
            }),
        );
    }
}
