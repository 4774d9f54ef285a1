//! PvP command - play a game against another human.

use chess_ai::alpha_beta_searcher::SearchDepth;
use chess_ai::board::{ChessPosition, STARTING_POSITION_FEN};
use chess_ai::game::GameMode;
use structopt::StructOpt;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PvpArgs {
    #[structopt(long = "fen", default_value = STARTING_POSITION_FEN)]
    pub starting_position: ChessPosition,
    #[structopt(long = "minutes", help = "Time limit for the whole game, in minutes")]
    pub minutes: Option<u64>,
}

impl Command for PvpArgs {
    fn execute(self) {
        let config = create_config(
            SearchDepth::MIN,
            self.starting_position,
            GameMode::PlayerVsPlayer,
            self.minutes,
        );
        run_game_loop(config, None);
    }
}
