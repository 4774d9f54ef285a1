//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    calculate_best_move::CalculateBestMoveArgs, evaluate::EvaluateArgs, play::PlayArgs,
    pvp::PvpArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(
    name = "chess-ai",
    about = "A chess engine that searches with minimax and alpha-beta pruning ♛"
)]
pub enum Chess {
    #[structopt(
        name = "play",
        about = "Play a game against the computer, which will search for the best move using alpha-beta pruning at the given `--depth` (default: 3). You play white unless you specify `--color black` or `--color random`. The initial position can be specified using FEN notation with `--fen` (default: starting position), and a whole-game time limit with `--minutes`."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "pvp",
        about = "Play a game against another human on this local machine. The initial position can be specified using FEN notation with `--fen` (default: starting position)."
    )]
    Pvp(PvpArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself at the given `--depth` (default: 3). The initial position can be specified using FEN notation with `--fen` (default: starting position)."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "calculate-best-move",
        about = "Use the chess engine to determine the best move from a given position, provided in FEN notation with `--fen` (required). You can optionally specify the depth of the search with the `--depth` arg (default: 3)."
    )]
    CalculateBestMove(CalculateBestMoveArgs),
    #[structopt(
        name = "evaluate",
        about = "Print the static evaluation of a position given in FEN notation with `--fen` (required). Positive scores favor white."
    )]
    Evaluate(EvaluateArgs),
}

impl crate::cli::commands::Command for Chess {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Pvp(cmd),
            Watch(cmd),
            CalculateBestMove(cmd),
            Evaluate(cmd),
        }
    }
}
