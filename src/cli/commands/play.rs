//! Play command - play a game against the computer.

use std::str::FromStr;

use chess_ai::alpha_beta_searcher::SearchDepth;
use chess_ai::board::{ChessPosition, STARTING_POSITION_FEN};
use chess_ai::game::GameMode;
use shakmaty::Color;
use structopt::StructOpt;

use super::util::{create_config, run_game_loop};
use super::Command;

/// The human's color, as given on the command line.
pub struct ColorChoice(pub Color);

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for ColorChoice {
    type Err = ParseError;

    fn from_str(color: &str) -> Result<Self, Self::Err> {
        match color.to_lowercase().as_str() {
            "white" => Ok(ColorChoice(Color::White)),
            "black" => Ok(ColorChoice(Color::Black)),
            "random" if fastrand::bool() => Ok(ColorChoice(Color::White)),
            "random" => Ok(ColorChoice(Color::Black)),
            _ => Err("invalid color; options are: white, black, random"),
        }
    }
}

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "3")]
    pub depth: SearchDepth,
    #[structopt(short = "c", long = "color", default_value = "white")]
    pub color: ColorChoice,
    #[structopt(long = "fen", default_value = STARTING_POSITION_FEN)]
    pub starting_position: ChessPosition,
    #[structopt(long = "minutes", help = "Time limit for the whole game, in minutes")]
    pub minutes: Option<u64>,
}

impl Command for PlayArgs {
    fn execute(self) {
        let config = create_config(
            self.depth,
            self.starting_position,
            GameMode::PlayerVsComputer {
                human: self.color.0,
            },
            self.minutes,
        );
        run_game_loop(config, None);
    }
}
