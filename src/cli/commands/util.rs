//! Shared utilities for CLI commands.

use std::thread;
use std::time::Duration;

use chess_ai::alpha_beta_searcher::SearchDepth;
use chess_ai::board::ChessPosition;
use chess_ai::game::display::GameDisplay;
use chess_ai::game::{EngineConfig, GameMode, Session};
use chess_ai::input_handler::{parse_player_input, PlayerInput};

/// Pacing for games where nobody types.
pub(crate) struct WatchLimits {
    pub delay_ms: u64,
    pub max_moves: Option<usize>,
}

pub(crate) fn create_config(
    search_depth: SearchDepth,
    starting_position: ChessPosition,
    mode: GameMode,
    minutes: Option<u64>,
) -> EngineConfig {
    EngineConfig {
        search_depth,
        starting_position,
        mode,
        time_limit: minutes.map(|minutes| Duration::from_secs(minutes.saturating_mul(60))),
    }
}

pub(crate) fn run_game_loop(config: EngineConfig, watch: Option<WatchLimits>) {
    let mut session = Session::with_config(config);
    let mut display = GameDisplay::for_mode(session.mode());
    let mut computer_moves = 0;

    loop {
        display.render_game_state(&session);
        println!("{}", display.buffer());

        if session.is_game_over() {
            if watch.is_some() {
                return;
            }
            println!("Game over. Type `new` to play again, `undo` to take back, or `quit` to exit.");
            if !handle_player_input(&mut session, &mut display) {
                return;
            }
            continue;
        }

        if session.is_computer_turn() {
            println!("Thinking...");
            match session.request_computer_move() {
                Ok(Some(computer_move)) => println!("Computer played {}", computer_move),
                Ok(None) => return,
                Err(err) => {
                    eprintln!("Failed to find a move: {}", err);
                    return;
                }
            }

            if let Some(limits) = &watch {
                computer_moves += 1;
                if limits.max_moves.map_or(false, |max| computer_moves >= max) {
                    display.render_game_state(&session);
                    println!("{}", display.buffer());
                    return;
                }
                thread::sleep(Duration::from_millis(limits.delay_ms));
            }
            continue;
        }

        println!(
            "Enter your move (e.g. e2e4), `moves <square>`, `depth <n>`, `flip`, `undo`, `new` or `quit`:"
        );
        if !handle_player_input(&mut session, &mut display) {
            return;
        }
    }
}

/// Reads and applies one line of input. Returns false when the player quits.
fn handle_player_input(session: &mut Session, display: &mut GameDisplay) -> bool {
    let input = match parse_player_input() {
        Ok(input) => input,
        Err(err) => {
            println!("{}", err);
            return true;
        }
    };

    match input {
        PlayerInput::Move {
            from,
            to,
            promotion,
        } => {
            if let Err(err) = session.make_move(from, to, promotion) {
                println!("{}", err);
            }
        }
        PlayerInput::ShowMoves { square } => {
            let moves: Vec<String> = session
                .legal_moves_from(square)
                .iter()
                .map(|chess_move| chess_move.to_string())
                .collect();
            if moves.is_empty() {
                println!("No legal moves from {}", square);
            } else {
                println!("Legal moves from {}: {}", square, moves.join(" "));
            }
        }
        PlayerInput::SetDepth { depth } => {
            session.set_search_depth(depth);
            println!("Search depth set to {}", depth);
        }
        PlayerInput::Flip => display.flip(),
        PlayerInput::Undo => {
            if let Err(err) = session.undo() {
                println!("{}", err);
            }
        }
        PlayerInput::NewGame => session.new_game(),
        PlayerInput::Quit => return false,
    }
    true
}
