use shakmaty::Color;

use super::clock::format_remaining;
use super::session::{GameMode, GameStatus, Session};

pub struct GameDisplay {
    buffer: String,
    perspective: Color,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self::from_perspective(Color::White)
    }

    pub fn from_perspective(perspective: Color) -> Self {
        Self {
            buffer: String::with_capacity(2048),
            perspective,
        }
    }

    /// Shows the board from the human's side against the computer, and from
    /// White's side otherwise.
    pub fn for_mode(mode: GameMode) -> Self {
        match mode {
            GameMode::PlayerVsComputer { human } => Self::from_perspective(human),
            _ => Self::new(),
        }
    }

    pub fn perspective(&self) -> Color {
        self.perspective
    }

    /// Turns the board around.
    pub fn flip(&mut self) {
        self.perspective = self.perspective.other();
    }

    /// Renders the board, game status, move list, captured pieces, clock and
    /// the most recent search into the buffer, replacing whatever it held.
    pub fn render_game_state(&mut self, session: &Session) {
        self.buffer.clear();

        self.buffer
            .push_str(&session.position().render(self.perspective));
        self.buffer.push_str("\n\n");

        self.buffer
            .push_str(&format!("Status: {}\n", status_line(session.status())));
        self.buffer.push_str(&format!("FEN: {}\n", session.fen()));

        let move_list = session.position().move_list();
        if !move_list.is_empty() {
            self.buffer.push_str(&format!("Moves: {}\n", move_list));
        }

        if let Some(last_move) = session.last_move() {
            self.buffer.push_str(&format!("Last move: {}\n", last_move));
        }

        for (label, color) in [("White", Color::White), ("Black", Color::Black)] {
            let captured: String = session
                .captured_pieces(color)
                .iter()
                .map(|piece| piece.char())
                .collect();
            let captured = if captured.is_empty() {
                "-".to_string()
            } else {
                captured
            };
            self.buffer
                .push_str(&format!("Captured by {}: {}\n", label, captured));
        }

        if let Some(remaining) = session.clock().remaining() {
            self.buffer
                .push_str(&format!("Time left: {}\n", format_remaining(remaining)));
        }

        let stats = session.search_stats();
        if let Some(score) = stats.last_score {
            self.buffer.push_str(&format!(
                "\n* Score: {}\n* Positions searched: {}\n* Search depth: {}\n",
                score,
                stats.positions_searched,
                session.search_depth(),
            ));
            if let Some(duration) = stats.last_duration {
                self.buffer
                    .push_str(&format!("* Search time: {:.2?}\n", duration));
            }
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn into_buffer(self) -> String {
        self.buffer
    }
}

pub fn status_line(status: GameStatus) -> String {
    match status {
        GameStatus::InProgress {
            to_move,
            in_check: true,
        } => format!("{:?} to move, in check", to_move),
        GameStatus::InProgress { to_move, .. } => format!("{:?} to move", to_move),
        GameStatus::Checkmate { winner } => format!("checkmate, {:?} wins", winner),
        GameStatus::Draw(reason) => format!("draw ({:?})", reason),
        GameStatus::TimeExpired => "time expired, draw".to_string(),
    }
}
