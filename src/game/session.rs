use std::time::Duration;

use log::{info, warn};
use shakmaty::{Color, Piece, Role, Square};
use thiserror::Error;

use crate::alpha_beta_searcher::{
    Score, SearchContext, SearchDepth, SearchError, SearchStats, TerminalState,
};
use crate::board::{BoardError, ChessMove, ChessMoveList, ChessPosition};
use crate::chess_search::search_best_move;

use super::clock::GameClock;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameMode {
    PlayerVsComputer { human: Color },
    PlayerVsPlayer,
    ComputerVsComputer,
}

impl GameMode {
    pub fn is_computer(&self, color: Color) -> bool {
        match self {
            GameMode::PlayerVsComputer { human } => *human != color,
            GameMode::PlayerVsPlayer => false,
            GameMode::ComputerVsComputer => true,
        }
    }
}

/// Session configuration
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub search_depth: SearchDepth,
    pub starting_position: ChessPosition,
    pub mode: GameMode,
    pub time_limit: Option<Duration>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: SearchDepth::default(),
            starting_position: ChessPosition::default(),
            mode: GameMode::PlayerVsComputer {
                human: Color::White,
            },
            time_limit: None,
        }
    }
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("the game is over")]
    GameOver,
    #[error("the piece to move belongs to the computer")]
    NotYourTurn,
    #[error("it is not the computer's turn")]
    NotComputerTurn,
    #[error("the computer is already thinking")]
    AlreadyThinking,
    #[error("illegal move: {0}")]
    IllegalMove(String),
    #[error("there are no moves to undo")]
    NothingToUndo,
    #[error("search error: {0}")]
    Search(#[from] SearchError),
    #[error("board error: {0}")]
    Board(#[from] BoardError),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    InProgress { to_move: Color, in_check: bool },
    Checkmate { winner: Color },
    Draw(TerminalState),
    /// The game clock ran out. Scored as a draw.
    TimeExpired,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

/// A game in progress: the authoritative position, the search state that
/// belongs to it, and the rules about who may move when.
///
/// The transposition cache is cleared every time the position changes
/// outside a search (a move by either side, an undo, or a new game).
pub struct Session {
    config: EngineConfig,
    position: ChessPosition,
    search_context: SearchContext<ChessMove>,
    clock: GameClock,
    thinking: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let mut session = Self {
            position: config.starting_position.clone(),
            search_context: SearchContext::new(config.search_depth),
            clock: GameClock::new(config.time_limit),
            thinking: false,
            config,
        };
        session.sync_clock();
        session
    }

    /// Resets the board to the configured starting position.
    pub fn new_game(&mut self) {
        self.position = self.config.starting_position.clone();
        self.search_context.clear_cache();
        self.search_context.reset_stats();
        self.clock = GameClock::new(self.config.time_limit);
        self.sync_clock();
        self.thinking = false;
        info!("new game from {}", self.position.fen());
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn mode(&self) -> GameMode {
        self.config.mode
    }

    pub fn position(&self) -> &ChessPosition {
        &self.position
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    pub fn fen(&self) -> String {
        self.position.fen()
    }

    pub fn turn(&self) -> Color {
        self.position.turn()
    }

    pub fn is_thinking(&self) -> bool {
        self.thinking
    }

    pub fn search_depth(&self) -> SearchDepth {
        self.search_context.search_depth()
    }

    pub fn set_search_depth(&mut self, depth: SearchDepth) {
        self.config.search_depth = depth;
        self.search_context.set_search_depth(depth);
        self.search_context.clear_cache();
    }

    /// A result reached on the board stands even if the clock runs out later.
    pub fn status(&self) -> GameStatus {
        match self.position.terminal_state() {
            TerminalState::None if self.clock.is_expired() => GameStatus::TimeExpired,
            TerminalState::None => GameStatus::InProgress {
                to_move: self.position.turn(),
                in_check: self.position.is_check(),
            },
            TerminalState::Checkmate => GameStatus::Checkmate {
                winner: self.position.turn().other(),
            },
            draw => GameStatus::Draw(draw),
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.status().is_over()
    }

    pub fn is_computer_turn(&self) -> bool {
        self.config.mode.is_computer(self.position.turn())
    }

    pub fn legal_moves_from(&self, square: Square) -> ChessMoveList {
        self.position.legal_moves_from(square)
    }

    /// Pieces taken by `by` so far.
    pub fn captured_pieces(&self, by: Color) -> Vec<Piece> {
        self.position.captured_pieces(by)
    }

    pub fn last_move(&self) -> Option<&ChessMove> {
        self.position.last_move()
    }

    pub fn search_stats(&self) -> &SearchStats {
        self.search_context.stats()
    }

    pub fn last_score(&self) -> Option<Score> {
        self.search_context.last_score()
    }

    /// Plays a human move. A pawn reaching the last rank promotes to
    /// `promotion`, or to a queen if none is given.
    pub fn make_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Role>,
    ) -> Result<ChessMove, SessionError> {
        if self.is_game_over() {
            return Err(SessionError::GameOver);
        }
        if self.is_computer_turn() {
            return Err(SessionError::NotYourTurn);
        }

        let chess_move = self
            .position
            .find_move(from, to, promotion)
            .ok_or_else(|| SessionError::IllegalMove(format!("{}{}", from, to)))?;

        self.apply_move(&chess_move)?;
        Ok(chess_move)
    }

    /// Searches for and plays the computer's move. Returns `Ok(None)` when the
    /// side to move has no legal moves.
    pub fn request_computer_move(&mut self) -> Result<Option<ChessMove>, SessionError> {
        if self.thinking {
            return Err(SessionError::AlreadyThinking);
        }
        if self.is_game_over() {
            return Err(SessionError::GameOver);
        }
        if !self.is_computer_turn() {
            return Err(SessionError::NotComputerTurn);
        }

        self.thinking = true;
        let result = search_best_move(&mut self.search_context, &mut self.position);
        self.thinking = false;

        match result? {
            Some(best_move) => {
                self.apply_move(&best_move)?;
                Ok(Some(best_move))
            }
            None => {
                warn!("search found no move in {}", self.position.fen());
                Ok(None)
            }
        }
    }

    /// Takes back moves and returns them, most recent first. Against the
    /// computer this takes back a full turn (two plies) when there is one.
    pub fn undo(&mut self) -> Result<Vec<ChessMove>, SessionError> {
        if self.thinking {
            return Err(SessionError::AlreadyThinking);
        }

        let available = self.position.ply();
        if available == 0 {
            return Err(SessionError::NothingToUndo);
        }

        let plies = match self.config.mode {
            GameMode::PlayerVsComputer { .. } if available >= 2 => 2,
            _ => 1,
        };

        let mut undone = Vec::with_capacity(plies);
        for _ in 0..plies {
            undone.push(self.position.take_back()?);
        }
        self.search_context.clear_cache();
        self.sync_clock();
        info!(
            "took back {} ply, now at {}",
            undone.len(),
            self.position.fen()
        );
        Ok(undone)
    }

    fn apply_move(&mut self, chess_move: &ChessMove) -> Result<(), SessionError> {
        self.position.play(chess_move)?;
        self.search_context.clear_cache();
        self.sync_clock();
        info!("{:?} played {}", self.position.turn().other(), chess_move);
        Ok(())
    }

    /// The countdown only runs while the position is still playable.
    fn sync_clock(&mut self) {
        if self.position.terminal_state().is_terminal() {
            self.clock.stop();
        } else {
            self.clock.resume();
        }
    }
}
