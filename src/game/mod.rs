pub mod clock;
pub mod display;
pub mod session;

pub use clock::GameClock;
pub use session::{EngineConfig, GameMode, GameStatus, Session, SessionError};
