mod input;

pub use input::{parse_player_input, read_player_input, InputError, PlayerInput};
