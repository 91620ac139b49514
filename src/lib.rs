mod board;
mod dice;
mod error;
mod moves;

pub use board::{BoardConfig, BoardState, MAX_TILES};
pub use dice::Dice;
pub use error::{ConfigError, MoveError};
pub use moves::Move;
