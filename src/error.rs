use thiserror::Error;

/// Rejected construction parameters for [crate::BoardState] or [crate::Dice].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("a board needs at least one tile")]
    NoTiles,

    #[error("{requested} tiles requested but at most {max} are supported")]
    TooManyTiles { requested: u8, max: u8 },

    #[error("at least one tile must be flippable per move")]
    NoFlipsAllowed,

    #[error("a throw needs at least one die")]
    NoDice,

    #[error("a die needs at least one side")]
    NoSides,
}

/// Rejected move, either at construction ([crate::Move::new]) or when applied
/// to a board ([crate::BoardState::flip]).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MoveError {
    #[error("a move must flip at least one tile")]
    Empty,

    #[error("tile {0} appears more than once in the move")]
    DuplicateTile(u8),

    #[error("tile {0} is not open")]
    TileNotOpen(u8),

    #[error("move flips {len} tiles but at most {max_flips} may be flipped per move")]
    TooManyTiles { len: usize, max_flips: usize },
}
