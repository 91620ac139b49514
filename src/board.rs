use bitvec::prelude::*;

use crate::error::{ConfigError, MoveError};
use crate::moves::{self, Move};

/// Largest supported tile count, bounded by the bit array backing the open set.
pub const MAX_TILES: usize = 32;

/// Shape of a board: how many tiles it has and how many may be flipped per move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    /// Number of tiles; the tile values are `1..=tiles`.
    pub tiles: u8,
    /// Maximum number of tiles a single move may flip.
    pub max_flips: usize,
}

impl Default for BoardConfig {
    /// The standard box: tiles 1..=9, at most two tiles flipped per move.
    fn default() -> Self {
        Self {
            tiles: 9,
            max_flips: 2,
        }
    }
}

/// A [BoardState] tracks which tiles of a Shut-the-Box board are still open
/// and enumerates the legal moves for a given dice throw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardState {
    config: BoardConfig,
    // Bit `v - 1` is set iff tile `v` is open. Only bits below `config.tiles` are ever set.
    open: BitArr!(for MAX_TILES),
}

impl BoardState {
    /// Creates a board with every tile open.
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        if config.tiles == 0 {
            return Err(ConfigError::NoTiles);
        }
        if usize::from(config.tiles) > MAX_TILES {
            return Err(ConfigError::TooManyTiles {
                requested: config.tiles,
                max: MAX_TILES as u8,
            });
        }
        if config.max_flips == 0 {
            return Err(ConfigError::NoFlipsAllowed);
        }
        let mut board = Self {
            config,
            open: bitarr![0; MAX_TILES],
        };
        board.reset();
        Ok(board)
    }

    pub fn standard() -> Self {
        Self::new(BoardConfig::default()).expect("the default config is valid")
    }

    pub fn tile_count(&self) -> u8 {
        self.config.tiles
    }

    pub fn max_flips(&self) -> usize {
        self.config.max_flips
    }

    pub fn is_open(&self, tile: u8) -> bool {
        tile >= 1 && tile <= self.config.tiles && self.open[usize::from(tile) - 1]
    }

    /// The currently open tile values, in ascending order.
    pub fn open_tiles(&self) -> Vec<u8> {
        self.open.iter_ones().map(|index| index as u8 + 1).collect()
    }

    /// Sum of the open tile values. This is the conventional final score of a
    /// game that ended with no legal move left.
    pub fn open_sum(&self) -> u32 {
        self.open.iter_ones().map(|index| index as u32 + 1).sum()
    }

    /// Returns every distinct subset of the open tiles, of size 1 up to
    /// `max_flips`, whose values sum exactly to `target`. An empty result is
    /// not an error; it means the throw leaves no legal move.
    pub fn legal_moves(&self, target: u32) -> Vec<Move> {
        moves::enumerate(&self.open_tiles(), target, self.config.max_flips)
    }

    /// Closes every tile of `mv`. All checks happen before the first
    /// mutation, so a failed flip leaves the board unchanged.
    pub fn flip(&mut self, mv: &Move) -> Result<(), MoveError> {
        if mv.len() > self.config.max_flips {
            return Err(MoveError::TooManyTiles {
                len: mv.len(),
                max_flips: self.config.max_flips,
            });
        }
        for &tile in mv.tiles() {
            if !self.is_open(tile) {
                return Err(MoveError::TileNotOpen(tile));
            }
        }
        for &tile in mv.tiles() {
            self.open.set(usize::from(tile) - 1, false);
        }
        Ok(())
    }

    /// Reopens the full tile set. Idempotent.
    pub fn reset(&mut self) {
        self.open.fill(false);
        for index in 0..usize::from(self.config.tiles) {
            self.open.set(index, true);
        }
    }

    /// True iff every tile is closed (the box is shut). Whether a game is
    /// stuck instead depends on the current throw; drivers detect that by an
    /// empty [Self::legal_moves] result.
    pub fn is_terminal(&self) -> bool {
        self.open.not_any()
    }
}
