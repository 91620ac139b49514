use rand::Rng;

use crate::error::ConfigError;

/// A [Dice] produces the sum of rolling `count` fair dice with `sides` sides each.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dice {
    count: u32,
    sides: u32,
}

impl Default for Dice {
    /// Two six-sided dice, the standard Shut-the-Box throw.
    fn default() -> Self {
        Self { count: 2, sides: 6 }
    }
}

impl Dice {
    pub fn new(count: u32, sides: u32) -> Result<Self, ConfigError> {
        if count == 0 {
            return Err(ConfigError::NoDice);
        }
        if sides == 0 {
            return Err(ConfigError::NoSides);
        }
        Ok(Self { count, sides })
    }

    pub fn min_sum(&self) -> u32 {
        self.count
    }

    pub fn max_sum(&self) -> u32 {
        self.count * self.sides
    }

    /// Returns the sum of `count` independent uniform draws in `1..=sides`.
    /// Summing individual dice keeps the true distribution of the sum;
    /// drawing uniformly from `min_sum..=max_sum` would not.
    pub fn throw_with(&self, rng: &mut impl Rng) -> u32 {
        (0..self.count).map(|_| rng.gen_range(1..=self.sides)).sum()
    }

    pub fn throw(&self) -> u32 {
        self.throw_with(&mut rand::thread_rng())
    }
}
