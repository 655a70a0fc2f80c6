//! Game settings and their validation.

use crate::{ConfigError, ConfigErrorKind, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Smallest supported board edge.
pub const MIN_BOARD_SIZE: i32 = 1;

/// Largest supported board edge; one row letter per row.
pub const MAX_BOARD_SIZE: i32 = 26;

/// Configuration describing a game session.
///
/// Values are checked once, by [`Settings::validate`], when a game is
/// constructed. Only the mine density is ever coerced; every other
/// out-of-range value is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Board edge length, `1..=26`.
    pub board_size: i32,
    /// Lives at the start of the game, at least 1.
    pub starting_lives: i32,
    /// Column of the start cell on the bottom row, `1..=board_size`.
    pub starting_column: i32,
    /// Percentage of cells holding mines; clamped into `0..=100`.
    pub mine_density_percent: i32,
    /// Seed for reproducible mine fields.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_size: 8,
            starting_lives: 3,
            starting_column: 4,
            mine_density_percent: 10,
            seed: None,
        }
    }
}

impl Settings {
    /// Creates the default settings.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks ranges and clamps the mine density in place.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the board size, starting lives or
    /// starting column are out of range.
    #[instrument]
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            warn!(board_size = self.board_size, "Board size out of range");
            return Err(ConfigErrorKind::BoardSize(self.board_size).into());
        }
        if self.starting_lives < 1 {
            warn!(starting_lives = self.starting_lives, "Starting lives out of range");
            return Err(ConfigErrorKind::StartingLives(self.starting_lives).into());
        }
        if !(1..=self.board_size).contains(&self.starting_column) {
            warn!(starting_column = self.starting_column, "Starting column out of range");
            return Err(ConfigErrorKind::StartingColumn {
                column: self.starting_column,
                board_size: self.board_size,
            }
            .into());
        }

        let clamped = self.mine_density_percent.clamp(0, 100);
        if clamped != self.mine_density_percent {
            debug!(
                requested = self.mine_density_percent,
                clamped, "Clamped mine density"
            );
            self.mine_density_percent = clamped;
        }
        Ok(())
    }

    /// Number of mines asked for: `floor(size² × density / 100)`.
    pub fn target_mine_count(&self) -> usize {
        let size = usize::try_from(self.board_size).unwrap_or(0);
        let density = usize::try_from(self.mine_density_percent.clamp(0, 100)).unwrap_or(0);
        size * size * density / 100
    }

    /// The default start cell, on the bottom row.
    pub fn start_position(&self) -> Position {
        Position::new(self.starting_column, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_mine_count_floors() {
        let settings = Settings {
            board_size: 8,
            mine_density_percent: 10,
            ..Settings::default()
        };
        assert_eq!(settings.target_mine_count(), 6);
    }

    #[test]
    fn test_target_mine_count_ignores_unclamped_density() {
        let settings = Settings {
            board_size: 4,
            mine_density_percent: 250,
            ..Settings::default()
        };
        assert_eq!(settings.target_mine_count(), 16);
    }
}
