//! Command-line interface for the minefield game.

use clap::Parser;
use strictly_minefield::Settings;
use tracing::{debug, instrument};

/// Strictly Minefield - cross the board without running out of lives
#[derive(Parser, Debug, Clone)]
#[command(name = "minefield")]
#[command(about = "Cross a hidden minefield from the bottom row to beyond the top edge", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "minefield.toml")]
    pub config: std::path::PathBuf,

    /// Board edge length (1-26)
    #[arg(long, allow_negative_numbers = true)]
    pub board_size: Option<i32>,

    /// Starting lives
    #[arg(long, allow_negative_numbers = true)]
    pub lives: Option<i32>,

    /// Starting column on the bottom row
    #[arg(long, allow_negative_numbers = true)]
    pub column: Option<i32>,

    /// Percentage of cells holding mines
    #[arg(long, allow_negative_numbers = true)]
    pub density: Option<i32>,

    /// Seed for a reproducible mine field
    #[arg(long)]
    pub seed: Option<u64>,

    /// Play a scripted sequence of moves (U, D, L, R) instead of reading keys
    #[arg(long)]
    pub moves: Option<String>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Print the final result as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Applies flag values on top of file or default settings.
    #[instrument(skip(self))]
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(board_size) = self.board_size {
            settings.board_size = board_size;
        }
        if let Some(lives) = self.lives {
            settings.starting_lives = lives;
        }
        if let Some(column) = self.column {
            settings.starting_column = column;
        }
        if let Some(density) = self.density {
            settings.mine_density_percent = density;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        debug!(?settings, "Settings after command-line overrides");
    }
}
