//! Error types for game construction and turn input.

use crate::Position;
use derive_more::{Display, Error};
use tracing::instrument;

/// What was wrong with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigErrorKind {
    /// Board size outside `1..=26`.
    #[display("board size {} must be between 1 and 26", _0)]
    BoardSize(i32),

    /// Fewer than one starting life.
    #[display("starting lives {} must be at least 1", _0)]
    StartingLives(i32),

    /// Starting column not on the board.
    #[display("starting column {} must be between 1 and {}", column, board_size)]
    StartingColumn {
        /// The requested column.
        column: i32,
        /// The validated board size.
        board_size: i32,
    },

    /// Explicit initial position not on the board.
    #[display("initial position {} must be on the {}x{} board", position, board_size, board_size)]
    InitialPosition {
        /// The requested position.
        position: Position,
        /// The validated board size.
        board_size: i32,
    },

    /// A settings file could not be read.
    #[display("failed to read settings: {}", _0)]
    Read(String),

    /// A settings file could not be parsed.
    #[display("failed to parse settings: {}", _0)]
    Parse(String),
}

/// Configuration error with location tracking.
///
/// Raised once, during game construction or settings loading. No game
/// is produced when this is returned.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", kind, file, line)]
pub struct ConfigError {
    /// What went wrong.
    pub kind: ConfigErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the kind of configuration error.
    pub fn kind(&self) -> &ConfigErrorKind {
        &self.kind
    }
}

impl From<ConfigErrorKind> for ConfigError {
    #[track_caller]
    fn from(kind: ConfigErrorKind) -> Self {
        Self::new(kind)
    }
}

/// The input source could not produce another command.
///
/// The turn loop treats this as the end of the turn stream, never as a
/// game failure.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputFault {
    /// No more commands are available.
    #[display("input exhausted")]
    Exhausted,

    /// The source failed while reading.
    #[display("input failed: {}", _0)]
    Failed(String),
}

impl std::error::Error for InputFault {}
