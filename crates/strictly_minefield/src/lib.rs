//! Strictly Minefield - cross a hidden minefield, one step per turn.
//!
//! The player starts on the bottom row of a square board, loses a life on
//! every mine they step onto, and wins by moving off the top edge while
//! still alive.
//!
//! # Architecture
//!
//! - **Position**: 1-based cell coordinates with chessboard-style labels
//! - **Settings**: validated board size, lives, start column, mine density
//! - **MineField**: best-effort random mine placement
//! - **Game**: the play state machine and its move rules
//! - **GameController**: the turn loop over abstract input and output
//!
//! # Example
//!
//! ```
//! use strictly_minefield::{CancelToken, GameController, Progress, ScriptedMoves, Settings};
//! use rand::SeedableRng;
//!
//! let settings = Settings { mine_density_percent: 0, ..Settings::default() };
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let mut controller = GameController::new(settings, None, &mut rng)?;
//!
//! let mut lines = Vec::new();
//! let result = controller.event_loop(
//!     &mut ScriptedMoves::from_script("UUUUUUUU"),
//!     &mut lines,
//!     &CancelToken::new(),
//! );
//! assert_eq!(result.progress, Progress::Won);
//! assert_eq!(result.score, 8);
//! # Ok::<(), strictly_minefield::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod error;
mod game;
mod input;
mod mines;
mod observer;
mod position;
mod settings;

pub use controller::GameController;
pub use error::{ConfigError, ConfigErrorKind, InputFault};
pub use game::{BANG, Game, GameResult, Progress, STATUS_DELIMITER, YOU_WON};
pub use input::{CancelToken, Command, Direction, MoveSource, ScriptedMoves, StatusSink};
pub use mines::MineField;
pub use observer::{GameObserver, NoopObserver, TracingObserver, Turn};
pub use position::Position;
pub use settings::{MAX_BOARD_SIZE, MIN_BOARD_SIZE, Settings};
