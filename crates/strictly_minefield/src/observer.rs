//! Optional observation of a game session.

use crate::{Command, Game, GameResult, InputFault, Progress};
use derive_getters::Getters;
use tracing::{debug, info};

/// One completed turn, as seen by an observer.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Turn {
    /// The command that was pulled.
    command: Command,
    /// Whether the game accepted it as a move.
    accepted: bool,
    /// The line sent to the output sink.
    line: String,
    /// Progress after the turn.
    progress: Progress,
}

impl Turn {
    /// Records a completed turn.
    pub fn new(command: Command, accepted: bool, line: String, progress: Progress) -> Self {
        Self {
            command,
            accepted,
            line,
            progress,
        }
    }
}

/// Receives notices from a game controller.
///
/// Every method defaults to doing nothing. Observers never affect play.
pub trait GameObserver {
    /// The controller took ownership of a new game.
    fn on_created(&self, _game: &Game) {}

    /// A turn completed and its line was emitted.
    fn on_turn(&self, _turn: &Turn) {}

    /// The input source stopped producing commands.
    fn on_input_fault(&self, _fault: &InputFault) {}

    /// The turn loop returned.
    fn on_finished(&self, _result: &GameResult) {}
}

/// Ignores every notice.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl GameObserver for NoopObserver {}

/// Forwards notices to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl GameObserver for TracingObserver {
    fn on_created(&self, game: &Game) {
        info!(
            board_size = game.board_size(),
            lives = game.lives_left(),
            start = %game.player_position(),
            "Session started"
        );
    }

    fn on_turn(&self, turn: &Turn) {
        info!(line = %turn.line(), "Turn");
        debug!(command = %turn.command(), accepted = turn.accepted(), progress = %turn.progress());
    }

    fn on_input_fault(&self, fault: &InputFault) {
        info!(%fault, "Finished when input ended");
    }

    fn on_finished(&self, result: &GameResult) {
        info!(progress = %result.progress, score = result.score, "Session finished");
    }
}
