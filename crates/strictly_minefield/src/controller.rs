//! Turn loop around a single game.

use crate::{
    CancelToken, Command, ConfigError, Game, GameObserver, GameResult, MoveSource, NoopObserver,
    Position, STATUS_DELIMITER, Settings, StatusSink, Turn,
};
use rand::Rng;
use tracing::{debug, info, instrument};

/// Drives a [`Game`] from an input source and renders its output.
///
/// Owns exactly one game for its lifetime. If the input ends before the
/// game does, the game stays live and a later [`GameController::event_loop`]
/// call resumes it.
pub struct GameController {
    game: Game,
    observer: Box<dyn GameObserver>,
}

impl std::fmt::Debug for GameController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("game", &self.game)
            .finish_non_exhaustive()
    }
}

impl GameController {
    /// Creates a controller around a new, randomly mined game.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the settings or `initial` are invalid.
    #[instrument(skip(rng))]
    pub fn new<R: Rng>(
        settings: Settings,
        initial: Option<Position>,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        Ok(Self::from_game(Game::new(settings, initial, rng)?))
    }

    /// Wraps an existing game without observation.
    pub fn from_game(game: Game) -> Self {
        Self::observed(game, NoopObserver)
    }

    /// Wraps an existing game and reports to `observer`.
    pub fn observed(game: Game, observer: impl GameObserver + 'static) -> Self {
        observer.on_created(&game);
        Self {
            game,
            observer: Box::new(observer),
        }
    }

    /// The owned game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Renders the current status line.
    pub fn status_line(&self) -> String {
        self.game.status_line()
    }

    /// Dispatches one command; returns whether the game accepted a move.
    ///
    /// Unrecognised commands are ignored and cost no move.
    #[instrument(skip(self))]
    pub fn apply(&mut self, command: &Command) -> bool {
        match command.direction() {
            Some(direction) => self.game.step(direction),
            None => {
                debug!("Ignored command");
                false
            }
        }
    }

    /// Runs turns until the game ends, input stops, or `cancel` is set.
    ///
    /// Each turn pulls one command, applies it and emits
    /// `"Moved:{command} | {status}"`. An input fault ends the loop quietly;
    /// it is reported only through the returned progress.
    #[instrument(skip_all)]
    pub fn event_loop<S, O>(
        &mut self,
        input: &mut S,
        output: &mut O,
        cancel: &CancelToken,
    ) -> GameResult
    where
        S: MoveSource + ?Sized,
        O: StatusSink + ?Sized,
    {
        info!(status = %self.game.status_line(), "Event loop started");
        while !cancel.is_cancelled() && !self.game.is_game_over() {
            let command = match input.next_command() {
                Ok(command) => command,
                Err(fault) => {
                    info!(%fault, "Input ended before the game");
                    self.observer.on_input_fault(&fault);
                    break;
                }
            };

            let accepted = self.apply(&command);
            let line = format!("Moved:{command}{STATUS_DELIMITER}{}", self.game.status_line());
            output.emit(&line);
            self.observer.on_turn(&Turn::new(
                command,
                accepted,
                line,
                self.game.progress(),
            ));
        }

        let result = self.game.result();
        info!(%result, cancelled = cancel.is_cancelled(), "Event loop finished");
        self.observer.on_finished(&result);
        result
    }
}
