//! Wiring: settings, game, input source and console output.

use crate::cli::Cli;
use crate::config::load_settings;
use crate::keyboard::KeyboardInput;
use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Write;
use std::process::ExitCode;
use strictly_minefield::{
    CancelToken, Game, GameController, GameResult, Progress, ScriptedMoves, TracingObserver,
};
use tracing::{error, info, instrument};

/// Shown before the first status line.
pub const HELP_TEXT: &str = "Strictly Minefield\n\n    Use the arrow keys (or w/a/s/d) to move, Esc or q to stop\n    Try to stay alive\n";

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The player left the top edge alive.
    Won,
    /// Input ended before the game did.
    Unfinished,
    /// The player ran out of lives.
    Lost,
    /// Settings were rejected before play started.
    BadConfig,
}

impl RunOutcome {
    /// Process exit code for this outcome.
    pub fn exit_code(self) -> ExitCode {
        match self {
            RunOutcome::Won | RunOutcome::Unfinished => ExitCode::SUCCESS,
            RunOutcome::Lost => ExitCode::from(1),
            RunOutcome::BadConfig => ExitCode::from(2),
        }
    }
}

impl From<Progress> for RunOutcome {
    fn from(progress: Progress) -> Self {
        match progress {
            Progress::Won => RunOutcome::Won,
            Progress::InProgress => RunOutcome::Unfinished,
            Progress::Lost => RunOutcome::Lost,
        }
    }
}

/// Runs one game session, writing player-facing text to `out`.
///
/// Configuration errors are reported to `out` before any play and yield
/// [`RunOutcome::BadConfig`].
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or `out` fails.
#[instrument(skip(cli, out))]
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<RunOutcome> {
    let game = match build_game(cli) {
        Ok(game) => game,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            writeln!(out, "{e}")?;
            return Ok(RunOutcome::BadConfig);
        }
    };

    writeln!(out, "{HELP_TEXT}")?;
    writeln!(out, "{}", game.status_line())?;

    let mut controller = GameController::observed(game, TracingObserver);
    let cancel = CancelToken::new();
    let result = match &cli.moves {
        Some(script) => {
            info!("Playing scripted moves");
            let mut input = ScriptedMoves::from_script(script);
            play(&mut controller, &mut input, out, "\n", &cancel)?
        }
        None => {
            info!("Playing from keyboard");
            let mut input = KeyboardInput::new().context("Failed to enable raw terminal mode")?;
            play(&mut controller, &mut input, out, "\r\n", &cancel)?
        }
    };

    report(cli, &result, out)?;
    Ok(result.progress.into())
}

fn build_game(cli: &Cli) -> Result<Game, strictly_minefield::ConfigError> {
    let mut settings = load_settings(&cli.config)?;
    cli.apply_overrides(&mut settings);
    let mut rng = match settings.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    Game::new(settings, None, &mut rng)
}

fn play(
    controller: &mut GameController,
    input: &mut dyn strictly_minefield::MoveSource,
    out: &mut dyn Write,
    line_end: &str,
    cancel: &CancelToken,
) -> Result<GameResult> {
    let mut write_error = None;
    let mut sink = |line: &str| {
        if write_error.is_some() {
            return;
        }
        if let Err(e) = write!(out, "{line}{line_end}").and_then(|()| out.flush()) {
            write_error = Some(e);
        }
    };
    let result = controller.event_loop(input, &mut sink, cancel);
    if let Some(e) = write_error {
        return Err(e).context("Failed to write game output");
    }
    Ok(result)
}

fn report(cli: &Cli, result: &GameResult, out: &mut dyn Write) -> Result<()> {
    if cli.json {
        writeln!(out, "{}", serde_json::to_string(result)?)?;
    } else {
        writeln!(out, "Game ended: {result}")?;
    }
    Ok(())
}
