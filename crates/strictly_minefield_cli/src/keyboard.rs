//! Interactive key input via crossterm.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use strictly_minefield::{Command, Direction, InputFault, MoveSource};
use tracing::{debug, instrument, warn};

/// Reads one key press per turn from the terminal.
///
/// Raw mode is enabled for the lifetime of the value.
#[derive(Debug)]
pub struct KeyboardInput {
    _private: (),
}

impl KeyboardInput {
    /// Switches the terminal into raw mode.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode cannot be enabled.
    #[instrument]
    pub fn new() -> std::io::Result<Self> {
        terminal::enable_raw_mode()?;
        debug!("Raw mode enabled");
        Ok(Self { _private: () })
    }
}

impl Drop for KeyboardInput {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            warn!(error = %e, "Failed to restore terminal mode");
        }
    }
}

impl MoveSource for KeyboardInput {
    fn next_command(&mut self) -> Result<Command, InputFault> {
        loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => return translate(key),
                Ok(_) => continue,
                Err(e) => return Err(InputFault::Failed(e.to_string())),
            }
        }
    }
}

/// Maps a key press to a command; quit keys end the input stream.
#[instrument]
pub fn translate(key: KeyEvent) -> Result<Command, InputFault> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Err(InputFault::Exhausted);
    }
    let command = match key.code {
        KeyCode::Esc | KeyCode::Char('q') => return Err(InputFault::Exhausted),
        KeyCode::Up | KeyCode::Char('w') => Command::Move(Direction::Up),
        KeyCode::Left | KeyCode::Char('a') => Command::Move(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') => Command::Move(Direction::Right),
        KeyCode::Down | KeyCode::Char('s') => Command::Move(Direction::Down),
        other => Command::Other(format!("{other:?}")),
    };
    Ok(command)
}
