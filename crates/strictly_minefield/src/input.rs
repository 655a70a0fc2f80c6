//! Turn-loop seams: commands in, status lines out, cooperative cancellation.

use crate::InputFault;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, instrument};

/// A step in one of the four compass directions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Direction {
    /// Towards the top edge; leaving it wins.
    Up,
    /// Towards the left wall.
    Left,
    /// Towards the right wall.
    Right,
    /// Towards the bottom edge.
    Down,
}

impl Direction {
    /// The `(dx, dy)` offset of one step.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, -1),
        }
    }
}

/// One discrete command pulled from an input source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Command {
    /// Move one cell.
    #[display("{}", _0)]
    Move(Direction),
    /// Anything else. Ignored by the game.
    #[display("{}", _0)]
    Other(String),
}

impl Command {
    /// Parses a script character: `U`, `D`, `L`, `R` in either case.
    #[instrument]
    pub fn from_char(c: char) -> Self {
        match c.to_ascii_uppercase() {
            'U' => Command::Move(Direction::Up),
            'D' => Command::Move(Direction::Down),
            'L' => Command::Move(Direction::Left),
            'R' => Command::Move(Direction::Right),
            _ => Command::Other(c.to_string()),
        }
    }

    /// The direction, if this is a move.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Command::Move(direction) => Some(*direction),
            Command::Other(_) => None,
        }
    }
}

impl From<Direction> for Command {
    fn from(direction: Direction) -> Self {
        Command::Move(direction)
    }
}

/// Source of commands for the turn loop.
///
/// Each call blocks until one command is available. An `Err` ends the turn
/// stream.
pub trait MoveSource {
    /// Produces the next command.
    fn next_command(&mut self) -> Result<Command, InputFault>;
}

impl<F> MoveSource for F
where
    F: FnMut() -> Result<Command, InputFault>,
{
    fn next_command(&mut self) -> Result<Command, InputFault> {
        self()
    }
}

/// A fixed sequence of commands; exhausted when the iterator ends.
#[derive(Debug, Clone)]
pub struct ScriptedMoves<I> {
    commands: I,
}

impl<I> ScriptedMoves<I>
where
    I: Iterator<Item = Command>,
{
    /// Wraps any iterator of commands.
    pub fn new(commands: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            commands: commands.into_iter(),
        }
    }
}

impl ScriptedMoves<std::vec::IntoIter<Command>> {
    /// Parses a script such as `"UURRL"`, one command per character.
    ///
    /// Whitespace separates commands and is skipped.
    #[instrument]
    pub fn from_script(script: &str) -> Self {
        let commands: Vec<Command> = script
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(Command::from_char)
            .collect();
        debug!(count = commands.len(), "Parsed move script");
        Self::new(commands)
    }
}

impl<I> MoveSource for ScriptedMoves<I>
where
    I: Iterator<Item = Command>,
{
    fn next_command(&mut self) -> Result<Command, InputFault> {
        self.commands.next().ok_or(InputFault::Exhausted)
    }
}

/// Destination for one line of player-facing text per turn.
pub trait StatusSink {
    /// Accepts one line.
    fn emit(&mut self, line: &str);
}

impl<F> StatusSink for F
where
    F: FnMut(&str),
{
    fn emit(&mut self, line: &str) {
        self(line)
    }
}

impl StatusSink for Vec<String> {
    fn emit(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

/// Pollable cancellation flag shared between the loop and its owner.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates an uncancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation; the current turn still completes.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_script_parsing() {
        let mut moves = ScriptedMoves::from_script("uR x");
        assert_eq!(moves.next_command(), Ok(Command::Move(Direction::Up)));
        assert_eq!(moves.next_command(), Ok(Command::Move(Direction::Right)));
        assert_eq!(moves.next_command(), Ok(Command::Other("x".to_string())));
        assert_eq!(moves.next_command(), Err(InputFault::Exhausted));
    }

    #[test]
    fn test_script_whitespace_only_separates() {
        let mut moves = ScriptedMoves::from_script(" U\tU\nR ");
        for _ in 0..2 {
            assert_eq!(moves.next_command(), Ok(Command::Move(Direction::Up)));
        }
        assert_eq!(moves.next_command(), Ok(Command::Move(Direction::Right)));
        assert_eq!(moves.next_command(), Err(InputFault::Exhausted));
    }

    #[test]
    fn test_command_display() {
        assert_eq!(Command::Move(Direction::Left).to_string(), "Left");
        assert_eq!(Command::Other("Enter".to_string()).to_string(), "Enter");
    }

    #[test]
    fn test_deltas_are_unit_steps() {
        for direction in Direction::iter() {
            let (dx, dy) = direction.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }

    #[test]
    fn test_cancel_is_shared_between_clones() {
        let token = CancelToken::new();
        let handle = token.clone();
        assert!(!token.is_cancelled());
        handle.cancel();
        assert!(token.is_cancelled());
    }
}
