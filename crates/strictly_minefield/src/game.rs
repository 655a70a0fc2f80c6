//! Play state and move rules.
//!
//! A [`Game`] is created once per session from validated [`Settings`] and
//! mutated only through its move operations. Once it is over, further
//! moves are no-ops.

use crate::{ConfigError, ConfigErrorKind, Direction, MineField, Position, Settings};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Joins the parts of a status line.
pub const STATUS_DELIMITER: &str = " | ";

/// Suffix shown while standing on a mine.
pub const BANG: &str = "BANG!";

/// Suffix shown once the game is won.
pub const YOU_WON: &str = "Congratulations, You Won!";

/// Where the game stands. Exactly one holds at any time.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Progress {
    /// Still alive and still on the board.
    InProgress,
    /// Left the top edge with lives remaining.
    Won,
    /// Out of lives.
    Lost,
}

impl Progress {
    /// Whether the game has ended.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Progress::InProgress)
    }
}

/// Outcome reported by the turn loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// Progress when the loop exited.
    pub progress: Progress,
    /// Total accepted moves.
    pub score: u32,
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} after {} moves", self.progress, self.score)
    }
}

/// A minefield-crossing game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board_size: i32,
    lives_left: u32,
    player_position: Position,
    player_move_count: u32,
    mines: MineField,
}

impl Game {
    /// Creates a game with randomly placed mines.
    ///
    /// The player starts at `initial`, or at the bottom of the starting
    /// column when `None`. Mines never cover the start cell.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the settings are out of range or
    /// `initial` is off the board. Nothing is generated in that case.
    #[instrument(skip(rng))]
    pub fn new<R: Rng>(
        settings: Settings,
        initial: Option<Position>,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        let (settings, start) = Self::resolve(settings, initial)?;
        let mines = MineField::generate(&settings, start, rng);
        Ok(Self::assemble(&settings, start, mines))
    }

    /// Creates a game with an explicit mine field.
    ///
    /// Settings and `initial` are validated exactly as in [`Game::new`];
    /// the mine density is not used. A mine on the start cell is dropped.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the settings are out of range or
    /// `initial` is off the board.
    #[instrument(skip(mines), fields(mine_count = mines.len()))]
    pub fn with_mines(
        settings: Settings,
        initial: Option<Position>,
        mines: MineField,
    ) -> Result<Self, ConfigError> {
        let (settings, start) = Self::resolve(settings, initial)?;
        Ok(Self::assemble(&settings, start, mines))
    }

    fn resolve(
        mut settings: Settings,
        initial: Option<Position>,
    ) -> Result<(Settings, Position), ConfigError> {
        settings.validate()?;
        let size = settings.board_size;
        let start = match initial {
            Some(position) if position.is_inside(1, 1, size, size) => position,
            Some(position) => {
                return Err(ConfigErrorKind::InitialPosition {
                    position,
                    board_size: size,
                }
                .into());
            }
            None => settings.start_position(),
        };
        Ok((settings, start))
    }

    fn assemble(settings: &Settings, start: Position, mut mines: MineField) -> Self {
        if mines.remove(start) {
            debug!(start = %start, "Dropped mine on the start cell");
        }
        // Validated settings guarantee at least one life.
        let lives = u32::try_from(settings.starting_lives).unwrap_or(1);
        info!(
            board_size = settings.board_size,
            lives,
            start = %start,
            mine_count = mines.len(),
            "Game created"
        );
        Self {
            board_size: settings.board_size,
            lives_left: lives,
            player_position: start,
            player_move_count: 0,
            mines,
        }
    }

    /// Moves one row up. Leaving the top edge wins.
    pub fn move_up(&mut self) -> bool {
        self.step(Direction::Up)
    }

    /// Moves one column left unless against the left wall.
    pub fn move_left(&mut self) -> bool {
        self.step(Direction::Left)
    }

    /// Moves one column right unless against the right wall.
    pub fn move_right(&mut self) -> bool {
        self.step(Direction::Right)
    }

    /// Moves one row down unless on the bottom row.
    pub fn move_down(&mut self) -> bool {
        self.step(Direction::Down)
    }

    /// Moves in `direction`; returns whether the move was accepted.
    ///
    /// Rejected moves change nothing, including the move count.
    #[instrument(skip(self), fields(from = %self.player_position))]
    pub fn step(&mut self, direction: Direction) -> bool {
        if !self.can_move(direction) {
            debug!("Move rejected");
            return false;
        }

        let (dx, dy) = direction.delta();
        self.player_position = self.player_position.add(dx, dy);
        self.player_move_count += 1;
        if self.is_on_mine() {
            self.lives_left = self.lives_left.saturating_sub(1);
            info!(at = %self.player_position, lives_left = self.lives_left, "Stepped on a mine");
        }
        debug!(to = %self.player_position, moves = self.player_move_count, "Moved");
        true
    }

    fn can_move(&self, direction: Direction) -> bool {
        if self.is_game_over() {
            return false;
        }
        match direction {
            Direction::Up => self.player_position.y() <= self.board_size,
            Direction::Down => self.player_position.y() > 1,
            Direction::Left => self.player_position.x() > 1,
            Direction::Right => self.player_position.x() < self.board_size,
        }
    }

    /// Whether the player stands on a mine.
    pub fn is_on_mine(&self) -> bool {
        self.mines.contains(self.player_position)
    }

    /// Alive and past the top edge.
    pub fn is_won(&self) -> bool {
        self.lives_left > 0 && self.player_position.y() > self.board_size
    }

    /// Out of lives or past the top edge.
    pub fn is_game_over(&self) -> bool {
        self.lives_left == 0 || self.player_position.y() > self.board_size
    }

    /// Current progress.
    pub fn progress(&self) -> Progress {
        if self.is_won() {
            Progress::Won
        } else if self.lives_left == 0 {
            Progress::Lost
        } else {
            Progress::InProgress
        }
    }

    /// Progress and score as they stand now.
    pub fn result(&self) -> GameResult {
        GameResult {
            progress: self.progress(),
            score: self.player_move_count,
        }
    }

    /// Renders the single-line status.
    ///
    /// `BANG!` and the win message are appended from the current state,
    /// independently of each other.
    pub fn status_line(&self) -> String {
        let mut line = format!(
            "Current Position: {} | Lives Left {} | Moves Made {}",
            self.player_position, self.lives_left, self.player_move_count
        );
        if self.is_on_mine() {
            line.push_str(STATUS_DELIMITER);
            line.push_str(BANG);
        }
        if self.is_won() {
            line.push_str(STATUS_DELIMITER);
            line.push_str(YOU_WON);
        }
        line
    }

    /// Board edge length.
    pub fn board_size(&self) -> i32 {
        self.board_size
    }

    /// Lives remaining.
    pub fn lives_left(&self) -> u32 {
        self.lives_left
    }

    /// Where the player stands.
    pub fn player_position(&self) -> Position {
        self.player_position
    }

    /// Accepted moves so far.
    pub fn player_move_count(&self) -> u32 {
        self.player_move_count
    }

    /// The mine field.
    pub fn mines(&self) -> &MineField {
        &self.mines
    }
}
