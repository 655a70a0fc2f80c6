//! Mine placement.

use crate::{Position, Settings};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, instrument};

/// The set of mined cells, ordered by `(x, y)`.
///
/// Generated once per game and never regenerated during play. Mines are
/// not removed when stepped on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MineField {
    mines: BTreeSet<Position>,
}

impl MineField {
    /// Creates an empty mine field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places mines at random, best effort.
    ///
    /// Draws `ceil(target × 1.2)` candidate cells uniformly over the board,
    /// drops duplicates and `avoid`, then keeps the first `target` in
    /// `(x, y)` order. The result may hold fewer than
    /// [`Settings::target_mine_count`] mines.
    ///
    /// Expects settings that already passed [`Settings::validate`].
    #[instrument(skip(rng))]
    pub fn generate<R: Rng>(settings: &Settings, avoid: Position, rng: &mut R) -> Self {
        let target = settings.target_mine_count();
        if target == 0 || settings.board_size < 1 {
            debug!("No mines requested");
            return Self::new();
        }

        let draws = (target * 6).div_ceil(5);
        let size = settings.board_size;
        let mut candidates: BTreeSet<Position> = (0..draws)
            .map(|_| Position::new(rng.random_range(1..=size), rng.random_range(1..=size)))
            .collect();
        candidates.remove(&avoid);

        let mines: BTreeSet<Position> = candidates.into_iter().take(target).collect();
        debug!(target, draws, placed = mines.len(), "Mines placed");
        Self { mines }
    }

    /// Whether `position` holds a mine.
    pub fn contains(&self, position: Position) -> bool {
        self.mines.contains(&position)
    }

    /// Adds a mine, returning `false` if one was already there.
    pub fn insert(&mut self, position: Position) -> bool {
        self.mines.insert(position)
    }

    /// Clears a mine, returning whether one was there.
    pub fn remove(&mut self, position: Position) -> bool {
        self.mines.remove(&position)
    }

    /// Number of mines.
    pub fn len(&self) -> usize {
        self.mines.len()
    }

    /// Whether there are no mines.
    pub fn is_empty(&self) -> bool {
        self.mines.is_empty()
    }

    /// Mines in `(x, y)` order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.mines.iter().copied()
    }
}

impl FromIterator<Position> for MineField {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self {
            mines: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn settings(board_size: i32, mine_density_percent: i32) -> Settings {
        Settings {
            board_size,
            mine_density_percent,
            ..Settings::default()
        }
    }

    #[test]
    fn test_zero_density_places_nothing() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = MineField::generate(&settings(8, 0), Position::new(4, 1), &mut rng);
        assert!(field.is_empty());
    }

    #[test]
    fn test_never_exceeds_target() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let s = settings(8, 30);
            let field = MineField::generate(&s, Position::new(4, 1), &mut rng);
            assert!(field.len() <= s.target_mine_count());
        }
    }

    #[test]
    fn test_avoids_start_cell_on_a_full_board() {
        let mut rng = StdRng::seed_from_u64(3);
        let field = MineField::generate(&settings(2, 100), Position::new(1, 1), &mut rng);
        assert!(!field.contains(Position::new(1, 1)));
        assert!(field.len() <= 3);
    }

    #[test]
    fn test_same_seed_same_field() {
        let s = settings(12, 20);
        let a = MineField::generate(&s, Position::new(1, 1), &mut StdRng::seed_from_u64(99));
        let b = MineField::generate(&s, Position::new(1, 1), &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_mines_are_on_the_board() {
        let mut rng = StdRng::seed_from_u64(11);
        let field = MineField::generate(&settings(5, 50), Position::new(3, 1), &mut rng);
        assert!(field.iter().all(|p| p.is_inside(1, 1, 5, 5)));
    }
}
