//! Board coordinates.

use serde::{Deserialize, Serialize};

/// A 1-based `(x, y)` cell coordinate.
///
/// `x` is the column, counted from the left edge. `y` is the row, counted
/// from the bottom edge. Ordering is by `x` then `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    /// Creates a position from column and row.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Column, 1 at the left edge.
    pub const fn x(self) -> i32 {
        self.x
    }

    /// Row, 1 at the bottom edge.
    pub const fn y(self) -> i32 {
        self.y
    }

    /// Translates by `(dx, dy)` without any bounds checking.
    #[must_use]
    pub const fn add(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Inclusive rectangle test on both axes.
    pub const fn is_inside(self, left: i32, bottom: i32, right: i32, top: i32) -> bool {
        self.x >= left && self.x <= right && self.y >= bottom && self.y <= top
    }

    /// Row letter: `A` for row 1, clamped to printable ASCII.
    pub fn row_letter(self) -> char {
        let code = self
            .y
            .saturating_add(i32::from(b'A') - 1)
            .clamp(0x20, 0x7E);
        // Clamped into the printable ASCII range above.
        char::from(code as u8)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.row_letter(), self.x)
    }
}
