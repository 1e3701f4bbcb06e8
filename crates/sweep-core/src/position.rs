//! Grid positions with Manhattan metric.

use crate::action::Direction;
use std::fmt;
use std::ops::{Add, Sub};

/// A `(row, col)` cell coordinate.
///
/// Positions are plain values: equality and arithmetic are by value and
/// carry no identity. Coordinates are signed so that offsets and rebasing
/// can be expressed without casts; grids reject positions outside their
/// own bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index, growing downwards.
    pub row: i32,
    /// Column index, growing to the right.
    pub col: i32,
}

impl Position {
    /// Create a position from its row and column.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Manhattan (L1) distance, the only metric the agent uses.
    pub fn manhattan(self, other: Position) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// The neighbouring position one step in `dir`.
    pub fn step(self, dir: Direction) -> Position {
        self + dir.offset()
    }

    /// The four neighbours in priority order (Up, Right, Down, Left).
    pub fn neighbours(self) -> [(Direction, Position); 4] {
        Direction::PRIORITY.map(|d| (d, self.step(d)))
    }
}

impl Add<(i32, i32)> for Position {
    type Output = Position;

    fn add(self, (dr, dc): (i32, i32)) -> Position {
        Position::new(self.row + dr, self.col + dc)
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}
