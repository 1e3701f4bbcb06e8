//! The closed action set and the four cardinal movement directions.

use crate::position::Position;
use std::fmt;

/// One discrete command issued to the simulator per tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Action {
    /// Move one cell up (row - 1).
    Up = 0,
    /// Move one cell down (row + 1).
    Down = 1,
    /// Move one cell left (col - 1).
    Left = 2,
    /// Move one cell right (col + 1).
    Right = 3,
    /// Remove dirt from the occupied cell.
    Suck = 4,
    /// Do nothing this tick.
    Idle = 5,
}

impl Action {
    /// All actions in declaration order.
    pub const ALL: [Action; 6] = [
        Action::Up,
        Action::Down,
        Action::Left,
        Action::Right,
        Action::Suck,
        Action::Idle,
    ];

    /// Whether this action attempts to change the agent's cell.
    pub fn is_move(self) -> bool {
        self.direction().is_some()
    }

    /// The direction of a movement action, `None` for `Suck` and `Idle`.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Action::Up => Some(Direction::Up),
            Action::Down => Some(Direction::Down),
            Action::Left => Some(Direction::Left),
            Action::Right => Some(Direction::Right),
            Action::Suck | Action::Idle => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
            Action::Suck => "suck",
            Action::Idle => "idle",
        };
        f.write_str(s)
    }
}

/// Cardinal direction on the 4-connected grid.
///
/// Declaration order is the priority order used throughout the agent:
/// Up, Right, Down, Left. Frontier expansion takes the first open
/// direction in this order, and coverage breaks last-visit ties with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
    /// Towards row - 1.
    Up = 0,
    /// Towards col + 1.
    Right = 1,
    /// Towards row + 1.
    Down = 2,
    /// Towards col - 1.
    Left = 3,
}

impl Direction {
    /// The fixed priority order Up, Right, Down, Left.
    pub const PRIORITY: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Returns the (row_offset, col_offset) for this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    /// The direction pointing back the way this one came.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// The movement action for this direction.
    pub fn action(self) -> Action {
        match self {
            Direction::Up => Action::Up,
            Direction::Right => Action::Right,
            Direction::Down => Action::Down,
            Direction::Left => Action::Left,
        }
    }

    /// Direction of a single step from `from` to `to`.
    ///
    /// Axes are tested in a fixed order: a smaller row gives `Up`, then a
    /// larger column gives `Right`, then a larger row gives `Down`, then a
    /// smaller column gives `Left`. Planned routes only ever contain
    /// 4-connected single-cell steps, so at most one axis differs. Returns
    /// `None` when the positions are identical.
    pub fn toward(from: Position, to: Position) -> Option<Self> {
        if to.row < from.row {
            Some(Direction::Up)
        } else if to.col > from.col {
            Some(Direction::Right)
        } else if to.row > from.row {
            Some(Direction::Down)
        } else if to.col < from.col {
            Some(Direction::Left)
        } else {
            None
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.action(), f)
    }
}
