//! Per-cell exploration metadata.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use sweep_core::{Direction, TickId};

/// Bit set of per-cell exploration flags.
///
/// Bit layout:
///
/// ```text
/// bit 0  WALL        impassable, never expanded by search
/// bit 1  VISITED     the agent has stood on (or bumped into) this cell
/// bit 2  UP          the neighbour above is still unexplored
/// bit 3  RIGHT       the neighbour to the right is still unexplored
/// bit 4  DOWN        the neighbour below is still unexplored
/// bit 5  LEFT        the neighbour to the left is still unexplored
/// ```
///
/// `WALL | VISITED` is the state of a cell the agent bumped into.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellFlags(u8);

impl CellFlags {
    /// Impassable cell.
    pub const WALL: CellFlags = CellFlags(1 << 0);
    /// Cell has been visited (or confirmed as a wall).
    pub const VISITED: CellFlags = CellFlags(1 << 1);
    /// Upper neighbour unexplored.
    pub const UP: CellFlags = CellFlags(1 << 2);
    /// Right neighbour unexplored.
    pub const RIGHT: CellFlags = CellFlags(1 << 3);
    /// Lower neighbour unexplored.
    pub const DOWN: CellFlags = CellFlags(1 << 4);
    /// Left neighbour unexplored.
    pub const LEFT: CellFlags = CellFlags(1 << 5);
    /// All four unexplored-edge bits: the "nothing known yet" state.
    pub const UNEXPLORED: CellFlags = CellFlags(
        Self::UP.0 | Self::RIGHT.0 | Self::DOWN.0 | Self::LEFT.0,
    );

    /// No flags set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Raw bit representation.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// The unexplored-edge bit for `dir`.
    pub const fn unexplored(dir: Direction) -> Self {
        match dir {
            Direction::Up => Self::UP,
            Direction::Right => Self::RIGHT,
            Direction::Down => Self::DOWN,
            Direction::Left => Self::LEFT,
        }
    }

    /// Whether every bit of `other` is set in `self`.
    pub const fn contains(self, other: CellFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether any bit of `other` is set in `self`.
    pub const fn intersects(self, other: CellFlags) -> bool {
        self.0 & other.0 != 0
    }

    /// Set every bit of `other`.
    pub fn insert(&mut self, other: CellFlags) {
        self.0 |= other.0;
    }

    /// Clear every bit of `other`.
    pub fn remove(&mut self, other: CellFlags) {
        self.0 &= !other.0;
    }

    /// Impassable.
    pub const fn is_wall(self) -> bool {
        self.intersects(Self::WALL)
    }

    /// Visited or confirmed wall.
    pub const fn is_visited(self) -> bool {
        self.intersects(Self::VISITED)
    }

    /// Visited and still bordering at least one unexplored neighbour.
    pub const fn is_frontier(self) -> bool {
        self.is_visited() && self.intersects(Self::UNEXPLORED)
    }

    /// Visited and not a wall: a cell the search may expand through.
    pub const fn is_traversable(self) -> bool {
        self.is_visited() && !self.is_wall()
    }

    /// Whether the neighbour in `dir` is still unexplored.
    pub const fn is_unexplored_toward(self, dir: Direction) -> bool {
        self.intersects(Self::unexplored(dir))
    }

    /// The first direction, in Up/Right/Down/Left priority, whose
    /// neighbour is still unexplored.
    pub fn first_unexplored(self) -> Option<Direction> {
        Direction::PRIORITY
            .into_iter()
            .find(|&d| self.is_unexplored_toward(d))
    }
}

impl BitOr for CellFlags {
    type Output = CellFlags;

    fn bitor(self, rhs: CellFlags) -> CellFlags {
        CellFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for CellFlags {
    fn bitor_assign(&mut self, rhs: CellFlags) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for CellFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(CellFlags, &str); 6] = [
            (CellFlags::WALL, "WALL"),
            (CellFlags::VISITED, "VISITED"),
            (CellFlags::UP, "UP"),
            (CellFlags::RIGHT, "RIGHT"),
            (CellFlags::DOWN, "DOWN"),
            (CellFlags::LEFT, "LEFT"),
        ];
        let mut first = true;
        f.write_str("CellFlags(")?;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        f.write_str(")")
    }
}

/// One grid position's exploration state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    /// Wall, visited, and unexplored-edge flags.
    pub flags: CellFlags,
    /// Tick of the most recent visit, `None` until first visited.
    pub last_visit: Option<TickId>,
}

impl Cell {
    /// A cell about which nothing is known yet.
    pub const fn unexplored() -> Self {
        Self {
            flags: CellFlags::UNEXPLORED,
            last_visit: None,
        }
    }

    /// A cell confirmed impassable.
    pub const fn wall() -> Self {
        Self {
            flags: CellFlags(CellFlags::WALL.0 | CellFlags::VISITED.0),
            last_visit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexplored_is_not_frontier_until_visited() {
        let mut c = Cell::unexplored();
        assert!(!c.flags.is_frontier());
        c.flags.insert(CellFlags::VISITED);
        assert!(c.flags.is_frontier());
    }

    #[test]
    fn frontier_contracts_when_edges_clear() {
        let mut flags = CellFlags::VISITED | CellFlags::UP | CellFlags::LEFT;
        assert!(flags.is_frontier());
        flags.remove(CellFlags::UP);
        assert!(flags.is_frontier());
        flags.remove(CellFlags::LEFT);
        assert!(!flags.is_frontier());
        assert!(flags.is_visited());
    }

    #[test]
    fn wall_and_visited_combine() {
        let c = Cell::wall();
        assert!(c.flags.is_wall());
        assert!(c.flags.is_visited());
        assert!(!c.flags.is_frontier());
        assert!(!c.flags.is_traversable());
        assert_eq!(c.flags.bits(), 0b11);
    }

    #[test]
    fn first_unexplored_follows_priority() {
        let flags = CellFlags::VISITED | CellFlags::DOWN | CellFlags::LEFT;
        assert_eq!(flags.first_unexplored(), Some(Direction::Down));
        let flags = CellFlags::VISITED | CellFlags::RIGHT | CellFlags::LEFT;
        assert_eq!(flags.first_unexplored(), Some(Direction::Right));
        assert_eq!(CellFlags::VISITED.first_unexplored(), None);
    }

    #[test]
    fn per_direction_bits_are_distinct() {
        let mut seen = CellFlags::empty();
        for d in Direction::PRIORITY {
            let bit = CellFlags::unexplored(d);
            assert!(!seen.intersects(bit));
            seen |= bit;
        }
        assert_eq!(seen, CellFlags::UNEXPLORED);
    }

    #[test]
    fn debug_lists_set_flags() {
        let flags = CellFlags::WALL | CellFlags::VISITED;
        assert_eq!(format!("{flags:?}"), "CellFlags(WALL | VISITED)");
        assert_eq!(format!("{:?}", CellFlags::empty()), "CellFlags()");
    }
}
