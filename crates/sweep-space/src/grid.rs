//! Dense row-major grid of [`Cell`]s.

use crate::cell::{Cell, CellFlags};
use crate::error::SpaceError;
use sweep_core::{Direction, Position, TickId};

/// A rectangular grid of cells addressed by [`Position`].
///
/// Storage is a flat row-major `Vec<Cell>` allocated once at
/// construction. Accessors that take a `Position` are bounds-unchecked by
/// contract: callers must stay inside `[0, rows) × [0, cols)`, which
/// debug builds assert. Use [`get`](CellGrid::get) where a position may
/// legitimately fall outside the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellGrid {
    rows: u32,
    cols: u32,
    cells: Vec<Cell>,
}

impl CellGrid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a grid of `rows * cols` cells with no flags set.
    ///
    /// Returns `Err(SpaceError::EmptyGrid)` if either dimension is 0, or
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    pub fn new(rows: u32, cols: u32) -> Result<Self, SpaceError> {
        if rows == 0 || cols == 0 {
            return Err(SpaceError::EmptyGrid);
        }
        if rows > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(SpaceError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::default(); rows as usize * cols as usize],
        })
    }

    /// Grid of `rows * cols` copies of `cell`, for dimensions already
    /// known to be valid (taken from an existing grid).
    pub(crate) fn filled(rows: u32, cols: u32, cell: Cell) -> Self {
        Self {
            rows,
            cols,
            cells: vec![cell; rows as usize * cols as usize],
        }
    }

    /// Create a square grid of side `side`.
    pub fn square(side: u32) -> Result<Self, SpaceError> {
        Self::new(side, side)
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `pos` lies inside the grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row >= 0 && pos.col >= 0 && (pos.row as u32) < self.rows && (pos.col as u32) < self.cols
    }

    fn index(&self, pos: Position) -> usize {
        debug_assert!(
            self.contains(pos),
            "position {pos} outside {}x{} grid",
            self.rows,
            self.cols
        );
        pos.row as usize * self.cols as usize + pos.col as usize
    }

    /// The cell at `pos`. Bounds-unchecked by contract.
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells[self.index(pos)]
    }

    /// Mutable access to the cell at `pos`. Bounds-unchecked by contract.
    pub fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        let idx = self.index(pos);
        &mut self.cells[idx]
    }

    /// The cell at `pos`, or `None` outside the grid.
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        if self.contains(pos) {
            Some(&self.cells[self.index(pos)])
        } else {
            None
        }
    }

    /// Flags of the cell at `pos`. Bounds-unchecked by contract.
    pub fn flags(&self, pos: Position) -> CellFlags {
        self.cell(pos).flags
    }

    /// Iterate all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let cols = self.cols as i32;
        (0..self.rows as i32).flat_map(move |row| (0..cols).map(move |col| Position::new(row, col)))
    }

    /// Iterate `(position, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        self.positions().zip(self.cells.iter())
    }

    // ── Grid state operations ───────────────────────────────────

    /// Reset every cell to "fully unexplored": all four edge bits set,
    /// not visited, not a wall, never stamped.
    pub fn initialize_all_unexplored(&mut self) {
        self.cells.fill(Cell::unexplored());
    }

    /// Set the `Visited` bit at `pos`, leaving every other flag intact.
    pub fn mark_visited(&mut self, pos: Position) {
        self.cell_mut(pos).flags.insert(CellFlags::VISITED);
    }

    /// Record that `pos` is impassable.
    ///
    /// The flags become exactly `WALL | VISITED`: a wall has no
    /// unexplored edges of its own, so it can never be a frontier cell.
    pub fn mark_wall_and_visited(&mut self, pos: Position) {
        self.cell_mut(pos).flags = CellFlags::WALL | CellFlags::VISITED;
    }

    /// Clear the unexplored-edge bit of `pos` that points in `dir`.
    pub fn clear_unexplored_edge(&mut self, pos: Position, dir: Direction) {
        self.cell_mut(pos).flags.remove(CellFlags::unexplored(dir));
    }

    /// Stamp the last-visit tick of `pos`.
    pub fn stamp_visit(&mut self, pos: Position, tick: TickId) {
        self.cell_mut(pos).last_visit = Some(tick);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_empty() {
        assert_eq!(CellGrid::new(0, 4), Err(SpaceError::EmptyGrid));
        assert_eq!(CellGrid::new(4, 0), Err(SpaceError::EmptyGrid));
    }

    #[test]
    fn new_rejects_oversized() {
        let err = CellGrid::new(u32::MAX, 1).unwrap_err();
        assert!(matches!(
            err,
            SpaceError::DimensionTooLarge { name: "rows", .. }
        ));
    }

    #[test]
    fn contains_checks_both_axes() {
        let g = CellGrid::new(3, 5).unwrap();
        assert!(g.contains(Position::new(0, 0)));
        assert!(g.contains(Position::new(2, 4)));
        assert!(!g.contains(Position::new(3, 0)));
        assert!(!g.contains(Position::new(0, 5)));
        assert!(!g.contains(Position::new(-1, 2)));
        assert!(!g.contains(Position::new(1, -1)));
        assert!(g.get(Position::new(0, 5)).is_none());
    }

    #[test]
    fn positions_are_row_major() {
        let g = CellGrid::new(2, 3).unwrap();
        let all: Vec<_> = g.positions().collect();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], Position::new(0, 0));
        assert_eq!(all[2], Position::new(0, 2));
        assert_eq!(all[3], Position::new(1, 0));
    }

    #[test]
    fn initialize_sets_all_edges() {
        let mut g = CellGrid::square(4).unwrap();
        g.mark_wall_and_visited(Position::new(1, 1));
        g.stamp_visit(Position::new(2, 2), TickId(9));
        g.initialize_all_unexplored();
        assert!(g.iter().all(|(_, c)| *c == Cell::unexplored()));
    }

    #[test]
    fn mark_wall_overwrites_edges() {
        let mut g = CellGrid::square(3).unwrap();
        g.initialize_all_unexplored();
        let p = Position::new(1, 1);
        g.mark_wall_and_visited(p);
        assert_eq!(g.flags(p), CellFlags::WALL | CellFlags::VISITED);
    }

    #[test]
    fn mark_visited_keeps_edges() {
        let mut g = CellGrid::square(3).unwrap();
        g.initialize_all_unexplored();
        let p = Position::new(1, 1);
        g.mark_visited(p);
        assert!(g.flags(p).is_frontier());
        g.clear_unexplored_edge(p, Direction::Up);
        assert!(!g.flags(p).is_unexplored_toward(Direction::Up));
        assert!(g.flags(p).is_unexplored_toward(Direction::Down));
    }
}
