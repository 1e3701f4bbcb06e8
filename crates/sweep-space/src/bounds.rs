//! Bounding boxes and the discovery-to-working-map rebase.

use crate::cell::{Cell, CellFlags};
use crate::grid::CellGrid;
use sweep_core::Position;

/// An inclusive axis-aligned rectangle of positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    /// Top-left corner (inclusive).
    pub min: Position,
    /// Bottom-right corner (inclusive).
    pub max: Position,
}

impl Bounds {
    /// A one-cell box at `pos`.
    pub fn point(pos: Position) -> Self {
        Self { min: pos, max: pos }
    }

    /// Grow the box to include `pos`.
    pub fn include(&mut self, pos: Position) {
        self.min.row = self.min.row.min(pos.row);
        self.min.col = self.min.col.min(pos.col);
        self.max.row = self.max.row.max(pos.row);
        self.max.col = self.max.col.max(pos.col);
    }

    /// Number of rows covered.
    pub fn rows(&self) -> u32 {
        self.max.row.abs_diff(self.min.row) + 1
    }

    /// Number of columns covered.
    pub fn cols(&self) -> u32 {
        self.max.col.abs_diff(self.min.col) + 1
    }

    /// Whether `pos` lies inside the box.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row >= self.min.row
            && pos.row <= self.max.row
            && pos.col >= self.min.col
            && pos.col <= self.max.col
    }
}

impl CellGrid {
    /// Minimal bounding box of every visited cell (walls included), or
    /// `None` if nothing has been visited.
    pub fn visited_bounds(&self) -> Option<Bounds> {
        let mut bounds: Option<Bounds> = None;
        for (pos, cell) in self.iter() {
            if cell.flags.is_visited() {
                match bounds.as_mut() {
                    Some(b) => b.include(pos),
                    None => bounds = Some(Bounds::point(pos)),
                }
            }
        }
        bounds
    }

    /// Copy the window `bounds` into a new grid whose origin is
    /// `bounds.min`.
    ///
    /// Every cell that was never visited becomes a wall, so unexplored
    /// territory is impassable in the result. Last-visit stamps are not
    /// carried over. `bounds` must lie inside this grid.
    pub fn extract_window(&self, bounds: Bounds) -> CellGrid {
        debug_assert!(self.contains(bounds.min) && self.contains(bounds.max));
        let mut map = CellGrid::filled(bounds.rows(), bounds.cols(), Cell::default());
        for row in 0..map.rows() as i32 {
            for col in 0..map.cols() as i32 {
                let pos = Position::new(row, col);
                let mut flags = self.flags(pos + bounds.min);
                if !flags.is_visited() {
                    flags.insert(CellFlags::WALL);
                }
                *map.cell_mut(pos) = Cell {
                    flags,
                    last_visit: None,
                };
            }
        }
        map
    }
}
