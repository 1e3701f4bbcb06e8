//! Frontier propagation.
//!
//! A frontier cell is a visited cell with at least one unexplored-edge
//! bit still set. Visiting a cell for the first time clears, on each of
//! its four neighbours, the bit that points back at it, then sets its
//! own `Visited` bit. The frontier therefore contracts monotonically: no
//! operation here ever sets an edge bit or clears `Visited`.

use crate::grid::CellGrid;
use sweep_core::Position;

impl CellGrid {
    /// Visit `pos`: clear the edge bit pointing at it on every neighbour
    /// and set its own `Visited` bit.
    ///
    /// `pos` must lie inside the grid. Neighbours outside it are skipped:
    /// a tentative visit to a wall on the buffer rim probes one cell
    /// beyond it.
    pub fn visit(&mut self, pos: Position) {
        for (dir, neighbour) in pos.neighbours() {
            if self.contains(neighbour) {
                self.clear_unexplored_edge(neighbour, dir.opposite());
            }
        }
        self.mark_visited(pos);
    }

    /// Whether `pos` is a frontier cell.
    pub fn is_frontier(&self, pos: Position) -> bool {
        self.flags(pos).is_frontier()
    }

    /// Whether any frontier cell remains anywhere in the grid.
    pub fn has_frontier(&self) -> bool {
        self.iter().any(|(_, cell)| cell.flags.is_frontier())
    }

    /// Number of frontier cells in the grid.
    pub fn frontier_count(&self) -> usize {
        self.iter().filter(|(_, cell)| cell.flags.is_frontier()).count()
    }

    /// Replace the contents of `out` with every frontier position, in
    /// row-major order. Reuses `out`'s allocation.
    pub fn collect_frontier(&self, out: &mut Vec<Position>) {
        out.clear();
        out.extend(
            self.iter()
                .filter(|(_, cell)| cell.flags.is_frontier())
                .map(|(pos, _)| pos),
        );
    }

    /// Minimum Manhattan distance from `pos` to any frontier cell, or
    /// `None` when no frontier remains.
    ///
    /// This is a lower bound on the 4-connected path length, which makes
    /// it an admissible (and consistent) search heuristic.
    pub fn distance_to_nearest_frontier(&self, pos: Position) -> Option<u32> {
        self.iter()
            .filter(|(_, cell)| cell.flags.is_frontier())
            .map(|(p, _)| p.manhattan(pos))
            .min()
    }
}

/// Minimum Manhattan distance from `pos` to any position in `frontier`.
///
/// Same value as [`CellGrid::distance_to_nearest_frontier`] when
/// `frontier` was filled by [`CellGrid::collect_frontier`] on an
/// unchanged grid, without rescanning every cell.
pub fn nearest_distance(frontier: &[Position], pos: Position) -> Option<u32> {
    frontier.iter().map(|p| p.manhattan(pos)).min()
}
