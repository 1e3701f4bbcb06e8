//! Benchmark profiles and utilities for the Sweep cleaning-agent engine.
//!
//! - [`far_frontier_grid`]: a fully explored square whose only frontier
//!   cell sits in the corner opposite the start, the worst case for one
//!   planning call.
//! - [`reference_world`]: the two-room maze with dirt accumulating.
//! - [`agent_for`]: an agent sized for a given world.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use sweep_agent::{AgentConfig, SweepAgent};
use sweep_core::Position;
use sweep_space::CellGrid;
use sweep_test_utils::{fixtures, GridWorld};

/// Build an explored `n × n` region inside a wall ring, with a single
/// gap in the ring below its bottom-right cell.
///
/// Returns the grid (side `n + 2`) and the top-left start position. The
/// only frontier cell is `(n, n)`, at Manhattan distance `2(n - 1)`.
pub fn far_frontier_grid(n: u32) -> (CellGrid, Position) {
    let side = n + 2;
    let mut grid = CellGrid::square(side).unwrap();
    grid.initialize_all_unexplored();
    let last = side as i32 - 1;
    let gap = Position::new(last, n as i32);
    for pos in grid.positions().collect::<Vec<_>>() {
        let ring = pos.row == 0 || pos.col == 0 || pos.row == last || pos.col == last;
        if pos == gap {
            continue;
        }
        grid.visit(pos);
        if ring {
            grid.mark_wall_and_visited(pos);
        }
    }
    (grid, Position::new(1, 1))
}

/// Two rooms joined by a doorway, with 1% dirt per cell per tick.
pub fn reference_world(seed: u64) -> GridWorld {
    fixtures::two_rooms()
        .with_seed(seed)
        .with_dirt_probability(0.01)
}

/// An agent whose buffers fit `world`.
pub fn agent_for(world: &GridWorld) -> SweepAgent {
    SweepAgent::new(AgentConfig::new(world.side())).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn far_frontier_has_one_frontier_cell() {
        let (grid, start) = far_frontier_grid(6);
        assert_eq!(grid.rows(), 8);
        assert_eq!(grid.frontier_count(), 1);
        assert!(grid.is_frontier(Position::new(6, 6)));
        assert!(grid.flags(start).is_traversable());
    }

    #[test]
    fn reference_world_is_deterministic() {
        let mut a = reference_world(42);
        let mut b = reference_world(42);
        for _ in 0..10 {
            assert_eq!(a.accumulate(), b.accumulate());
        }
    }
}
