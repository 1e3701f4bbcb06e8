//! Best-first path planning to the nearest frontier cell.
//!
//! [`PathPlanner`] runs A* over the cells the agent has already
//! confirmed as traversable (visited, not wall). The goal set is every
//! frontier cell; the heuristic is the Manhattan distance to the
//! nearest one, which never overestimates on a 4-connected grid and is
//! consistent, so the first frontier cell popped is a nearest one.

use sweep_arena::{Route, SearchPool};
use sweep_core::Position;
use sweep_space::frontier::nearest_distance;
use sweep_space::CellGrid;
use tracing::debug;

/// A* planner backed by a fixed-capacity [`SearchPool`].
///
/// The pool is cleared at the start of every [`plan`](Self::plan), which
/// invalidates any [`Route`] from an earlier call. Callers finish (or
/// drop) a route before planning again.
#[derive(Debug)]
pub struct PathPlanner {
    pool: SearchPool,
    frontier: Vec<Position>,
}

impl PathPlanner {
    /// Planner whose pool holds `capacity` nodes.
    pub fn new(capacity: usize) -> Self {
        Self {
            pool: SearchPool::new(capacity),
            frontier: Vec::new(),
        }
    }

    /// The underlying node pool.
    pub fn pool(&self) -> &SearchPool {
        &self.pool
    }

    /// Shortest path from `start` to the nearest frontier cell of `grid`.
    ///
    /// Returns `None` when the grid has no frontier or none is reachable
    /// through known traversable cells. The route excludes `start`; it is
    /// empty when `start` is itself a frontier cell. Neighbours are
    /// offered in [`Direction::PRIORITY`](sweep_core::Direction::PRIORITY)
    /// order, so ties resolve the same way on every run.
    ///
    /// # Panics
    ///
    /// Panics if the search touches more distinct cells than the pool
    /// holds.
    pub fn plan(&mut self, grid: &CellGrid, start: Position) -> Option<Route> {
        self.pool.clear();
        grid.collect_frontier(&mut self.frontier);
        let start_h = nearest_distance(&self.frontier, start)?;
        self.pool.add(start, None, 0, start_h);

        while let Some(best) = self.pool.pop_best() {
            let node = *self.pool.node(best);
            if grid.is_frontier(node.position) {
                let route = self.pool.reverse_chain(best);
                debug!(
                    %start,
                    goal = %node.position,
                    steps = route.remaining(),
                    pool_nodes = self.pool.len(),
                    "planned path to frontier"
                );
                return Some(route);
            }
            for (_, next) in node.position.neighbours() {
                let traversable = grid
                    .get(next)
                    .is_some_and(|cell| cell.flags.is_traversable());
                if !traversable {
                    continue;
                }
                let h = nearest_distance(&self.frontier, next).unwrap_or(0);
                self.pool.add(next, Some(best), node.real_cost + 1, h);
            }
        }

        debug!(%start, frontier = self.frontier.len(), "no reachable frontier");
        None
    }

    /// Consume the next step of `route`.
    pub fn next_step(&self, route: &mut Route) -> Option<Position> {
        route.next_step(&self.pool)
    }
}
