//! Phase 1: frontier-driven discovery of an unknown environment.
//!
//! [`Discovery`] owns the oversized discovery buffer and the path
//! planner. Each tick it either steps into an unexplored neighbour of
//! the current cell, follows a planned route to the nearest frontier
//! cell, or reports that no frontier is left.

use sweep_arena::Route;
use sweep_core::{Direction, Position};
use sweep_space::{Bounds, CellGrid};
use tracing::error;

use crate::config::{AgentConfig, ConfigError};
use crate::metrics::AgentMetrics;
use crate::planner::PathPlanner;

/// What discovery wants to do this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExploreStep {
    /// Move one cell in `Direction`, tentatively into `Position`.
    Move(Direction, Position),
    /// Stay put.
    Idle,
    /// No frontier remains: the map is complete.
    Exhausted,
}

/// The result of compacting the discovery buffer into a working map.
#[derive(Clone, Debug)]
pub struct WorkingMap {
    /// Visited bounding box with every unvisited cell walled off.
    pub map: CellGrid,
    /// Where the box sat in the discovery buffer.
    pub bounds: Bounds,
    /// The agent's position in `map` coordinates.
    pub position: Position,
}

/// Discovery-phase state.
#[derive(Debug)]
pub struct Discovery {
    buffer: CellGrid,
    planner: PathPlanner,
    route: Option<Route>,
    prepared: bool,
}

impl Discovery {
    /// Allocate the discovery buffer and search pool for `config`.
    pub fn new(config: &AgentConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            buffer: CellGrid::square(config.discovery_side())?,
            planner: PathPlanner::new(config.pool_capacity()),
            route: None,
            prepared: false,
        })
    }

    /// The discovery buffer.
    pub fn buffer(&self) -> &CellGrid {
        &self.buffer
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut CellGrid {
        &mut self.buffer
    }

    /// The planner and its pool.
    pub fn planner(&self) -> &PathPlanner {
        &self.planner
    }

    /// The route being followed, if any.
    pub fn route(&self) -> Option<&Route> {
        self.route.as_ref()
    }

    /// Whether [`prepare`](Self::prepare) has run.
    pub fn is_prepared(&self) -> bool {
        self.prepared
    }

    /// Reset the buffer to fully unexplored and visit `start`.
    pub fn prepare(&mut self, start: Position) {
        self.buffer.initialize_all_unexplored();
        self.buffer.visit(start);
        self.route = None;
        self.prepared = true;
    }

    /// The last tentative move into `target` hit something impassable.
    pub fn record_bump(&mut self, target: Position) {
        self.buffer.mark_wall_and_visited(target);
    }

    /// Decide the next discovery move from `current`.
    ///
    /// A route in progress is followed to its end first; no cell along
    /// it can be a frontier cell before its goal. Otherwise the agent
    /// steps into the first unexplored neighbour of `current` in
    /// [`Direction::PRIORITY`] order, marking it visited ahead of the
    /// move. Failing that it plans a route to the nearest frontier cell
    /// and takes its first step.
    pub fn step(&mut self, current: Position, metrics: &mut AgentMetrics) -> ExploreStep {
        if !self.prepared {
            self.prepare(current);
        }

        if self.route.is_none() {
            let flags = self.buffer.flags(current);
            if let Some(dir) = flags.first_unexplored().filter(|_| flags.is_frontier()) {
                let target = current.step(dir);
                self.buffer.visit(target);
                return ExploreStep::Move(dir, target);
            }
            if !self.buffer.has_frontier() {
                return ExploreStep::Exhausted;
            }
            match self.planner.plan(&self.buffer, current) {
                Some(route) => {
                    metrics.plans += 1;
                    metrics.path_steps += u64::from(route.remaining());
                    metrics.peak_pool_nodes =
                        metrics.peak_pool_nodes.max(self.planner.pool().len());
                    self.route = Some(route);
                }
                None => {
                    error!(%current, "frontier exists but no route reaches it");
                    debug_assert!(false, "frontier unreachable from {current}");
                    return ExploreStep::Idle;
                }
            }
        }

        self.follow(current)
    }

    fn follow(&mut self, current: Position) -> ExploreStep {
        let Some(route) = self.route.as_mut() else {
            return ExploreStep::Idle;
        };
        let next = self.planner.next_step(route);
        if route.is_finished() {
            self.route = None;
        }
        match next.and_then(|to| Direction::toward(current, to).map(|dir| (dir, to))) {
            Some((dir, to)) => ExploreStep::Move(dir, to),
            None => ExploreStep::Idle,
        }
    }

    /// Compact the buffer into a working map and rebase `current`.
    ///
    /// The map is the minimal bounding box of every visited cell, walls
    /// included; anything never visited inside it becomes a wall.
    pub fn working_map(&self, current: Position) -> WorkingMap {
        let bounds = self
            .buffer
            .visited_bounds()
            .unwrap_or(Bounds::point(current));
        WorkingMap {
            map: self.buffer.extract_window(bounds),
            bounds,
            position: current - bounds.min,
        }
    }
}
