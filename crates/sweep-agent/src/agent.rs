//! The two-phase cleaning agent.
//!
//! [`SweepAgent`] ties the phase controllers together behind the
//! [`Agent`] trait. Per tick it:
//!
//! 1. settles the previous move: a bump walls off the attempted cell and
//!    keeps the agent where it was, otherwise the tentative position is
//!    confirmed;
//! 2. sucks if the current cell is dirty;
//! 3. otherwise asks the active phase for a move;
//! 4. stamps the confirmed cell with the tick in the active grid.
//!
//! Discovery hands over to coverage on the tick it runs out of frontier
//! cells, and coverage decides that same tick.

use std::fmt;

use sweep_core::{Action, Agent, Percept, Position, TickId};
use sweep_space::CellGrid;
use tracing::{info, trace, warn};

use crate::config::{AgentConfig, ConfigError};
use crate::cover::Coverage;
use crate::explore::{Discovery, ExploreStep};
use crate::metrics::AgentMetrics;

/// Which phase the agent is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    /// Mapping the environment.
    Discovering,
    /// Cycling over the known map.
    Covering,
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Discovering => write!(f, "discovering"),
            Self::Covering => write!(f, "covering"),
        }
    }
}

/// Exactly one spatial buffer is live at a time.
#[derive(Debug)]
enum Phase {
    Discovering(Discovery),
    Covering(Coverage),
}

/// Two-phase cleaning agent: frontier discovery, then
/// least-recently-visited coverage.
///
/// Positions are kept in the active grid's coordinates. During
/// discovery the agent starts at [`AgentConfig::discovery_start`];
/// after the hand-over it is rebased into the working map.
#[derive(Debug)]
pub struct SweepAgent {
    config: AgentConfig,
    phase: Phase,
    current: Position,
    tentative: Position,
    next_tick: TickId,
    percept: Percept,
    metrics: AgentMetrics,
}

impl SweepAgent {
    /// Name reported through [`Agent::name`].
    pub const NAME: &'static str = "SweepAgent";

    /// Build an agent for an environment described by `config`.
    pub fn new(config: AgentConfig) -> Result<Self, ConfigError> {
        let discovery = Discovery::new(&config)?;
        let start = config.discovery_start();
        Ok(Self {
            config,
            phase: Phase::Discovering(discovery),
            current: start,
            tentative: start,
            next_tick: TickId(0),
            percept: Percept::default(),
            metrics: AgentMetrics::default(),
        })
    }

    /// The configuration the agent was built with.
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Counters since construction.
    pub fn metrics(&self) -> &AgentMetrics {
        &self.metrics
    }

    /// Current phase.
    pub fn phase(&self) -> PhaseKind {
        match self.phase {
            Phase::Discovering(_) => PhaseKind::Discovering,
            Phase::Covering(_) => PhaseKind::Covering,
        }
    }

    /// Last confirmed position, in [`active_grid`](Self::active_grid)
    /// coordinates.
    pub fn position(&self) -> Position {
        self.current
    }

    /// The grid the agent is currently working in: the discovery buffer
    /// or the working map.
    pub fn active_grid(&self) -> &CellGrid {
        match &self.phase {
            Phase::Discovering(d) => d.buffer(),
            Phase::Covering(c) => c.map(),
        }
    }

    /// Frontier cells left to explore, or `None` once covering.
    pub fn frontier_count(&self) -> Option<usize> {
        match &self.phase {
            Phase::Discovering(d) => Some(d.buffer().frontier_count()),
            Phase::Covering(_) => None,
        }
    }

    /// Number of ticks decided so far.
    pub fn ticks(&self) -> u64 {
        self.next_tick.0
    }

    fn settle(&mut self, bumped: bool) {
        if !bumped {
            self.current = self.tentative;
            return;
        }
        self.metrics.bumps += 1;
        if self.tentative == self.current {
            warn!(position = %self.current, "bump reported without a move");
            return;
        }
        match &mut self.phase {
            Phase::Discovering(d) => d.record_bump(self.tentative),
            Phase::Covering(c) => {
                warn!(target = %self.tentative, "unexpected bump on working map");
                c.record_bump(self.tentative);
            }
        }
        self.tentative = self.current;
    }

    fn decide(&mut self, tick: TickId) -> Action {
        if let Phase::Discovering(d) = &mut self.phase {
            match d.step(self.current, &mut self.metrics) {
                ExploreStep::Move(dir, target) => {
                    self.tentative = target;
                    return dir.action();
                }
                ExploreStep::Idle => return Action::Idle,
                ExploreStep::Exhausted => self.begin_coverage(tick),
            }
        }
        self.cover()
    }

    fn begin_coverage(&mut self, tick: TickId) {
        let Phase::Discovering(d) = &self.phase else {
            return;
        };
        let working = d.working_map(self.current);
        info!(
            tick = tick.0,
            rows = working.map.rows(),
            cols = working.map.cols(),
            origin = %working.bounds.min,
            position = %working.position,
            "discovery complete, switching to coverage"
        );
        self.current = working.position;
        self.tentative = working.position;
        self.metrics.discovery_ticks = Some(tick.0);
        self.phase = Phase::Covering(Coverage::new(working.map));
    }

    fn cover(&mut self) -> Action {
        let Phase::Covering(c) = &self.phase else {
            return Action::Idle;
        };
        match c.choose(self.current) {
            Some((dir, target)) => {
                self.tentative = target;
                dir.action()
            }
            None => Action::Idle,
        }
    }

    fn stamp(&mut self, tick: TickId) {
        let grid = match &mut self.phase {
            Phase::Discovering(d) => d.buffer_mut(),
            Phase::Covering(c) => c.map_mut(),
        };
        grid.stamp_visit(self.current, tick);
    }
}

impl Agent for SweepAgent {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn perceive(&mut self, percept: Percept) {
        self.percept = percept;
    }

    fn think(&mut self) -> Action {
        let tick = self.next_tick;
        self.next_tick = tick.next();
        let percept = std::mem::take(&mut self.percept);

        self.settle(percept.bumped);
        let action = if percept.dirty {
            Action::Suck
        } else {
            self.decide(tick)
        };
        self.stamp(tick);

        self.metrics.ticks += 1;
        match action {
            Action::Suck => self.metrics.sucks += 1,
            Action::Idle => self.metrics.idles += 1,
            _ => self.metrics.moves += 1,
        }
        trace!(tick = tick.0, %action, phase = %self.phase(), position = %self.current, "tick");
        action
    }
}
