//! Running counters kept by the agent.
//!
//! [`AgentMetrics`] is updated on every [`think`](sweep_core::Agent::think)
//! call and is cheap to clone for reporting.

/// Cumulative counters since the agent was constructed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AgentMetrics {
    /// Number of decisions made.
    pub ticks: u64,
    /// Decisions that were `Suck`.
    pub sucks: u64,
    /// Decisions that were a move.
    pub moves: u64,
    /// Decisions that were `Idle`.
    pub idles: u64,
    /// Bumps reported by the environment.
    pub bumps: u64,
    /// Successful path planning calls.
    pub plans: u64,
    /// Total steps across every planned path.
    pub path_steps: u64,
    /// Most search nodes claimed by a single planning call.
    pub peak_pool_nodes: usize,
    /// Tick at which coverage began, once it has.
    pub discovery_ticks: Option<u64>,
}
