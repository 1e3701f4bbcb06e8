//! Decision engine for a grid cleaning agent.
//!
//! The agent knows only two things each tick: whether its last move hit
//! something, and whether the cell it stands on is dirty. From those it
//! builds a map and then cleans it, in two phases:
//!
//! - **Discovery** ([`explore`]): keep stepping into unexplored
//!   neighbours; when the current cell has none left, plan a shortest
//!   path ([`planner`]) to the nearest cell that does. When no such cell
//!   remains the map is complete.
//! - **Coverage** ([`cover`]): on the compacted working map, always move
//!   to the neighbour visited longest ago.
//!
//! Dirt always wins: a dirty cell is sucked before any movement logic
//! runs. [`SweepAgent`] is the entry point; it implements
//! [`sweep_core::Agent`] and is driven by calling
//! [`perceive`](sweep_core::Agent::perceive) then
//! [`think`](sweep_core::Agent::think) once per tick.
//!
//! # Logging
//!
//! Decisions are reported through [`tracing`]: one `trace` event per
//! tick, `debug` for each planning call, `info` at the phase hand-over,
//! and `warn`/`error` for bumps or planning failures that a correct map
//! rules out. Installing a subscriber is left to the host.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod agent;
pub mod config;
pub mod cover;
pub mod explore;
pub mod metrics;
pub mod planner;

pub use agent::{PhaseKind, SweepAgent};
pub use config::{AgentConfig, ConfigError};
pub use cover::Coverage;
pub use explore::{Discovery, ExploreStep, WorkingMap};
pub use metrics::AgentMetrics;
pub use planner::PathPlanner;
