//! Sweep: a decision engine for grid cleaning agents.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Sweep sub-crates. For most users, adding `sweep` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use sweep::prelude::*;
//!
//! // An agent for environments up to 4 cells on a side.
//! let mut agent = SweepAgent::new(AgentConfig::new(4)).unwrap();
//!
//! // Clean cell, no bump: the first move probes upward.
//! agent.perceive(Percept::new(false, false));
//! assert_eq!(agent.think(), Action::Up);
//!
//! // The move hit a wall: the agent stays put and tries the next direction.
//! agent.perceive(Percept::new(true, false));
//! assert_eq!(agent.think(), Action::Right);
//!
//! // A dirty cell always comes first.
//! agent.perceive(Percept::new(false, true));
//! assert_eq!(agent.think(), Action::Suck);
//! assert_eq!(agent.phase(), PhaseKind::Discovering);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `sweep-core` | Actions, directions, positions, percepts, the `Agent` trait |
//! | [`space`] | `sweep-space` | Cell flags, grids, frontier propagation |
//! | [`arena`] | `sweep-arena` | Search-node pool and routes |
//! | [`agent`] | `sweep-agent` | Planner, phase controllers, `SweepAgent` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core vocabulary (`sweep-core`).
///
/// [`types::Action`], [`types::Direction`], [`types::Position`],
/// [`types::Percept`], and the [`types::Agent`] trait.
pub use sweep_core as types;

/// Spatial state (`sweep-space`).
///
/// [`space::CellGrid`] with its frontier and bounding-box operations.
pub use sweep_space as space;

/// Search-node storage (`sweep-arena`).
///
/// [`arena::SearchPool`] and the [`arena::Route`] cursors it produces.
pub use sweep_arena as arena;

/// The decision engine (`sweep-agent`).
///
/// [`agent::SweepAgent`] and the pieces it is built from.
pub use sweep_agent as agent;

/// Common imports for driving an agent.
///
/// ```rust
/// use sweep::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use sweep_core::{Action, Agent, Direction, Percept, Position, TickId};

    // Space
    pub use sweep_space::{Cell, CellFlags, CellGrid};

    // Agent
    pub use sweep_agent::{AgentConfig, AgentMetrics, ConfigError, PhaseKind, SweepAgent};
}
