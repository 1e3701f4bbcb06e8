//! Spatial state for Sweep agents.
//!
//! The agent keeps one [`CellGrid`] at a time: an oversized discovery
//! buffer while it maps an unknown environment, then a minimal working
//! map once discovery is complete. Each [`Cell`] stores a small flag set
//! ([`CellFlags`]) and the tick of its most recent visit.
//!
//! # Frontier bookkeeping
//!
//! Every cell starts with four "unexplored edge" bits, one per direction.
//! Visiting a cell clears the bit pointing at it on each of its four
//! neighbours. A visited cell that still carries any unexplored bit is a
//! *frontier* cell: standing on it, the agent has somewhere new to go.
//! See [`frontier`] for the propagation rules and [`bounds`] for the
//! discovery-to-working-map rebase.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod cell;
pub mod error;
pub mod frontier;
pub mod grid;

pub use bounds::Bounds;
pub use cell::{Cell, CellFlags};
pub use error::SpaceError;
pub use grid::CellGrid;
