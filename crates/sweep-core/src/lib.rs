//! Core types and traits for the Sweep cleaning-agent engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other Sweep crate: grid positions,
//! movement directions, the closed action set, per-tick percepts, tick
//! identifiers, and the [`Agent`] trait through which a simulator drives
//! a decision engine.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod action;
pub mod id;
pub mod percept;
pub mod position;
pub mod traits;

pub use action::{Action, Direction};
pub use id::TickId;
pub use percept::Percept;
pub use position::Position;
pub use traits::Agent;
