//! Fixed-capacity search-node arena for Sweep path planning.
//!
//! Best-first search needs a node per candidate position plus parent
//! links for path reconstruction. [`SearchPool`] preallocates every node
//! slot once, hands slots out with a high-water mark, and reclaims them
//! all at once on [`clear`](SearchPool::clear): a planning call never
//! touches the heap.
//!
//! # Architecture
//!
//! ```text
//! SearchPool
//! ├── nodes: Vec<SearchNode>   (capacity slots, overwritten in place)
//! ├── in_fringe: Vec<bool>     (liveness flag per slot)
//! ├── top                      (high-water mark: slots claimed this search)
//! └── generation               (bumped on clear; stamps NodeId / Route)
//! ```
//!
//! Parent links are [`NodeId`] indices into the slot array, never
//! references, so the search tree can be reversed in place into a
//! root-to-goal [`Route`] without allocation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod node;
pub mod pool;
pub mod route;

pub use node::{NodeId, SearchNode};
pub use pool::{AddOutcome, SearchPool};
pub use route::Route;
