//! Search nodes and the index handles that link them.

use std::fmt;
use sweep_core::Position;

/// Handle to a slot in a [`SearchPool`](crate::SearchPool).
///
/// Handles are generation-scoped: the pool bumps its generation on every
/// [`clear`](crate::SearchPool::clear), and debug builds reject handles
/// from an earlier search. Handles are plain indices, trivially copyable,
/// so parent links can never form ownership cycles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct NodeId {
    pub(crate) slot: u32,
    pub(crate) generation: u32,
}

impl NodeId {
    pub(crate) fn new(slot: usize, generation: u32) -> Self {
        Self {
            slot: slot as u32,
            generation,
        }
    }

    /// Slot index within the pool.
    pub fn slot(self) -> usize {
        self.slot as usize
    }

    /// Pool generation this handle was issued in.
    pub fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId(slot={}, gen={})", self.slot, self.generation)
    }
}

/// One candidate path prefix during best-first search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchNode {
    /// Grid position this node reaches.
    pub position: Position,
    /// Path length from the search root.
    pub real_cost: u32,
    /// Heuristic estimate of the remaining distance to a goal.
    pub heuristic_cost: u32,
    /// Previous node on the path; `None` for the root.
    pub parent: Option<NodeId>,
}

impl SearchNode {
    /// `real_cost + heuristic_cost`, the best-first ordering key.
    pub fn total_cost(&self) -> u32 {
        self.real_cost + self.heuristic_cost
    }
}
