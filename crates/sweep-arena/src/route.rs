//! Consumable root-to-goal routes over a reversed search chain.

use crate::node::NodeId;
use crate::pool::SearchPool;
use sweep_core::Position;

/// Cursor over a reversed parent chain, produced by
/// [`SearchPool::reverse_chain`].
///
/// The route only stores a handle to its next node; the nodes themselves
/// stay in the pool. It is valid until the pool is cleared, which the
/// owner of both must not do while a route is being followed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    next: Option<NodeId>,
    remaining: u32,
    generation: u32,
}

impl Route {
    pub(crate) fn new(next: Option<NodeId>, remaining: u32, generation: u32) -> Self {
        Self {
            next,
            remaining,
            generation,
        }
    }

    /// Steps left to take.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whether every step has been consumed.
    pub fn is_finished(&self) -> bool {
        self.next.is_none()
    }

    /// Pool generation the route was built in.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Consume the next step, returning the position to move into.
    pub fn next_step(&mut self, pool: &SearchPool) -> Option<Position> {
        debug_assert_eq!(
            self.generation,
            pool.generation(),
            "route followed after its pool was cleared"
        );
        let id = self.next?;
        let node = pool.node(id);
        self.next = node.parent;
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.position)
    }
}
