//! The fixed-capacity search pool.
//!
//! [`SearchPool`] owns every [`SearchNode`] for the lifetime of the
//! agent. Slots are claimed in order up to a high-water mark and are
//! overwritten in place by later searches; nothing is ever freed
//! individually.

use crate::node::{NodeId, SearchNode};
use crate::route::Route;
use sweep_core::Position;

/// Result of [`SearchPool::add`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    /// The position was new; a fresh slot was claimed and marked live.
    Inserted(NodeId),
    /// The position was already present with a higher total cost; its
    /// slot was rewritten in place (new parent and costs).
    Improved(NodeId),
    /// The position was already present at equal or lower total cost.
    Discarded,
}

/// Preallocated arena of search nodes plus a per-slot fringe flag.
///
/// Capacity is fixed at construction and is the maximum number of
/// distinct positions a single search may touch. Exceeding it is a
/// contract violation and panics.
///
/// # Complexity
///
/// [`add`](Self::add) and [`pop_best`](Self::pop_best) scan the claimed
/// slots linearly, O(n) each for n claimed slots. That is cheap at the
/// grid sizes the agent targets; indexing slots by position would be the
/// next step for much larger grids.
#[derive(Debug)]
pub struct SearchPool {
    nodes: Vec<SearchNode>,
    in_fringe: Vec<bool>,
    top: usize,
    generation: u32,
}

impl SearchPool {
    /// Create a pool with `capacity` preallocated slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            nodes: vec![SearchNode::default(); capacity],
            in_fringe: vec![false; capacity],
            top: 0,
            generation: 0,
        }
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        self.nodes.len()
    }

    /// Number of slots claimed since the last [`clear`](Self::clear).
    pub fn len(&self) -> usize {
        self.top
    }

    /// Whether no slot has been claimed since the last clear.
    pub fn is_empty(&self) -> bool {
        self.top == 0
    }

    /// Number of live (not yet expanded) nodes.
    pub fn fringe_len(&self) -> usize {
        self.in_fringe[..self.top].iter().filter(|&&live| live).count()
    }

    /// Current generation; bumped by every [`clear`](Self::clear).
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Whether the node behind `id` is still in the fringe.
    pub fn is_live(&self, id: NodeId) -> bool {
        self.check(id);
        self.in_fringe[id.slot()]
    }

    /// Offer a candidate path to `position`.
    ///
    /// Every claimed slot is scanned, expanded ones included, so a
    /// position never occupies two slots within one search:
    ///
    /// - found with total cost `<=` the candidate's: discarded;
    /// - found with a strictly higher total cost: rewritten in place,
    ///   liveness unchanged;
    /// - not found: the next unused slot is claimed and marked live.
    ///
    /// # Panics
    ///
    /// Panics if a new slot is needed and the pool is full.
    pub fn add(
        &mut self,
        position: Position,
        parent: Option<NodeId>,
        real_cost: u32,
        heuristic_cost: u32,
    ) -> AddOutcome {
        let total = real_cost + heuristic_cost;
        let candidate = SearchNode {
            position,
            real_cost,
            heuristic_cost,
            parent,
        };

        if let Some(slot) = self.nodes[..self.top]
            .iter()
            .position(|n| n.position == position)
        {
            if total < self.nodes[slot].total_cost() {
                self.nodes[slot] = candidate;
                return AddOutcome::Improved(NodeId::new(slot, self.generation));
            }
            return AddOutcome::Discarded;
        }

        assert!(
            self.top < self.nodes.len(),
            "search pool capacity {} exceeded",
            self.nodes.len()
        );
        let slot = self.top;
        self.nodes[slot] = candidate;
        self.in_fringe[slot] = true;
        self.top += 1;
        AddOutcome::Inserted(NodeId::new(slot, self.generation))
    }

    /// Remove and return the live node with the lowest total cost.
    ///
    /// Ties go to the lowest slot index. The node leaves the fringe but
    /// its slot stays valid until the next [`clear`](Self::clear), so
    /// parent links through it remain usable. Returns `None` once the
    /// fringe is empty.
    pub fn pop_best(&mut self) -> Option<NodeId> {
        let mut best: Option<(usize, u32)> = None;
        for slot in 0..self.top {
            if !self.in_fringe[slot] {
                continue;
            }
            let cost = self.nodes[slot].total_cost();
            if best.is_none_or(|(_, best_cost)| cost < best_cost) {
                best = Some((slot, cost));
            }
        }
        let (slot, _) = best?;
        self.in_fringe[slot] = false;
        Some(NodeId::new(slot, self.generation))
    }

    /// The node behind `id`.
    pub fn node(&self, id: NodeId) -> &SearchNode {
        self.check(id);
        &self.nodes[id.slot()]
    }

    /// Position of the node behind `id`.
    pub fn position(&self, id: NodeId) -> Position {
        self.node(id).position
    }

    /// Reclaim every slot.
    ///
    /// Flips every liveness flag off and resets the high-water mark; node
    /// contents are left as-is because [`add`](Self::add) overwrites all
    /// fields before a slot is reused. Handles issued before the clear
    /// become stale.
    pub fn clear(&mut self) {
        self.in_fringe.fill(false);
        self.top = 0;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Reverse the parent chain ending at `goal` in place and return a
    /// [`Route`] that walks it root to goal.
    ///
    /// After reversal each node's `parent` points at the *next* step.
    /// The root (the search start) is skipped: the route begins with the
    /// first move away from it.
    pub fn reverse_chain(&mut self, goal: NodeId) -> Route {
        self.check(goal);
        let mut prev: Option<NodeId> = None;
        let mut current = Some(goal);
        let mut len = 0u32;
        while let Some(id) = current {
            let slot = id.slot();
            current = self.nodes[slot].parent;
            self.nodes[slot].parent = prev;
            prev = Some(id);
            len += 1;
        }
        // `prev` is now the root; its parent link is the first step.
        let first = prev.and_then(|root| self.nodes[root.slot()].parent);
        Route::new(first, len - 1, self.generation)
    }

    fn check(&self, id: NodeId) {
        debug_assert_eq!(
            id.generation, self.generation,
            "stale {id} used after clear"
        );
        debug_assert!(id.slot() < self.top, "{id} beyond high-water mark");
    }
}
