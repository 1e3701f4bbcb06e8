//! Phase 2: least-recently-visited coverage of a known map.

use smallvec::SmallVec;
use sweep_core::{Direction, Position, TickId};
use sweep_space::CellGrid;

/// Coverage-phase state: the working map built at the end of discovery.
#[derive(Clone, Debug)]
pub struct Coverage {
    map: CellGrid,
}

impl Coverage {
    /// Start covering `map`.
    pub fn new(map: CellGrid) -> Self {
        Self { map }
    }

    /// The working map.
    pub fn map(&self) -> &CellGrid {
        &self.map
    }

    pub(crate) fn map_mut(&mut self) -> &mut CellGrid {
        &mut self.map
    }

    /// Pick the neighbour of `current` visited longest ago.
    ///
    /// Never-visited neighbours come first; equal stamps keep
    /// [`Direction::PRIORITY`] order. Walls and cells outside the map are
    /// skipped. Returns `None` when every neighbour is blocked.
    pub fn choose(&self, current: Position) -> Option<(Direction, Position)> {
        let mut candidates: SmallVec<[(Option<TickId>, Direction, Position); 4]> = current
            .neighbours()
            .into_iter()
            .map(|(dir, pos)| {
                let stamp = self.map.get(pos).and_then(|cell| cell.last_visit);
                (stamp, dir, pos)
            })
            .collect();
        // Stable: ties stay in priority order.
        candidates.sort_by_key(|&(stamp, _, _)| stamp);
        candidates
            .into_iter()
            .find(|&(_, _, pos)| self.map.get(pos).is_some_and(|cell| !cell.flags.is_wall()))
            .map(|(_, dir, pos)| (dir, pos))
    }

    /// A move into `target` bumped. Only possible if the map is wrong;
    /// the cell is walled off so it is not chosen again.
    pub fn record_bump(&mut self, target: Position) {
        if self.map.contains(target) {
            self.map.mark_wall_and_visited(target);
        }
    }
}
