//! Per-tick observations delivered by the simulator.

/// What the agent senses at the start of a tick.
///
/// Both signals describe the outcome of the previous action: `bumped`
/// is set when that action was a move into an impassable cell (the
/// agent did not move), and `dirty` reports whether the cell the agent
/// now occupies holds any dirt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Percept {
    /// The previous move hit a wall or the edge of the world.
    pub bumped: bool,
    /// The occupied cell has nonzero accumulated dirt.
    pub dirty: bool,
}

impl Percept {
    /// Construct a percept from its two signals.
    pub fn new(bumped: bool, dirty: bool) -> Self {
        Self { bumped, dirty }
    }
}
