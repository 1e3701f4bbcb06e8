//! Strongly-typed identifiers.

use std::fmt;

/// Monotonically increasing tick counter.
///
/// Incremented each time the agent runs one perceive/think cycle. The
/// first tick of a run is `TickId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl TickId {
    /// The tick that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_increments() {
        assert_eq!(TickId(4).next(), TickId(5));
    }

    #[test]
    fn never_visited_orders_first() {
        // `Option<TickId>` is the last-visit stamp: `None` must sort
        // before any real tick, including tick zero.
        let mut stamps = vec![Some(TickId(3)), None, Some(TickId(0))];
        stamps.sort();
        assert_eq!(stamps, vec![None, Some(TickId(0)), Some(TickId(3))]);
    }

    #[test]
    fn display_is_bare_number() {
        assert_eq!(TickId(17).to_string(), "17");
    }
}
