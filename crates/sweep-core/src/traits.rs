//! The perceive/think seam between a simulator and a decision engine.

use crate::action::Action;
use crate::percept::Percept;

/// A decision engine driven one discrete tick at a time.
///
/// The driver calls [`perceive`](Agent::perceive) with the outcome of the
/// previous action, then [`think`](Agent::think) exactly once to obtain
/// the next action. Implementations are synchronous and single-threaded:
/// one `think` call produces exactly one action with no suspension.
pub trait Agent {
    /// Human-readable agent name, used in logs and reports.
    fn name(&self) -> &str;

    /// Record the observations for the upcoming tick.
    fn perceive(&mut self, percept: Percept);

    /// Decide the action for this tick.
    fn think(&mut self) -> Action;
}
