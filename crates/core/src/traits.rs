//! Core trait for router state machines.

use crate::{Action, Event};

/// A state machine that processes routing events.
///
/// All protocol logic is implemented behind this trait so the simulation
/// driver can dispatch events without knowing the node internals:
///
/// - **Synchronous**: `handle` never blocks
/// - **Deterministic**: same state + event = same actions
/// - **No I/O**: packet sends come back as [`Action`]s for the runner
pub trait StateMachine {
    /// Process an event, returning actions for the runner to execute.
    fn handle(&mut self, event: Event) -> Vec<Action>;

    /// Set the current simulation time.
    ///
    /// Called by the runner before each `handle()` call.
    fn set_time(&mut self, now: f64);

    /// The time last set via `set_time()`.
    fn now(&self) -> f64;
}
