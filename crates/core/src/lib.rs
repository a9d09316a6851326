//! Core abstractions for the router-node protocol layer.
//!
//! This crate provides the seam between the simulation driver and the
//! routing protocol:
//!
//! - [`Event`]: everything a router node can receive
//! - [`Action`]: everything a router node can ask the driver to do
//! - [`StateMachine`]: the trait router nodes implement
//!
//! # Architecture
//!
//! ```text
//! Event → StateMachine::handle() → Actions
//! ```
//!
//! The state machine is:
//! - **Synchronous**: no async, no `.await`
//! - **Deterministic**: same state + event = same actions
//! - **Pure**: mutates self, performs no I/O
//!
//! All I/O (packet transport, delay sampling, trace output) is performed by
//! the simulation runner, which delivers events and executes the returned
//! actions.

mod action;
mod event;
mod traits;

pub use action::Action;
pub use event::Event;
pub use traits::StateMachine;
