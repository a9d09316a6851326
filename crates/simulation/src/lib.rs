//! Deterministic simulation runner.
//!
//! This crate provides a fully deterministic discrete-event environment for
//! the distance-vector routing protocol. Given the same seed, it produces
//! identical results every run.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                  SimulationRunner                       │
//! │                                                         │
//! │  ┌────────────────────────────────────────────────────┐ │
//! │  │     Event Queue (BTreeMap<EventKey, SimEvent>)     │ │
//! │  │     Ordered by: time, then insertion sequence      │ │
//! │  └────────────────────────┬───────────────────────────┘ │
//! │                           │                             │
//! │                           ▼                             │
//! │  ┌────────────────────────────────────────────────────┐ │
//! │  │     nodes: Vec<RouterNode>                         │ │
//! │  │     Each processes events sequentially             │ │
//! │  └────────────────────────┬───────────────────────────┘ │
//! │                           │                             │
//! │                           ▼                             │
//! │  ┌────────────────────────────────────────────────────┐ │
//! │  │     Actions → transport → schedule new arrivals    │ │
//! │  └────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The transport layer emulates the medium between directly connected
//! routers: lossless and uncorrupted, with a randomized delivery delay that
//! never reorders packets headed for the same destination.

mod config;
mod event_queue;
mod runner;
mod trace;

pub use config::SimulationConfig;
pub use event_queue::{EventKey, SimEvent};
pub use runner::{SimulationError, SimulationRunner, SimulationStats};
pub use trace::{MemorySink, NullSink, TraceSink};
