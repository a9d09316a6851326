//! Command-line front end for the routing simulator.
//!
//! This crate owns everything the simulation core deliberately excludes:
//! flag parsing, tracing-subscriber setup, and a stdout trace sink. The
//! core stays pure — it receives final configuration values and a sink at
//! construction and never touches the terminal itself.

pub mod config;
pub mod sink;

pub use config::SimulatorConfig;
pub use sink::StdoutSink;
