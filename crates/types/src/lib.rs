//! Core types for the distance-vector routing simulator.
//!
//! This crate provides the foundational value types shared by every layer:
//!
//! - [`NodeId`] / [`Cost`] / [`INFINITY`]: identifiers and link weights
//! - [`RoutingPacket`]: a distance-vector advertisement in flight
//! - [`Topology`]: the static connectivity-cost matrix with baked-in presets

mod cost;
mod packet;
mod topology;

pub use cost::{is_unreachable, Cost, INFINITY};
pub use packet::RoutingPacket;
pub use topology::{Topology, TopologyError};

/// Router identifier.
///
/// Plain index into the node collection; all ids are in `0..num_nodes`
/// for the lifetime of a simulation run.
pub type NodeId = usize;
