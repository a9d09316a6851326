//! Routing update packets.

use crate::{Cost, NodeId};
use std::fmt;

/// A distance-vector advertisement from one router to a direct neighbor.
///
/// Immutable after construction. Each packet is built fresh by the sender
/// and moved through the transport into the arrival event, so every
/// receiver gets its own snapshot of the advertised costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingPacket {
    /// Id of the router sending this packet.
    pub source: NodeId,
    /// Id of the router this packet is sent to (must be a direct neighbor).
    pub dest: NodeId,
    /// The sender's advertised cost to every node in the network.
    pub min_costs: Vec<Cost>,
}

impl RoutingPacket {
    /// Create a new routing packet.
    pub fn new(source: NodeId, dest: NodeId, min_costs: Vec<Cost>) -> Self {
        Self {
            source,
            dest,
            min_costs,
        }
    }
}

impl fmt::Display for RoutingPacket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "src:{}, dest:{}, contents:", self.source, self.dest)?;
        for cost in &self.min_costs {
            write!(f, " {cost}")?;
        }
        Ok(())
    }
}
