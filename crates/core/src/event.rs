//! Events delivered to router nodes.

use dvsim_types::{Cost, NodeId, RoutingPacket};

/// All possible events a router node can receive.
///
/// Events are **passive data** describing something that happened. The state
/// machine processes events and returns actions; it never sends anything
/// directly.
#[derive(Debug, Clone)]
pub enum Event {
    /// A neighbor's distance-vector advertisement arrived.
    ///
    /// The packet is an independent snapshot built by the sender at send
    /// time; taking its vector into our tables never aliases the sender's
    /// state.
    UpdateReceived { packet: RoutingPacket },

    /// The cost of one of this node's direct links changed.
    ///
    /// The driver delivers this to both endpoints of the link; each side
    /// sees the other as `neighbor`.
    LinkCostChanged { neighbor: NodeId, new_cost: Cost },
}

impl Event {
    /// Human-readable name for this event type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Event::UpdateReceived { .. } => "UpdateReceived",
            Event::LinkCostChanged { .. } => "LinkCostChanged",
        }
    }
}
