//! Actions emitted by router nodes.

use dvsim_types::RoutingPacket;

/// All possible outputs from a router node's state machine.
///
/// The runner executes these; nodes never perform I/O themselves.
#[derive(Debug, Clone)]
pub enum Action {
    /// Hand a packet to the transport layer for delivery to a direct
    /// neighbor. The transport validates connectivity and schedules a
    /// future arrival event.
    SendPacket { packet: RoutingPacket },
}

impl Action {
    /// Human-readable name for this action type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Action::SendPacket { .. } => "SendPacket",
        }
    }
}
