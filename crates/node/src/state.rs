//! The router node state machine.

use crate::DistanceTableReport;
use dvsim_core::{Action, Event, StateMachine};
use dvsim_types::{Cost, NodeId, RoutingPacket, INFINITY};
use tracing::{debug, trace};

/// Per-router distance-vector state.
///
/// Invariants:
/// - `distance_table[id]` is always this node's own current best-cost row,
///   recomputed after every state change.
/// - State is mutated only through [`StateMachine::handle`] and
///   [`RouterNode::initialize`]; other nodes communicate exclusively via
///   packets through the transport layer.
#[derive(Debug, Clone)]
pub struct RouterNode {
    id: NodeId,
    num_nodes: usize,
    poison_reverse: bool,
    /// Direct link cost per neighbor id, `INFINITY` if not connected.
    /// The entry for our own id is unused.
    link_costs: Vec<Cost>,
    /// Row `i` = node `i`'s distances to all destinations, as last reported.
    distance_table: Vec<Vec<Cost>>,
    /// Chosen next hop per destination, `None` if unreachable.
    routes: Vec<Option<NodeId>>,
    now: f64,
}

impl RouterNode {
    /// Create a router with the given direct link costs.
    ///
    /// The distance table starts all-`INFINITY` except our own row, which is
    /// seeded from the direct costs. Call [`initialize`](Self::initialize)
    /// afterwards to obtain the seeding broadcast.
    pub fn new(id: NodeId, poison_reverse: bool, direct_costs: Vec<Cost>) -> Self {
        let num_nodes = direct_costs.len();
        let mut distance_table = vec![vec![INFINITY; num_nodes]; num_nodes];
        distance_table[id] = direct_costs.clone();

        let routes = direct_costs
            .iter()
            .enumerate()
            .map(|(i, &cost)| if cost != INFINITY { Some(i) } else { None })
            .collect();

        Self {
            id,
            num_nodes,
            poison_reverse,
            link_costs: direct_costs,
            distance_table,
            routes,
            now: 0.0,
        }
    }

    /// Broadcast our initial distance vector to all direct neighbors.
    ///
    /// No poisoning: there is no prior advertisement to suppress. This seeds
    /// network-wide knowledge before any external change arrives.
    pub fn initialize(&self) -> Vec<Action> {
        self.broadcast(None)
    }

    /// This node's id.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Our current best-known cost to `dest`.
    pub fn distance_to(&self, dest: NodeId) -> Cost {
        self.distance_table[self.id][dest]
    }

    /// The next hop chosen for `dest`, `None` if unreachable.
    pub fn route_to(&self, dest: NodeId) -> Option<NodeId> {
        self.routes[dest]
    }

    /// Current direct link cost to `neighbor`.
    pub fn link_cost(&self, neighbor: NodeId) -> Cost {
        self.link_costs[neighbor]
    }

    /// The full distance table (row `i` = node `i`'s last-reported vector).
    pub fn distance_table(&self) -> &[Vec<Cost>] {
        &self.distance_table
    }

    /// Snapshot of this node's state for trace output.
    pub fn report(&self) -> DistanceTableReport {
        DistanceTableReport::new(
            self.id,
            self.now,
            self.distance_table.clone(),
            self.routes.clone(),
        )
    }

    /// Overwrite the sender's row with its advertised vector, then
    /// recompute. Re-advertise only if our own best-cost row changed —
    /// this is what lets a stable network go quiet.
    fn receive_update(&mut self, packet: RoutingPacket) -> Vec<Action> {
        self.distance_table[packet.source] = packet.min_costs;

        let before = self.distance_table[self.id].clone();
        self.recompute_routes();

        if self.distance_table[self.id] != before {
            trace!(node = self.id, from = packet.source, "own row changed, re-advertising");
            self.broadcast(None)
        } else {
            Vec::new()
        }
    }

    /// Apply a direct link-cost change and re-advertise unconditionally:
    /// the neighbor must learn about the change even when our table did not
    /// move. The changed neighbor's entry is poisoned in the outgoing
    /// vectors when poison reverse is enabled.
    fn update_link_cost(&mut self, neighbor: NodeId, new_cost: Cost) -> Vec<Action> {
        debug!(
            node = self.id,
            neighbor,
            new_cost,
            "link cost changed"
        );
        self.link_costs[neighbor] = new_cost;
        self.recompute_routes();
        self.broadcast(Some(neighbor))
    }

    /// Recompute our own best-cost row and next hops.
    ///
    /// For each destination, scan candidate next hops in ascending id order
    /// and keep the first strict minimum of
    /// `link_costs[hop] + distance_table[hop][dest]`. Non-neighbors never
    /// win: their candidates start at `INFINITY` and the comparison against
    /// the `INFINITY` floor is strict.
    fn recompute_routes(&mut self) {
        for dest in 0..self.num_nodes {
            if dest == self.id {
                continue;
            }
            let mut best_cost = INFINITY;
            let mut best_hop = None;
            for hop in 0..self.num_nodes {
                if hop == self.id {
                    continue;
                }
                let candidate = self.link_costs[hop] + self.distance_table[hop][dest];
                if candidate < best_cost {
                    best_cost = candidate;
                    best_hop = Some(hop);
                }
            }
            self.distance_table[self.id][dest] = best_cost;
            self.routes[dest] = best_hop;
        }
    }

    /// Build one outgoing packet per direct neighbor, all carrying a copy
    /// of our own row. With poison reverse enabled and a just-changed link,
    /// the changed neighbor's entry is set to `INFINITY` in every outgoing
    /// vector (directional poisoning, not per-recipient suppression).
    fn broadcast(&self, poison_target: Option<NodeId>) -> Vec<Action> {
        let mut vector = self.distance_table[self.id].clone();
        if self.poison_reverse {
            if let Some(target) = poison_target {
                vector[target] = INFINITY;
            }
        }

        (0..self.num_nodes)
            .filter(|&n| n != self.id && self.link_costs[n] != INFINITY)
            .map(|neighbor| Action::SendPacket {
                packet: RoutingPacket::new(self.id, neighbor, vector.clone()),
            })
            .collect()
    }
}

impl StateMachine for RouterNode {
    fn handle(&mut self, event: Event) -> Vec<Action> {
        match event {
            Event::UpdateReceived { packet } => self.receive_update(packet),
            Event::LinkCostChanged { neighbor, new_cost } => {
                self.update_link_cost(neighbor, new_cost)
            }
        }
    }

    fn set_time(&mut self, now: f64) {
        self.now = now;
    }

    fn now(&self) -> f64 {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node0_3net(poison_reverse: bool) -> RouterNode {
        // 3-node preset as seen from node 0.
        RouterNode::new(0, poison_reverse, vec![0, 4, 1])
    }

    fn packet_dests(actions: &[Action]) -> Vec<NodeId> {
        actions
            .iter()
            .map(|action| match action {
                Action::SendPacket { packet } => packet.dest,
            })
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let node = node0_3net(false);
        assert_eq!(node.distance_to(1), 4);
        assert_eq!(node.distance_to(2), 1);
        assert_eq!(node.route_to(1), Some(1));
        assert_eq!(node.route_to(2), Some(2));
        // Rows for other nodes are unknown at construction.
        assert_eq!(node.distance_table()[1], vec![INFINITY; 3]);
    }

    #[test]
    fn test_initialize_broadcasts_to_neighbors_only() {
        let node = RouterNode::new(1, false, vec![1, 0, 1, INFINITY]);
        let actions = node.initialize();
        assert_eq!(packet_dests(&actions), vec![0, 2]);
        for action in &actions {
            let Action::SendPacket { packet } = action;
            assert_eq!(packet.source, 1);
            assert_eq!(packet.min_costs, vec![1, 0, 1, INFINITY]);
        }
    }

    #[test]
    fn test_update_improves_route() {
        // Node 1 in the 3-node preset: direct to 2 costs 50, but via 0 it
        // costs 4 + 1 = 5.
        let mut node = RouterNode::new(1, false, vec![4, 0, 50]);
        let actions = node.handle(Event::UpdateReceived {
            packet: RoutingPacket::new(0, 1, vec![0, 4, 1]),
        });
        assert_eq!(node.distance_to(2), 5);
        assert_eq!(node.route_to(2), Some(0));
        // The improvement must be re-advertised.
        assert!(!actions.is_empty());
    }

    #[test]
    fn test_identical_update_is_idempotent() {
        let mut node = RouterNode::new(1, false, vec![4, 0, 50]);
        let packet = RoutingPacket::new(0, 1, vec![0, 4, 1]);

        let first = node.handle(Event::UpdateReceived {
            packet: packet.clone(),
        });
        assert!(!first.is_empty());

        // Same vector again: the table cannot change, so no re-flood.
        let second = node.handle(Event::UpdateReceived { packet });
        assert!(second.is_empty());
    }

    #[test]
    fn test_tie_break_takes_first_minimum() {
        // Two hops with equal total cost to destination 3; the scan keeps
        // the first strict minimum, so hop 1 wins over hop 2.
        let mut node = RouterNode::new(0, false, vec![0, 2, 2, INFINITY]);
        node.handle(Event::UpdateReceived {
            packet: RoutingPacket::new(1, 0, vec![2, 0, INFINITY, 5]),
        });
        node.handle(Event::UpdateReceived {
            packet: RoutingPacket::new(2, 0, vec![2, INFINITY, 0, 5]),
        });
        assert_eq!(node.distance_to(3), 7);
        assert_eq!(node.route_to(3), Some(1));
    }

    #[test]
    fn test_link_change_broadcasts_unconditionally() {
        let mut node = node0_3net(false);
        // Re-assert the current cost: table unchanged, broadcast anyway.
        let actions = node.handle(Event::LinkCostChanged {
            neighbor: 1,
            new_cost: 4,
        });
        assert_eq!(packet_dests(&actions), vec![1, 2]);
    }

    #[test]
    fn test_poison_reverse_poisons_changed_neighbor() {
        let mut node = node0_3net(true);
        let actions = node.handle(Event::LinkCostChanged {
            neighbor: 1,
            new_cost: 60,
        });
        // Every outgoing vector carries INFINITY in slot 1.
        assert!(!actions.is_empty());
        for action in &actions {
            let Action::SendPacket { packet } = action;
            assert_eq!(packet.min_costs[1], INFINITY);
        }
    }

    #[test]
    fn test_poison_reverse_disabled_sends_true_costs() {
        let mut node = node0_3net(false);
        node.handle(Event::UpdateReceived {
            packet: RoutingPacket::new(1, 0, vec![4, 0, 50]),
        });
        node.handle(Event::UpdateReceived {
            packet: RoutingPacket::new(2, 0, vec![1, 50, 0]),
        });

        let actions = node.handle(Event::LinkCostChanged {
            neighbor: 1,
            new_cost: 60,
        });
        // Without poisoning, the rerouted cost (0 -> 2 -> 1 = 51) goes out
        // as-is.
        assert_eq!(node.distance_to(1), 51);
        for action in &actions {
            let Action::SendPacket { packet } = action;
            assert_eq!(packet.min_costs[1], 51);
        }
    }

    #[test]
    fn test_steady_state_broadcast_is_unpoisoned() {
        // Poison reverse on, but an ordinary update-driven broadcast must
        // carry true costs: poisoning is tied to a just-changed link.
        let mut node = RouterNode::new(1, true, vec![4, 0, 50]);
        let actions = node.handle(Event::UpdateReceived {
            packet: RoutingPacket::new(0, 1, vec![0, 4, 1]),
        });
        for action in &actions {
            let Action::SendPacket { packet } = action;
            assert_eq!(packet.min_costs[2], 5);
        }
    }

    #[test]
    fn test_unreachable_destination_has_no_route() {
        // Node 3 in the 4-node preset has no link to 1 and has heard
        // nothing yet, so 1 is unreachable through every candidate hop.
        let node = RouterNode::new(3, false, vec![7, INFINITY, 2, 0]);
        assert_eq!(node.route_to(1), None);
        assert_eq!(node.distance_to(1), INFINITY);
    }
}
