//! Static connectivity-cost matrices.

use crate::{Cost, NodeId, INFINITY};
use thiserror::Error;

/// Errors from topology construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    /// Only the baked-in 3-, 4-, and 5-node networks are supported.
    #[error("unsupported node count {0} (supported: 3, 4, 5)")]
    UnsupportedNodeCount(usize),
}

/// The network's direct-link cost matrix.
///
/// Symmetric (links are undirected), with `INFINITY` where two nodes have no
/// direct link and 0 on the diagonal. Set once at simulation construction
/// from a preset; mutated only by scheduled link-cost change events, which
/// update both directions together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    costs: Vec<Vec<Cost>>,
}

impl Topology {
    /// Build the baked-in topology for the given node count.
    pub fn preset(num_nodes: usize) -> Result<Self, TopologyError> {
        let links: &[(NodeId, NodeId, Cost)] = match num_nodes {
            3 => &[(0, 1, 4), (0, 2, 1), (1, 2, 50)],
            4 => &[
                (0, 1, 1),
                (0, 2, 3),
                (0, 3, 7),
                (1, 2, 1),
                (1, 3, INFINITY),
                (2, 3, 2),
            ],
            5 => &[
                (0, 1, 1),
                (0, 2, 3),
                (0, 3, 7),
                (0, 4, 1),
                (1, 2, 1),
                (1, 3, INFINITY),
                (1, 4, 1),
                (2, 3, 2),
                (2, 4, 4),
                (3, 4, INFINITY),
            ],
            n => return Err(TopologyError::UnsupportedNodeCount(n)),
        };

        let mut topology = Self {
            costs: vec![vec![0; num_nodes]; num_nodes],
        };
        for &(a, b, cost) in links {
            topology.set_cost(a, b, cost);
        }
        Ok(topology)
    }

    /// Number of nodes in the network.
    pub fn num_nodes(&self) -> usize {
        self.costs.len()
    }

    /// Direct link cost between two nodes.
    pub fn cost(&self, a: NodeId, b: NodeId) -> Cost {
        self.costs[a][b]
    }

    /// Set the direct link cost between two nodes, both directions.
    pub fn set_cost(&mut self, a: NodeId, b: NodeId, cost: Cost) {
        self.costs[a][b] = cost;
        self.costs[b][a] = cost;
    }

    /// Whether two distinct nodes share a direct link.
    pub fn is_connected(&self, a: NodeId, b: NodeId) -> bool {
        a != b && self.costs[a][b] != INFINITY
    }

    /// A node's row of direct link costs, for seeding its router state.
    pub fn direct_costs(&self, node: NodeId) -> Vec<Cost> {
        self.costs[node].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_sizes() {
        for n in [3, 4, 5] {
            let topology = Topology::preset(n).unwrap();
            assert_eq!(topology.num_nodes(), n);
        }
    }

    #[test]
    fn test_unsupported_counts_rejected() {
        assert_eq!(
            Topology::preset(2),
            Err(TopologyError::UnsupportedNodeCount(2))
        );
        assert_eq!(
            Topology::preset(6),
            Err(TopologyError::UnsupportedNodeCount(6))
        );
        assert_eq!(
            Topology::preset(0),
            Err(TopologyError::UnsupportedNodeCount(0))
        );
    }

    #[test]
    fn test_presets_are_symmetric() {
        for n in [3, 4, 5] {
            let topology = Topology::preset(n).unwrap();
            for a in 0..n {
                for b in 0..n {
                    assert_eq!(topology.cost(a, b), topology.cost(b, a));
                }
            }
        }
    }

    #[test]
    fn test_three_node_costs() {
        let topology = Topology::preset(3).unwrap();
        assert_eq!(topology.cost(0, 1), 4);
        assert_eq!(topology.cost(0, 2), 1);
        assert_eq!(topology.cost(1, 2), 50);
    }

    #[test]
    fn test_disconnected_links() {
        let topology = Topology::preset(4).unwrap();
        assert!(!topology.is_connected(1, 3));
        assert!(topology.is_connected(0, 3));
        // A node is never "connected" to itself.
        assert!(!topology.is_connected(2, 2));
    }

    #[test]
    fn test_set_cost_updates_both_directions() {
        let mut topology = Topology::preset(3).unwrap();
        topology.set_cost(0, 1, 60);
        assert_eq!(topology.cost(0, 1), 60);
        assert_eq!(topology.cost(1, 0), 60);
    }
}
