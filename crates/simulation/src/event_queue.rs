//! Event queue with deterministic ordering.

use dvsim_types::{Cost, NodeId, RoutingPacket};
use std::cmp::Ordering;

/// A scheduled occurrence in the simulation.
///
/// Created by the transport layer (arrivals) or by driver initialization
/// (scheduled link changes); consumed exactly once by the main loop, never
/// re-inserted.
#[derive(Debug, Clone)]
pub enum SimEvent {
    /// A routing packet popping out of the medium at `packet.dest`.
    PacketArrival { packet: RoutingPacket },

    /// A scheduled symmetric change of one link's cost. Dispatched to both
    /// endpoints; the link is undirected.
    LinkChange {
        endpoint_a: NodeId,
        endpoint_b: NodeId,
        new_cost: Cost,
    },
}

/// Key for ordering events in the queue.
///
/// Events are ordered by:
/// 1. Time (earlier first)
/// 2. Sequence number (FIFO among equal timestamps)
///
/// The stable tie-break keeps the simulation deterministic for a fixed
/// random seed.
#[derive(Debug, Clone, Copy)]
pub struct EventKey {
    /// When this event should be processed.
    pub time: f64,
    /// Sequence number for deterministic FIFO ordering.
    pub sequence: u64,
}

impl PartialEq for EventKey {
    fn eq(&self, other: &Self) -> bool {
        self.time.total_cmp(&other.time) == Ordering::Equal && self.sequence == other.sequence
    }
}

impl Eq for EventKey {}

impl Ord for EventKey {
    fn cmp(&self, other: &Self) -> Ordering {
        // Order by time first. Timestamps are always finite, so total_cmp
        // agrees with the usual ordering on f64.
        match self.time.total_cmp(&other.time) {
            Ordering::Equal => {}
            ord => return ord,
        }

        // Then by sequence (FIFO)
        self.sequence.cmp(&other.sequence)
    }
}

impl PartialOrd for EventKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_key_ordering() {
        let earlier = EventKey {
            time: 1.0,
            sequence: 2,
        };
        let later = EventKey {
            time: 2.0,
            sequence: 1,
        };
        assert!(earlier < later, "Earlier time should order first");
    }

    #[test]
    fn test_fifo_at_same_time() {
        let first = EventKey {
            time: 40.0,
            sequence: 1,
        };
        let second = EventKey {
            time: 40.0,
            sequence: 2,
        };
        assert!(
            first < second,
            "Equal timestamps should preserve insertion order"
        );
    }

    #[test]
    fn test_pop_order_is_nondecreasing() {
        use std::collections::BTreeMap;

        let times = [7.3, 1.2, 40.0, 3.9, 1.2, 40.0];
        let mut queue = BTreeMap::new();
        for (sequence, &time) in times.iter().enumerate() {
            queue.insert(
                EventKey {
                    time,
                    sequence: sequence as u64,
                },
                (),
            );
        }

        let mut previous = f64::NEG_INFINITY;
        while let Some((key, ())) = queue.pop_first() {
            assert!(key.time >= previous);
            previous = key.time;
        }
    }
}
