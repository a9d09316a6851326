//! Deterministic simulation runner.
//!
//! The runner owns the logical clock, the event queue, the topology, and
//! the router nodes. It pops events in timestamp order, dispatches them to
//! the right node's handler, and executes the returned actions through the
//! transport layer, which schedules future packet arrivals.

use crate::event_queue::{EventKey, SimEvent};
use crate::{SimulationConfig, TraceSink};
use dvsim_core::{Action, Event, StateMachine};
use dvsim_node::RouterNode;
use dvsim_types::{NodeId, RoutingPacket, Topology, TopologyError};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, info, trace, warn};

/// Errors that prevent a simulation from being constructed.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// The requested node count has no baked-in topology.
    #[error(transparent)]
    Topology(#[from] TopologyError),
}

/// Deterministic simulation runner.
///
/// Processes events in deterministic order. Given the same seed, produces
/// identical results every run. Single-threaded: every "send" is a
/// synchronous insertion into the event queue, and all node state is
/// accessed only from the main loop.
pub struct SimulationRunner {
    config: SimulationConfig,

    /// All routers in the simulation, indexed by [`NodeId`].
    nodes: Vec<RouterNode>,

    /// The direct-link cost matrix. Mutated only by link-change events.
    topology: Topology,

    /// Global event queue, ordered deterministically.
    event_queue: BTreeMap<EventKey, SimEvent>,

    /// Sequence counter for stable FIFO ordering at equal timestamps.
    sequence: u64,

    /// Current simulation time.
    now: f64,

    /// RNG for transmission delays (seeded for determinism).
    rng: ChaCha8Rng,

    /// Statistics.
    stats: SimulationStats,

    /// Destination for formatted trace output.
    sink: Box<dyn TraceSink>,
}

/// Statistics collected during simulation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SimulationStats {
    /// Total events processed.
    pub events_processed: u64,
    /// Packets accepted by the transport and scheduled for delivery.
    pub packets_sent: u64,
    /// Packets rejected by transport validation.
    pub packets_dropped: u64,
    /// Link-cost change events applied.
    pub link_changes_applied: u64,
    /// Total actions emitted by nodes.
    pub actions_generated: u64,
}

impl SimulationRunner {
    /// Create a runner: build the topology and all router nodes, seed their
    /// initial broadcasts, and schedule the preset link changes.
    pub fn new(
        config: SimulationConfig,
        sink: Box<dyn TraceSink>,
    ) -> Result<Self, SimulationError> {
        let topology = Topology::preset(config.num_nodes)?;
        let rng = ChaCha8Rng::seed_from_u64(config.seed);

        let nodes: Vec<RouterNode> = (0..config.num_nodes)
            .map(|id| RouterNode::new(id, config.poison_reverse, topology.direct_costs(id)))
            .collect();

        let mut runner = Self {
            config,
            nodes,
            topology,
            event_queue: BTreeMap::new(),
            sequence: 0,
            now: 0.0,
            rng,
            stats: SimulationStats::default(),
            sink,
        };

        // Each node advertises its direct costs before anything else runs,
        // in id order, so network-wide knowledge is seeded deterministically.
        for id in 0..runner.nodes.len() {
            let actions = runner.nodes[id].initialize();
            runner.process_actions(actions);
        }

        if runner.config.link_changes {
            runner.schedule_preset_link_changes();
        }

        info!(
            num_nodes = runner.config.num_nodes,
            seed = runner.config.seed,
            poison_reverse = runner.config.poison_reverse,
            link_changes = runner.config.link_changes,
            "Created simulation runner"
        );

        Ok(runner)
    }

    /// Future link-cost perturbations baked into each topology preset.
    fn schedule_preset_link_changes(&mut self) {
        let changes: &[(f64, NodeId, NodeId, u32)] = match self.config.num_nodes {
            3 => &[(40.0, 0, 1, 60)],
            // Same schedule for the 4- and 5-node networks.
            _ => &[(10_000.0, 0, 3, 1), (20_000.0, 0, 1, 6)],
        };
        for &(time, endpoint_a, endpoint_b, new_cost) in changes {
            self.schedule(
                time,
                SimEvent::LinkChange {
                    endpoint_a,
                    endpoint_b,
                    new_cost,
                },
            );
        }
    }

    /// Run the main loop until the event queue drains.
    ///
    /// Termination is natural exhaustion: once tables stop changing, no
    /// node re-advertises, so no new arrivals are scheduled and the queue
    /// empties.
    pub fn run(&mut self) {
        while let Some((key, event)) = self.event_queue.pop_first() {
            self.now = key.time;
            self.stats.events_processed += 1;

            match event {
                SimEvent::PacketArrival { packet } => {
                    let target = packet.dest;
                    // Transport validated the id at send time; anything out
                    // of range here is a corrupted queue.
                    assert!(
                        target < self.nodes.len(),
                        "unknown event entity {target}"
                    );

                    if self.config.trace_level > 1 {
                        self.sink
                            .println(&format!("MAIN: rcv event, t={} at {}", self.now, target));
                        self.sink.println(&format!(" {packet}"));
                    }
                    trace!(time = self.now, node = target, "packet arrival");

                    let actions = {
                        let node = &mut self.nodes[target];
                        node.set_time(self.now);
                        node.handle(Event::UpdateReceived { packet })
                    };
                    self.process_actions(actions);
                }

                SimEvent::LinkChange {
                    endpoint_a,
                    endpoint_b,
                    new_cost,
                } => {
                    if self.config.trace_level > 1 {
                        self.sink.println(&format!(
                            "MAIN: rcv event, t={} at {}",
                            self.now, endpoint_a
                        ));
                    }
                    debug!(
                        time = self.now,
                        endpoint_a, endpoint_b, new_cost, "link cost change"
                    );

                    self.topology.set_cost(endpoint_a, endpoint_b, new_cost);
                    self.stats.link_changes_applied += 1;

                    // The link is undirected: both endpoints handle the
                    // change, each naming the other as the neighbor.
                    for (node_id, neighbor) in
                        [(endpoint_a, endpoint_b), (endpoint_b, endpoint_a)]
                    {
                        let actions = {
                            let node = &mut self.nodes[node_id];
                            node.set_time(self.now);
                            node.handle(Event::LinkCostChanged {
                                neighbor,
                                new_cost,
                            })
                        };
                        self.process_actions(actions);
                    }
                }
            }

            if self.config.trace_level > 2 {
                let reports: Vec<String> =
                    self.nodes.iter().map(|node| node.report().to_string()).collect();
                for report in reports {
                    self.sink.println(&report);
                }
            }
        }

        self.sink.println(&format!(
            "\nSimulator terminated at t={}, no packets in medium",
            self.now
        ));
        info!(
            final_time = self.now,
            events_processed = self.stats.events_processed,
            packets_sent = self.stats.packets_sent,
            "Simulation complete"
        );
    }

    /// Execute the actions a node returned from a handler.
    fn process_actions(&mut self, actions: Vec<Action>) {
        self.stats.actions_generated += actions.len() as u64;
        for action in actions {
            match action {
                Action::SendPacket { packet } => self.send_packet(packet),
            }
        }
    }

    /// Transport entry point: validate a packet against the topology and
    /// schedule its arrival.
    ///
    /// The protocol is link-local gossip: only directly connected routers
    /// may exchange updates. Invalid packets are dropped with a warning and
    /// the simulation continues. An accepted packet is moved into the
    /// arrival event, which owns it until dispatch.
    /// Delivery happens after a uniform random delay in [1, 10), measured
    /// from the latest pending arrival for the same destination so packets
    /// to one node never overtake each other.
    pub fn send_packet(&mut self, packet: RoutingPacket) {
        let num_nodes = self.topology.num_nodes();
        if packet.source >= num_nodes {
            self.drop_packet("WARN: illegal source id in your packet, ignoring packet!");
            return;
        }
        if packet.dest >= num_nodes {
            self.drop_packet("WARN: illegal dest id in your packet, ignoring packet!");
            return;
        }
        if packet.source == packet.dest {
            self.drop_packet("WARN: source and destination id's the same, ignoring packet");
            return;
        }
        if !self.topology.is_connected(packet.source, packet.dest) {
            self.drop_packet("WARN: source and destination not connected, ignoring packet");
            return;
        }

        // The medium cannot reorder: arrival lands between 1 and 10 time
        // units after the latest arrival already scheduled for this
        // destination (or after the clock, if nothing is pending).
        let mut last_time = self.now;
        for (key, event) in &self.event_queue {
            if let SimEvent::PacketArrival { packet: pending } = event {
                if pending.dest == packet.dest && key.time > last_time {
                    last_time = key.time;
                }
            }
        }
        let arrival = last_time + self.rng.gen_range(1.0..10.0);

        if self.config.trace_level > 2 {
            self.sink.println(&format!(
                "    TOLAYER2: source: {} dest: {}             costs: {}",
                packet.source,
                packet.dest,
                packet
                    .min_costs
                    .iter()
                    .map(|cost| cost.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            ));
            self.sink
                .println("    TOLAYER2: scheduling arrival on other side");
        }
        trace!(
            source = packet.source,
            dest = packet.dest,
            arrival,
            "scheduling packet arrival"
        );

        self.schedule(arrival, SimEvent::PacketArrival { packet });
        self.stats.packets_sent += 1;
    }

    fn drop_packet(&mut self, message: &str) {
        warn!("{}", message.trim_start_matches("WARN: "));
        self.sink.println(message);
        self.stats.packets_dropped += 1;
    }

    /// Insert an event at the given time, tagging it with the next sequence
    /// number so equal timestamps pop in insertion order.
    fn schedule(&mut self, time: f64, event: SimEvent) {
        if self.config.trace_level > 3 {
            self.sink
                .println(&format!("            INSERTEVENT: time is {}", self.now));
            self.sink
                .println(&format!("            INSERTEVENT: future time will be {time}"));
        }
        self.sequence += 1;
        let key = EventKey {
            time,
            sequence: self.sequence,
        };
        self.event_queue.insert(key, event);
    }

    /// Current simulation time.
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Simulation statistics.
    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    /// A router by id.
    pub fn node(&self, id: NodeId) -> Option<&RouterNode> {
        self.nodes.get(id)
    }

    /// Number of routers.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// The current link-cost matrix.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Number of events still pending.
    pub fn pending_events(&self) -> usize {
        self.event_queue.len()
    }

    /// Arrival times of all pending packets for one destination, in queue
    /// order. Diagnostic accessor, used to verify the per-destination FIFO
    /// guarantee.
    pub fn arrival_times_for(&self, dest: NodeId) -> Vec<f64> {
        self.event_queue
            .iter()
            .filter_map(|(key, event)| match event {
                SimEvent::PacketArrival { packet } if packet.dest == dest => Some(key.time),
                _ => None,
            })
            .collect()
    }
}
