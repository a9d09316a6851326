//! Configuration for a simulation run.

/// Configuration consumed by the runner at construction.
///
/// The core performs no parsing; the CLI (or a test) supplies final values.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Number of routers. Only the baked-in 3-, 4-, and 5-node topologies
    /// are supported; anything else is a fatal configuration error.
    pub num_nodes: usize,

    /// Whether to schedule the preset link-cost changes.
    pub link_changes: bool,

    /// Whether nodes poison the changed neighbor's entry when advertising
    /// after a link-cost change.
    pub poison_reverse: bool,

    /// Random seed for deterministic delay sampling.
    pub seed: u64,

    /// Trace verbosity pushed to the sink:
    /// `>1` per-event dispatch lines, `>2` transport lines and per-node
    /// distance tables, `>3` event-insertion lines.
    pub trace_level: u8,
}

impl SimulationConfig {
    /// Create a configuration with the defaults for `num_nodes` routers.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            num_nodes,
            ..Default::default()
        }
    }

    /// Set whether preset link changes are scheduled.
    pub fn with_link_changes(mut self, enabled: bool) -> Self {
        self.link_changes = enabled;
        self
    }

    /// Set whether poison reverse is enabled.
    pub fn with_poison_reverse(mut self, enabled: bool) -> Self {
        self.poison_reverse = enabled;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the trace verbosity.
    pub fn with_trace_level(mut self, level: u8) -> Self {
        self.trace_level = level;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_nodes: 3,
            link_changes: true,
            poison_reverse: true,
            seed: 1234,
            trace_level: 3,
        }
    }
}
