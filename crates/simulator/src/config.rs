//! Configuration types for the simulator CLI.

use dvsim_simulation::SimulationConfig;

/// Configuration for a simulator invocation.
///
/// Mirrors the command-line surface; [`to_simulation_config`]
/// (Self::to_simulation_config) produces the value the core consumes.
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Number of router nodes (3, 4, or 5).
    pub num_nodes: usize,

    /// Activate the preset link-cost changes.
    pub link_changes: bool,

    /// Activate poison reverse.
    pub poison_reverse: bool,

    /// Random seed. Signed to match the flag surface; the core seeds its
    /// generator from the raw bits.
    pub seed: i64,

    /// Trace verbosity (1-4).
    pub trace_level: u8,
}

impl SimulatorConfig {
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
    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the trace verbosity.
    pub fn with_trace_level(mut self, level: u8) -> Self {
        self.trace_level = level;
        self
    }

    /// Convert to the configuration consumed by the simulation core.
    pub fn to_simulation_config(&self) -> SimulationConfig {
        SimulationConfig::new(self.num_nodes)
            .with_link_changes(self.link_changes)
            .with_poison_reverse(self.poison_reverse)
            .with_seed(self.seed as u64)
            .with_trace_level(self.trace_level)
    }
}

impl Default for SimulatorConfig {
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
