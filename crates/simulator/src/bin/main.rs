//! Distance-Vector Routing Simulator CLI
//!
//! Run deterministic distance-vector routing simulations with configurable
//! parameters.
//!
//! # Example
//!
//! ```bash
//! # Default three-node network, poison reverse on, scheduled link changes
//! dvsim
//!
//! # Five nodes, poison reverse off, quiet trace, custom seed
//! dvsim -n 5 -p false -t 1 -s 42
//! ```

use clap::{ArgAction, Parser};
use dvsim_simulation::SimulationRunner;
use dvsim_simulator::{SimulatorConfig, StdoutSink};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Distance-Vector Routing Simulator
///
/// Runs deterministic routing simulations. Single-threaded, reproducible
/// when the same seed is used.
#[derive(Parser, Debug)]
#[command(name = "dvsim")]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of router nodes (3, 4, or 5)
    #[arg(short = 'n', long, default_value = "3")]
    nodes: usize,

    /// Apply the preset link-cost changes during the run
    #[arg(short = 'c', long, default_value_t = true, action = ArgAction::Set)]
    changelinks: bool,

    /// Enable poison reverse
    #[arg(short = 'p', long, default_value_t = true, action = ArgAction::Set)]
    poison: bool,

    /// Random seed for reproducible results
    #[arg(short = 's', long, default_value = "1234")]
    seed: i64,

    /// Trace verbosity: 1 quiet, 2 events, 3 tables, 4 queue internals
    #[arg(short = 't', long, default_value = "3")]
    trace: u8,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    let config = SimulatorConfig::new(args.nodes)
        .with_link_changes(args.changelinks)
        .with_poison_reverse(args.poison)
        .with_seed(args.seed)
        .with_trace_level(args.trace);

    let mut sim = match SimulationRunner::new(config.to_simulation_config(), Box::new(StdoutSink)) {
        Ok(sim) => sim,
        Err(err) => {
            eprintln!("dvsim: {err}");
            std::process::exit(2);
        }
    };

    info!(
        nodes = args.nodes,
        changelinks = args.changelinks,
        poison = args.poison,
        seed = args.seed,
        trace = args.trace,
        "Starting simulation"
    );

    sim.run();

    let stats = sim.stats();
    info!(
        events_processed = stats.events_processed,
        packets_sent = stats.packets_sent,
        packets_dropped = stats.packets_dropped,
        link_changes_applied = stats.link_changes_applied,
        final_time = sim.now(),
        "Simulation finished"
    );
}
