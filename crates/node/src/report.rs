//! Distance-table trace reports.

use dvsim_types::{Cost, NodeId};
use std::fmt;

/// A renderable snapshot of one router's state.
///
/// The runner takes these after dispatching events and pushes the rendered
/// lines to the trace sink; router nodes never format or print themselves.
#[derive(Debug, Clone)]
pub struct DistanceTableReport {
    id: NodeId,
    now: f64,
    distances: Vec<Vec<Cost>>,
    routes: Vec<Option<NodeId>>,
}

impl DistanceTableReport {
    pub(crate) fn new(
        id: NodeId,
        now: f64,
        distances: Vec<Vec<Cost>>,
        routes: Vec<Option<NodeId>>,
    ) -> Self {
        Self {
            id,
            now,
            distances,
            routes,
        }
    }

    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.distances.len();
        write!(f, "    dst |")?;
        for i in 0..n {
            write!(f, "{i:>5}")?;
        }
        writeln!(f)?;
        writeln!(f, "---------{}", "-----".repeat(n))
    }
}

impl fmt::Display for DistanceTableReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.distances.len();

        writeln!(
            f,
            "Current state for router {} at time {:.1}",
            self.id, self.now
        )?;
        writeln!(f)?;

        writeln!(f, "Distancetable")?;
        self.write_header(f)?;
        for (i, row) in self.distances.iter().enumerate() {
            write!(f, " nbr{i:<4}|")?;
            for cost in row {
                write!(f, "{cost:>5}")?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;

        writeln!(f, "Our distance vector and routes:")?;
        self.write_header(f)?;
        write!(f, " cost   |")?;
        for dest in 0..n {
            write!(f, "{:>5}", self.distances[self.id][dest])?;
        }
        writeln!(f)?;
        write!(f, " route  |")?;
        for route in &self.routes {
            match route {
                Some(hop) => write!(f, "{hop:>5}")?,
                None => write!(f, "{:>5}", "-")?,
            }
        }
        writeln!(f)
    }
}
