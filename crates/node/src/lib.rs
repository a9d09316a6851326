//! Distance-vector router node.
//!
//! A [`RouterNode`] holds one router's protocol state: its direct link
//! costs, the distance table of last-reported neighbor vectors, and the
//! next hop chosen per destination. It is a pure state machine — packet
//! sends come back as [`Action`]s for the simulation runner to transport.

mod report;
mod state;

pub use report::DistanceTableReport;
pub use state::RouterNode;
