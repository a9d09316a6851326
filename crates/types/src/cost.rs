//! Cost arithmetic and the unreachable sentinel.

/// Link or path cost. Non-negative; summed along paths.
pub type Cost = u32;

/// Sentinel cost meaning "unreachable".
///
/// Strictly greater than any achievable path cost in the supported
/// topologies. Never a valid shortest-path result; it only signals the
/// absence of a route.
pub const INFINITY: Cost = 999;

/// Whether a cost means "no route".
///
/// Sums of sentinels produced during recomputation exceed [`INFINITY`],
/// so this checks `>=` rather than equality.
pub fn is_unreachable(cost: Cost) -> bool {
    cost >= INFINITY
}
