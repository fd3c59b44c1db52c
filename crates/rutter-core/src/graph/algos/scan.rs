//! Route validity and total weight over an explicit stop sequence
//!
//! Linear scans. A nonexistent node simply means the pair has no edge,
//! so neither operation surfaces a distinct not-found error.

use crate::graph::model::Graph;
use crate::graph::types::NodeId;

/// True when every consecutive pair of stops is connected by an edge.
/// Sequences with fewer than two stops are trivially valid.
pub fn has_route<N: NodeId>(graph: &Graph<N>, stops: &[N]) -> bool {
    stops
        .windows(2)
        .all(|pair| graph.has_edge(&pair[0], &pair[1]))
}

/// Total weight of the route, or `None` when any consecutive pair has no
/// edge. Sequences with fewer than two stops weigh `Some(0)`.
pub fn route_weight<N: NodeId>(graph: &Graph<N>, stops: &[N]) -> Option<u32> {
    let mut total = 0u32;
    for pair in stops.windows(2) {
        if !graph.has_edge(&pair[0], &pair[1]) {
            return None;
        }
        total = total.saturating_add(graph.edge_weight(&pair[0], &pair[1]));
    }
    Some(total)
}
