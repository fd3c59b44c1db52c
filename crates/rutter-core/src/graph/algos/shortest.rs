//! Shortest weighted path
//!
//! Branch-and-bound breadth-first search rather than classic Dijkstra:
//! weights are positive, so any candidate already at or above the best
//! known weight can never improve it and is pruned from the frontier.
//! The bound tightens monotonically as better routes are found.

use tracing::warn;

use crate::error::Result;
use crate::graph::algos::shared::{run_search, FrontierOrder, SearchPolicy};
use crate::graph::model::Graph;
use crate::graph::path::Path;
use crate::graph::types::NodeId;

struct ShortestPolicy<'a, N: NodeId> {
    end: &'a N,
    best: u32,
}

impl<N: NodeId> SearchPolicy<N> for ShortestPolicy<'_, N> {
    fn order(&self) -> FrontierOrder {
        FrontierOrder::BreadthFirst
    }

    fn keep_exploring(&self, candidate: &Path<N>) -> bool {
        candidate.weight() < self.best
    }

    fn offer(&mut self, path: &Path<N>) {
        // Strict improvement only: an equal-weight alternate never
        // replaces the recorded best.
        if path.hops() > 1 && path.last() == self.end && path.weight() < self.best {
            self.best = path.weight();
        }
    }
}

/// Weight of the lightest route from `start` to `end`, or `None` when no
/// route exists.
///
/// A route traverses at least one edge, so without a cycle returning to
/// `start`, `shortest_route(a, a)` is `None`.
#[tracing::instrument(skip(graph), fields(start = %start, end = %end))]
pub fn shortest_route<N: NodeId>(graph: &Graph<N>, start: &N, end: &N) -> Result<Option<u32>> {
    if !graph.has_node(start) {
        warn!(node = %start, "start node does not exist");
        return Ok(None);
    }

    let mut policy = ShortestPolicy {
        end,
        best: u32::MAX,
    };
    run_search(graph, start.clone(), &mut policy)?;

    Ok(if policy.best == u32::MAX {
        None
    } else {
        Some(policy.best)
    })
}
