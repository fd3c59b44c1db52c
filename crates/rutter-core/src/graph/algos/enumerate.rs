//! Bounded route enumeration
//!
//! Depth-first counting searches over the shared driver. Hop bounds are
//! expressed in edges traversed, while a path's hop count includes its
//! starting stop, hence the `+ 1` when the bound is converted to a
//! maximum stop count.

use tracing::warn;

use crate::error::Result;
use crate::graph::algos::shared::{run_search, FrontierOrder, SearchPolicy};
use crate::graph::model::Graph;
use crate::graph::path::Path;
use crate::graph::types::{NodeId, RouteCount, MIN_STOP_BOUND, MIN_WEIGHT_BOUND};

struct MaxStopsPolicy<'a, N: NodeId> {
    end: &'a N,
    max_len: usize,
    found: usize,
}

impl<N: NodeId> SearchPolicy<N> for MaxStopsPolicy<'_, N> {
    fn order(&self) -> FrontierOrder {
        FrontierOrder::DepthFirst
    }

    fn keep_exploring(&self, candidate: &Path<N>) -> bool {
        candidate.hops() <= self.max_len
    }

    fn offer(&mut self, path: &Path<N>) {
        if path.hops() > 1 && path.hops() <= self.max_len && path.last() == self.end {
            self.found += 1;
        }
    }
}

struct ExactStopsPolicy<'a, N: NodeId> {
    end: &'a N,
    target_len: usize,
    found: usize,
}

impl<N: NodeId> SearchPolicy<N> for ExactStopsPolicy<'_, N> {
    fn order(&self) -> FrontierOrder {
        FrontierOrder::DepthFirst
    }

    fn keep_exploring(&self, candidate: &Path<N>) -> bool {
        candidate.hops() <= self.target_len
    }

    fn offer(&mut self, path: &Path<N>) {
        if path.hops() == self.target_len && path.last() == self.end {
            self.found += 1;
        }
    }
}

struct MaxWeightPolicy<'a, N: NodeId> {
    end: &'a N,
    limit: u32,
    found: usize,
}

impl<N: NodeId> SearchPolicy<N> for MaxWeightPolicy<'_, N> {
    fn order(&self) -> FrontierOrder {
        FrontierOrder::DepthFirst
    }

    fn keep_exploring(&self, candidate: &Path<N>) -> bool {
        candidate.weight() < self.limit
    }

    fn offer(&mut self, path: &Path<N>) {
        if path.hops() > 1 && path.last() == self.end && path.weight() < self.limit {
            self.found += 1;
        }
    }
}

/// Count routes from `start` to `end` traversing at most `max_stops`
/// edges. Bounds below two are rejected without starting the search.
#[tracing::instrument(skip(graph), fields(start = %start, end = %end))]
pub fn routes_max_stops<N: NodeId>(
    graph: &Graph<N>,
    start: &N,
    end: &N,
    max_stops: usize,
) -> Result<RouteCount> {
    if max_stops < MIN_STOP_BOUND {
        warn!(
            max_stops,
            minimum = MIN_STOP_BOUND,
            "maximum stops below minimum, search not started"
        );
        return Ok(RouteCount::rejected());
    }
    if !graph.has_node(start) {
        warn!(node = %start, "start node does not exist");
        return Ok(RouteCount::of(0));
    }

    let mut policy = MaxStopsPolicy {
        end,
        max_len: max_stops.saturating_add(1),
        found: 0,
    };
    run_search(graph, start.clone(), &mut policy)?;
    Ok(RouteCount::of(policy.found))
}

/// Count routes from `start` to `end` traversing exactly `exact_stops`
/// edges. Bounds below two are rejected without starting the search.
#[tracing::instrument(skip(graph), fields(start = %start, end = %end))]
pub fn routes_exact_stops<N: NodeId>(
    graph: &Graph<N>,
    start: &N,
    end: &N,
    exact_stops: usize,
) -> Result<RouteCount> {
    if exact_stops < MIN_STOP_BOUND {
        warn!(
            exact_stops,
            minimum = MIN_STOP_BOUND,
            "exact stops below minimum, search not started"
        );
        return Ok(RouteCount::rejected());
    }
    if !graph.has_node(start) {
        warn!(node = %start, "start node does not exist");
        return Ok(RouteCount::of(0));
    }

    let mut policy = ExactStopsPolicy {
        end,
        target_len: exact_stops.saturating_add(1),
        found: 0,
    };
    run_search(graph, start.clone(), &mut policy)?;
    Ok(RouteCount::of(policy.found))
}

/// Count routes from `start` to `end` with total weight strictly under
/// `limit`. A zero limit is rejected without starting the search.
#[tracing::instrument(skip(graph), fields(start = %start, end = %end))]
pub fn routes_max_weight<N: NodeId>(
    graph: &Graph<N>,
    start: &N,
    end: &N,
    limit: u32,
) -> Result<RouteCount> {
    if limit < MIN_WEIGHT_BOUND {
        warn!(
            limit,
            minimum = MIN_WEIGHT_BOUND,
            "maximum weight below minimum, search not started"
        );
        return Ok(RouteCount::rejected());
    }
    if !graph.has_node(start) {
        warn!(node = %start, "start node does not exist");
        return Ok(RouteCount::of(0));
    }

    let mut policy = MaxWeightPolicy {
        end,
        limit,
        found: 0,
    };
    run_search(graph, start.clone(), &mut policy)?;
    Ok(RouteCount::of(policy.found))
}
