use std::collections::VecDeque;

use crate::error::Result;
use crate::graph::model::Graph;
use crate::graph::path::Path;
use crate::graph::types::NodeId;

/// Frontier discipline for a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FrontierOrder {
    /// Explicit stack: newest candidate explored first.
    DepthFirst,
    /// Explicit queue: oldest candidate explored first.
    BreadthFirst,
}

/// In-progress candidate paths awaiting acceptance testing or further
/// exploration.
#[derive(Debug)]
pub(crate) struct Frontier<N: NodeId> {
    order: FrontierOrder,
    paths: VecDeque<Path<N>>,
}

impl<N: NodeId> Frontier<N> {
    pub(crate) fn new(order: FrontierOrder) -> Self {
        Frontier {
            order,
            paths: VecDeque::new(),
        }
    }

    pub(crate) fn push(&mut self, path: Path<N>) {
        self.paths.push_back(path);
    }

    pub(crate) fn pop(&mut self) -> Option<Path<N>> {
        match self.order {
            FrontierOrder::DepthFirst => self.paths.pop_back(),
            FrontierOrder::BreadthFirst => self.paths.pop_front(),
        }
    }
}

/// Injected behavior distinguishing the bounded searches.
pub(crate) trait SearchPolicy<N: NodeId> {
    /// Frontier discipline for this search.
    fn order(&self) -> FrontierOrder;

    /// Whether `candidate` may be pushed for further exploration.
    /// Pruning here is what guarantees termination on cyclic graphs:
    /// every implementation strictly limits hop count or weight.
    fn keep_exploring(&self, candidate: &Path<N>) -> bool;

    /// Offered every dequeued path, intermediate ones included; the
    /// policy records it when its acceptance predicate holds.
    fn offer(&mut self, path: &Path<N>);
}

/// Drive a search from `start`: pop a path, offer it to the policy, then
/// clone-and-extend it along every outgoing edge of its last stop,
/// keeping only candidates the continuation bound admits.
pub(crate) fn run_search<N, P>(graph: &Graph<N>, start: N, policy: &mut P) -> Result<()>
where
    N: NodeId,
    P: SearchPolicy<N>,
{
    let mut frontier = Frontier::new(policy.order());
    frontier.push(Path::start(graph, start)?);

    while let Some(current) = frontier.pop() {
        policy.offer(&current);

        for (next, _) in graph.outgoing_edges(current.last()) {
            let mut candidate = current.clone();
            candidate.push(graph, next.clone())?;
            if policy.keep_exploring(&candidate) {
                frontier.push(candidate);
            }
        }
    }

    Ok(())
}
