//! A route under construction during a search
//!
//! A path owns its stop sequence and maintains hop count and accumulated
//! weight incrementally. Every extension takes the graph explicitly and
//! verifies the connecting edge, so a path can never contain a gap. Paths
//! are cloned once per branch explored and never outlive their query.

use crate::error::{Result, RutterError};
use crate::graph::model::Graph;
use crate::graph::types::NodeId;

#[derive(Debug, Clone)]
pub struct Path<N: NodeId> {
    stops: Vec<N>,
    weight: u32,
}

impl<N: NodeId> Path<N> {
    /// Start a path at `id`, which must exist in the graph.
    pub fn start(graph: &Graph<N>, id: N) -> Result<Self> {
        if !graph.has_node(&id) {
            return Err(RutterError::unknown_node(&id));
        }
        Ok(Path {
            stops: vec![id],
            weight: 0,
        })
    }

    /// Append `stop`, looking the connecting edge up in `graph`.
    ///
    /// Fails without modifying the path when `stop` does not exist or the
    /// last stop has no edge to it. Weight accumulation saturates, and a
    /// saturated weight never passes a strict weight bound, so cyclic
    /// exploration degrades to pruning rather than overflow.
    pub fn push(&mut self, graph: &Graph<N>, stop: N) -> Result<()> {
        if !graph.has_node(&stop) {
            return Err(RutterError::unknown_node(&stop));
        }
        if !graph.has_edge(self.last(), &stop) {
            return Err(RutterError::missing_edge(self.last(), &stop));
        }
        self.weight = self
            .weight
            .saturating_add(graph.edge_weight(self.last(), &stop));
        self.stops.push(stop);
        Ok(())
    }

    /// Number of stops, including the first. A path with `k` edges has
    /// `k + 1` hops.
    pub fn hops(&self) -> usize {
        self.stops.len()
    }

    /// Accumulated weight of the traversed edges.
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// The most recently appended stop.
    pub fn last(&self) -> &N {
        self.stops
            .last()
            .expect("a path always has at least its starting stop")
    }

    pub fn stops(&self) -> &[N] {
        &self.stops
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph() -> Graph<char> {
        let mut graph = Graph::new();
        graph.add_edge('A', 'B', 5).unwrap();
        graph.add_edge('B', 'C', 4).unwrap();
        graph
    }

    #[test]
    fn test_start_requires_existing_node() {
        let graph = graph();
        assert!(matches!(
            Path::start(&graph, 'Z').unwrap_err(),
            RutterError::UnknownNode { .. }
        ));
    }

    #[test]
    fn test_push_accumulates_hops_and_weight() {
        let graph = graph();
        let mut path = Path::start(&graph, 'A').unwrap();
        assert_eq!(path.hops(), 1);
        assert_eq!(path.weight(), 0);

        path.push(&graph, 'B').unwrap();
        path.push(&graph, 'C').unwrap();
        assert_eq!(path.hops(), 3);
        assert_eq!(path.weight(), 9);
        assert_eq!(path.last(), &'C');
        assert_eq!(path.stops(), &['A', 'B', 'C']);
    }

    #[test]
    fn test_push_without_edge_leaves_path_unchanged() {
        let graph = graph();
        let mut path = Path::start(&graph, 'A').unwrap();
        path.push(&graph, 'B').unwrap();

        let err = path.push(&graph, 'A').unwrap_err();
        assert!(matches!(err, RutterError::MissingEdge { .. }));
        assert_eq!(path.hops(), 2);
        assert_eq!(path.weight(), 5);
        assert_eq!(path.last(), &'B');
    }

    #[test]
    fn test_push_unknown_node_rejected() {
        let graph = graph();
        let mut path = Path::start(&graph, 'A').unwrap();
        assert!(matches!(
            path.push(&graph, 'Z').unwrap_err(),
            RutterError::UnknownNode { .. }
        ));
        assert_eq!(path.hops(), 1);
    }
}
