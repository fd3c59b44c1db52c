//! In-memory directed weighted graph
//!
//! Nodes are keyed by opaque ids; each node owns its outgoing edges as a
//! destination-to-weight map, so there is at most one edge per ordered
//! pair and re-adding an edge overwrites its weight. The graph is
//! mutated only during construction and read-only during queries.

use std::collections::HashMap;

use crate::error::{Result, RutterError};
use crate::graph::types::NodeId;

/// Outgoing edges of a single node (destination id -> positive weight).
#[derive(Debug, Clone)]
struct Node<N: NodeId> {
    edges: HashMap<N, u32>,
}

impl<N: NodeId> Node<N> {
    fn new() -> Self {
        Node {
            edges: HashMap::new(),
        }
    }
}

/// Directed graph with positive integer edge weights.
#[derive(Debug, Clone)]
pub struct Graph<N: NodeId> {
    nodes: HashMap<N, Node<N>>,
}

impl<N: NodeId> Graph<N> {
    pub fn new() -> Self {
        Graph {
            nodes: HashMap::new(),
        }
    }

    /// True iff a node with this id exists.
    pub fn has_node(&self, id: &N) -> bool {
        self.nodes.contains_key(id)
    }

    /// Insert a new node with no outgoing edges.
    ///
    /// Rejects a duplicate id with `DuplicateNode`; the existing node and
    /// its edges are left untouched.
    pub fn add_node(&mut self, id: N) -> Result<()> {
        if self.nodes.contains_key(&id) {
            return Err(RutterError::duplicate_node(&id));
        }
        self.nodes.insert(id, Node::new());
        Ok(())
    }

    /// True iff an edge from `from` to `to` exists. False when `from`
    /// itself does not exist.
    pub fn has_edge(&self, from: &N, to: &N) -> bool {
        self.nodes
            .get(from)
            .is_some_and(|node| node.edges.contains_key(to))
    }

    /// Set the weight of the edge from `from` to `to`, creating either
    /// endpoint if absent and overwriting any previous weight.
    ///
    /// Rejects a zero weight with `ZeroWeight` before touching the graph,
    /// so a rejected call creates no nodes and no edge.
    pub fn add_edge(&mut self, from: N, to: N, weight: u32) -> Result<()> {
        if weight == 0 {
            return Err(RutterError::zero_weight(&from, &to));
        }
        if !self.nodes.contains_key(&to) {
            self.nodes.insert(to.clone(), Node::new());
        }
        self.nodes
            .entry(from)
            .or_insert_with(Node::new)
            .edges
            .insert(to, weight);
        Ok(())
    }

    /// Weight of the edge from `from` to `to`, or 0 when no such edge
    /// exists. Zero-weight edges are unconstructible, so 0 is an
    /// unambiguous absence sentinel.
    pub fn edge_weight(&self, from: &N, to: &N) -> u32 {
        self.nodes
            .get(from)
            .and_then(|node| node.edges.get(to))
            .copied()
            .unwrap_or(0)
    }

    /// All outgoing edges of `id` as (destination, weight) pairs.
    ///
    /// Order is implementation-defined but stable while the graph is not
    /// mutated, which holds for the duration of any query.
    pub fn outgoing_edges<'a>(&'a self, id: &N) -> impl Iterator<Item = (&'a N, u32)> + 'a {
        self.nodes
            .get(id)
            .into_iter()
            .flat_map(|node| node.edges.iter().map(|(to, weight)| (to, *weight)))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|node| node.edges.len()).sum()
    }
}

impl<N: NodeId> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}
