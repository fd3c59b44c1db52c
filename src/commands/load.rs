//! Graph loading: textual edge list to construction calls
//!
//! Accepts whitespace- or comma-separated tokens of the form
//! `<from><to><weight>` (e.g. `AB5`). Malformed tokens and edges the
//! graph rejects are warned and skipped, never fatal.

use std::fs;
use std::io::Read;

use regex::Regex;
use tracing::{debug, warn};

use crate::cli::Cli;
use rutter_core::error::Result;
use rutter_core::graph::Graph;

/// Read the edge list from `--graph` or stdin and build the graph.
pub fn load_graph(cli: &Cli) -> Result<Graph<char>> {
    let text = match &cli.graph {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    Ok(parse_edge_list(&text))
}

/// Turn an edge-list description into a graph, one `add_edge` call per
/// well-formed token.
pub fn parse_edge_list(text: &str) -> Graph<char> {
    let mut graph = Graph::new();

    let spec = match Regex::new(r"^(\w)(\w)(\d+)$") {
        Ok(re) => re,
        Err(e) => {
            warn!(error = %e, "failed to compile edge spec regex");
            return graph;
        }
    };

    for token in text
        .split([' ', '\t', '\n', '\r', ','])
        .filter(|token| !token.is_empty())
    {
        if !spec.is_match(token) {
            warn!(token, "skipping malformed edge spec");
            continue;
        }

        let mut chars = token.chars();
        let (Some(from), Some(to)) = (chars.next(), chars.next()) else {
            continue;
        };
        let weight: u32 = match chars.as_str().parse() {
            Ok(weight) => weight,
            Err(_) => {
                warn!(token, "skipping edge spec with out-of-range weight");
                continue;
            }
        };

        if let Err(e) = graph.add_edge(from, to, weight) {
            warn!(token, error = %e, "skipping rejected edge");
        }
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );

    graph
}
