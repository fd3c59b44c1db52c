//! CLI argument parsing for rutter
//!
//! Uses clap for argument parsing.
//! Supports global flags: --graph, --format, --quiet, --verbose

pub mod parse;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub use rutter_core::format::OutputFormat;
use parse::{parse_format, parse_node_id};

/// Rutter - route queries over small directed weighted networks
#[derive(Parser, Debug)]
#[command(name = "rutter")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Edge-list file describing the graph (reads stdin when omitted)
    #[arg(long, global = true, env = "RUTTER_GRAPH")]
    pub graph: Option<PathBuf>,

    /// Output format (human or json)
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON to stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a route and report its total weight
    Route {
        /// Stops along the route, in order (single characters, e.g. A B C)
        #[arg(required = true, value_parser = parse_node_id)]
        stops: Vec<char>,
    },

    /// Count routes between two nodes under a bound
    Count(CountArgs),

    /// Weight of the shortest route between two nodes
    Shortest {
        /// Start node
        #[arg(value_parser = parse_node_id)]
        from: char,

        /// End node
        #[arg(value_parser = parse_node_id)]
        to: char,
    },
}

#[derive(Args, Debug, Clone)]
pub struct CountArgs {
    /// Start node
    #[arg(value_parser = parse_node_id)]
    pub from: char,

    /// End node
    #[arg(value_parser = parse_node_id)]
    pub to: char,

    #[command(flatten)]
    pub bound: BoundArgs,
}

/// Bound selecting which routes to count; exactly one must be given
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct BoundArgs {
    /// Count routes traversing at most this many stops (edges)
    #[arg(long)]
    pub max_stops: Option<usize>,

    /// Count routes traversing exactly this many stops (edges)
    #[arg(long)]
    pub exact_stops: Option<usize>,

    /// Count routes with total weight strictly below this value
    #[arg(long)]
    pub max_weight: Option<u32>,
}

/// The single bound selected by the caller
#[derive(Debug, Clone, Copy)]
pub enum Bound {
    MaxStops(usize),
    ExactStops(usize),
    MaxWeight(u32),
}

impl BoundArgs {
    /// The bound clap's argument group guarantees was supplied.
    pub fn bound(&self) -> Bound {
        if let Some(stops) = self.max_stops {
            Bound::MaxStops(stops)
        } else if let Some(stops) = self.exact_stops {
            Bound::ExactStops(stops)
        } else if let Some(weight) = self.max_weight {
            Bound::MaxWeight(weight)
        } else {
            unreachable!("clap enforces that exactly one bound is present")
        }
    }
}
