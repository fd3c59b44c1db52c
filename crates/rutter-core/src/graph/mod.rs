//! Graph model and route search engine
//!
//! Provides the directed weighted graph and the queries over it:
//! - linear route validity and weight scans over explicit stop lists
//! - bounded depth-first route enumeration (max stops, exact stops, max weight)
//! - branch-and-bound breadth-first shortest weighted path

pub mod algos;
pub mod model;
pub mod path;
pub mod types;

pub use algos::{
    has_route, route_weight, routes_exact_stops, routes_max_stops, routes_max_weight,
    shortest_route,
};
pub use model::Graph;
pub use path::Path;
pub use types::{NodeId, RouteCount};
