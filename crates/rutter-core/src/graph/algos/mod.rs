//! Route search algorithms
//!
//! The bounded searches share one exploration driver (`shared::run_search`)
//! parameterized by a `SearchPolicy`: frontier discipline, continuation
//! bound, and acceptance predicate. The validity and weight scans are
//! plain linear walks over an explicit stop list.

pub mod enumerate;
pub mod scan;
pub mod shared;
pub mod shortest;

pub use enumerate::{routes_exact_stops, routes_max_stops, routes_max_weight};
pub use scan::{has_route, route_weight};
pub use shortest::shortest_route;
