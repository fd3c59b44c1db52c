use std::fmt;
use std::hash::Hash;

use serde::Serialize;

/// Opaque node identifier: any equality-comparable, hashable token type.
/// The CLI uses `char`; embedders may use anything satisfying the bounds.
pub trait NodeId: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

impl<T> NodeId for T where T: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

/// Minimum accepted bound for hop-count based enumeration.
/// A route needs at least a start and an end, so bounds below two
/// edges cannot match anything and are rejected up front.
pub const MIN_STOP_BOUND: usize = 2;

/// Minimum accepted bound for weight-based enumeration.
pub const MIN_WEIGHT_BOUND: u32 = 1;

/// Result of a bounded route enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteCount {
    /// Number of routes satisfying the endpoints and the bound.
    pub routes: usize,
    /// Set when the caller-supplied bound was below the algorithm
    /// minimum and the search was never started.
    pub bound_rejected: bool,
}

impl RouteCount {
    pub fn of(routes: usize) -> Self {
        RouteCount {
            routes,
            bound_rejected: false,
        }
    }

    pub fn rejected() -> Self {
        RouteCount {
            routes: 0,
            bound_rejected: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_count_of() {
        let count = RouteCount::of(3);
        assert_eq!(count.routes, 3);
        assert!(!count.bound_rejected);
    }

    #[test]
    fn test_route_count_rejected_is_zero() {
        let count = RouteCount::rejected();
        assert_eq!(count.routes, 0);
        assert!(count.bound_rejected);
    }
}
