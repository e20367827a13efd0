//! Relational distance — friendship hops between two users.

use serde::{Deserialize, Serialize};

/// Result of a shortest-path query over the friend graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Distance {
    /// Minimum number of friendship edges on any path.
    Hops(usize),
    /// No path exists.
    Unreachable,
}

impl Distance {
    pub fn hops(&self) -> Option<usize> {
        match self {
            Distance::Hops(h) => Some(*h),
            Distance::Unreachable => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, Distance::Hops(_))
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Distance::Hops(h) => write!(f, "{h}"),
            Distance::Unreachable => write!(f, "unreachable"),
        }
    }
}
