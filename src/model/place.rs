//! Place in the social graph.

use serde::{Deserialize, Serialize};
use super::GeoPoint;

/// Opaque place identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlaceId(pub u64);

impl std::fmt::Display for PlaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "place {}", self.0)
    }
}

/// Display attributes of a place. `category` is the free-text description
/// the affinity weight groups places by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceProfile {
    pub id: PlaceId,
    pub name: String,
    pub category: String,
    pub location: GeoPoint,
}

impl PlaceProfile {
    pub fn new(
        id: PlaceId,
        name: impl Into<String>,
        category: impl Into<String>,
        location: GeoPoint,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            location,
        }
    }
}
