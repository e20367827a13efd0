//! Geographic coordinates.
//!
//! Distances are plain Euclidean distances on (latitude, longitude). They are
//! only ever compared with each other, so no great-circle correction is made.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        (self.lat - other.lat).hypot(self.lon - other.lon)
    }

    /// Mean latitude and mean longitude of the given points.
    /// Returns `None` for an empty input.
    pub fn centroid<'a>(points: impl IntoIterator<Item = &'a GeoPoint>) -> Option<GeoPoint> {
        let mut n = 0usize;
        let (mut lat, mut lon) = (0.0, 0.0);
        for p in points {
            lat += p.lat;
            lon += p.lon;
            n += 1;
        }
        if n == 0 {
            return None;
        }
        Some(GeoPoint::new(lat / n as f64, lon / n as f64))
    }
}
