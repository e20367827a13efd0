//! # Social Graph Model
//!
//! Clean DTOs that describe the user/place network.
//! These types cross every boundary: store ↔ index ↔ traversal ↔ caller.
//!
//! Design rule: this module is pure data — no I/O, no state, no async.

pub mod user;
pub mod place;
pub mod geo;
pub mod distance;
pub mod plan;

pub use user::{UserId, UserProfile};
pub use place::{PlaceId, PlaceProfile};
pub use geo::GeoPoint;
pub use distance::Distance;
pub use plan::ActivityPlan;
