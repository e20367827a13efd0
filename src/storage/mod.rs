//! # Social Store Trait
//!
//! This is THE contract between the analytics engine and the data store.
//! Every lookup the engine performs goes through it; the engine never builds
//! queries or manages connections itself.
//!
//! ## Implementations
//!
//! | Store | Module | Description |
//! |-------|--------|-------------|
//! | `MemoryStore` | `memory` | In-memory for testing/embedding |
//!
//! A database-backed store lives outside this crate: implement
//! [`SocialStore`] over your connection pool and hand it to
//! [`SocialGraph::open`](crate::SocialGraph::open).

pub mod memory;

use async_trait::async_trait;
use crate::model::*;
use crate::Result;

pub use memory::MemoryStore;

// ============================================================================
// SocialStore Trait
// ============================================================================

/// The data-access contract.
///
/// All calls may fail with [`Error::DataUnavailable`](crate::Error::DataUnavailable);
/// the engine surfaces that to its caller without retrying. Retry policy,
/// timeouts and connection management belong to the implementation.
#[async_trait]
pub trait SocialStore: Send + Sync + 'static {
    // ========================================================================
    // Lifecycle
    // ========================================================================

    /// Release connections and any other resources held open.
    async fn shutdown(&self) -> Result<()>;

    // ========================================================================
    // Universe
    // ========================================================================

    /// Every user the store knows about.
    async fn all_user_ids(&self) -> Result<Vec<UserId>>;

    /// Every place the store knows about.
    async fn all_place_ids(&self) -> Result<Vec<PlaceId>>;

    // ========================================================================
    // Relations
    // ========================================================================

    /// Direct friends of a user. Friendship is symmetric.
    async fn friends_of(&self, user: UserId) -> Result<Vec<UserId>>;

    /// Places a user has liked.
    async fn liked_places_of(&self, user: UserId) -> Result<Vec<PlaceId>>;

    // ========================================================================
    // Attributes
    // ========================================================================

    /// Textual category/description of a place.
    async fn category_of(&self, place: PlaceId) -> Result<String>;

    /// Display attributes of a user.
    async fn user_profile(&self, user: UserId) -> Result<UserProfile>;

    /// Display attributes of a place.
    async fn place_profile(&self, place: PlaceId) -> Result<PlaceProfile>;

    /// Coordinates of a user.
    ///
    /// Default: read from the full profile. Override when the store has a
    /// cheaper path.
    async fn user_location(&self, user: UserId) -> Result<GeoPoint> {
        Ok(self.user_profile(user).await?.location)
    }

    /// Coordinates of a place.
    ///
    /// Default: read from the full profile.
    async fn place_location(&self, place: PlaceId) -> Result<GeoPoint> {
        Ok(self.place_profile(place).await?.location)
    }
}
