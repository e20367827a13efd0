//! # socialgraph-rs — Social-Graph Analytics Engine
//!
//! Answers graph-analytic questions about a user/place network that is too
//! large to hold in memory: relational distance between two people, ranked
//! friend recommendations, activity plans and place recommendations.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `SocialStore` is the contract between engine and data store
//! 2. **Snapshot once**: likes and place categories are indexed when the engine opens
//! 3. **Friends stay live**: friend lists are fetched per traversal step, never cached
//! 4. **Typed results**: distances, id lists and plan bundles; rendering is the caller's job
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use socialgraph::{SocialGraph, MemoryStore, UserId};
//!
//! # async fn example() -> socialgraph::Result<()> {
//! let store = MemoryStore::new();
//! // ... populate the store ...
//! let graph = SocialGraph::open(store).await?;
//!
//! let hops = graph.distance(UserId(1), UserId(4)).await?;
//! let people = graph.recommend_friends(UserId(1), 5).await?;
//! let plan = graph.plan_activities(UserId(1), 3, 5).await?;
//! let places = graph.recommend_places(UserId(1), 10).await?;
//!
//! graph.close().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Operations
//!
//! | Operation | Module | Algorithm |
//! |-----------|--------|-----------|
//! | `distance` | `traversal::shortest_path` | BFS over live friend lists |
//! | `recommend_friends` | `traversal::affinity` | best-first over affinity weights |
//! | `plan_activities` | `planner` | nearest friends + centroid suitability |
//! | `recommend_places` | `places` | friend-like count, proximity fallback |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod storage;
pub mod index;
pub mod traversal;
pub mod planner;
pub mod places;
pub mod rank;
pub mod config;

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{
    UserId, UserProfile, PlaceId, PlaceProfile,
    GeoPoint, Distance, ActivityPlan,
};
pub use storage::{SocialStore, MemoryStore};
pub use index::GraphIndex;
pub use rank::{Scored, ScoredQueue, Rank};
pub use config::{EngineConfig, AffinityWeights};

// ============================================================================
// Top-level engine handle
// ============================================================================

/// The primary entry point. A `SocialGraph` owns a store and the index built
/// from it, and answers queries against both.
///
/// Every operation runs to completion before returning; the only suspension
/// points are store calls. The index is frozen after `open`, so concurrent
/// queries against one handle are fine as long as the store allows
/// concurrent reads.
pub struct SocialGraph<S: SocialStore> {
    store: S,
    index: GraphIndex,
    config: EngineConfig,
}

impl<S: SocialStore> SocialGraph<S> {
    /// Build the index from `store` with the default configuration.
    pub async fn open(store: S) -> Result<Self> {
        Self::open_with_config(store, EngineConfig::default()).await
    }

    /// Build the index from `store`. Fails without a usable engine if the
    /// store cannot answer for any known user.
    pub async fn open_with_config(store: S, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let index = GraphIndex::build(&store).await?;
        Ok(Self { store, index, config })
    }

    /// Minimum number of friendship hops from `a` to `b`.
    #[tracing::instrument(skip(self))]
    pub async fn distance(&self, a: UserId, b: UserId) -> Result<Distance> {
        traversal::distance(&self.store, &self.index, a, b).await
    }

    /// Up to `count` users to befriend, best first. Never includes `user`
    /// or any of `user`'s current friends.
    #[tracing::instrument(skip(self))]
    pub async fn recommend_friends(&self, user: UserId, count: usize) -> Result<Vec<UserId>> {
        let scored = self.recommend_friends_scored(user, count).await?;
        Ok(scored.into_iter().map(|s| s.item).collect())
    }

    /// Like [`recommend_friends`](Self::recommend_friends), with each user's
    /// cumulative path cost. Costs are non-decreasing.
    pub async fn recommend_friends_scored(
        &self,
        user: UserId,
        count: usize,
    ) -> Result<Vec<Scored<UserId>>> {
        traversal::recommend_friends(&self.store, &self.index, &self.config.affinity, user, count)
            .await
    }

    /// Affinity weight between two users. Lower is a stronger affinity.
    pub fn affinity_weight(&self, u: UserId, v: UserId) -> f64 {
        traversal::affinity_weight(&self.index, &self.config.affinity, u, v)
    }

    /// The user, their `max_friends` nearest friends, and the `max_places`
    /// most suitable places for that group.
    #[tracing::instrument(skip(self))]
    pub async fn plan_activities(
        &self,
        user: UserId,
        max_friends: usize,
        max_places: usize,
    ) -> Result<ActivityPlan> {
        planner::plan_activities(&self.store, &self.index, &self.config, user, max_friends, max_places)
            .await
    }

    /// Up to `count` places for `user` to visit. Never includes a place the
    /// user already likes.
    #[tracing::instrument(skip(self))]
    pub async fn recommend_places(&self, user: UserId, count: usize) -> Result<Vec<PlaceId>> {
        places::recommend_places(&self.store, &self.index, user, count).await
    }

    /// Access the underlying store (for advanced use).
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The snapshot built when the engine opened.
    pub fn index(&self) -> &GraphIndex {
        &self.index
    }

    /// The configuration the engine was opened with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Shut the store down and drop the engine.
    pub async fn close(self) -> Result<()> {
        self.store.shutdown().await
    }
}

/// In-memory engine for testing and embedding.
impl SocialGraph<MemoryStore> {
    pub async fn open_memory(store: &MemoryStore) -> Result<Self> {
        Self::open(store.clone()).await
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown entity: {0}")]
    UnknownEntity(String),

    #[error("Data unavailable: {0}")]
    DataUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
