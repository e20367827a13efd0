//! In-memory social store.
//!
//! This is the reference implementation of `SocialStore`.
//! It uses simple HashMaps protected by RwLock.
//!
//! ## Limitations
//!
//! - **No persistence**: everything lives for the lifetime of the value.
//! - **Per-collection locks**: multi-step mutations (e.g. adding a friendship
//!   touches both endpoints) are not atomic with respect to concurrent readers.
//!
//! Use this store for:
//! - Testing the traversal and ranking algorithms
//! - Embedding the engine in applications that already hold the data in memory

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use parking_lot::RwLock;
use async_trait::async_trait;

use crate::model::*;
use crate::{Error, Result};
use super::SocialStore;

// ============================================================================
// MemoryStore
// ============================================================================

/// In-memory user/place storage.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    users: RwLock<HashMap<UserId, UserProfile>>,
    places: RwLock<HashMap<PlaceId, PlaceProfile>>,
    /// user → friends, kept symmetric
    friends: RwLock<HashMap<UserId, Vec<UserId>>>,
    /// user → liked places, in insertion order
    likes: RwLock<HashMap<UserId, Vec<PlaceId>>>,
    closed: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&self, profile: UserProfile) {
        let id = profile.id;
        self.inner.users.write().insert(id, profile);
        self.inner.friends.write().entry(id).or_default();
        self.inner.likes.write().entry(id).or_default();
    }

    pub fn add_place(&self, profile: PlaceProfile) {
        self.inner.places.write().insert(profile.id, profile);
    }

    /// Record a friendship between two existing users. Idempotent.
    pub fn add_friendship(&self, a: UserId, b: UserId) -> Result<()> {
        {
            let users = self.inner.users.read();
            for id in [a, b] {
                if !users.contains_key(&id) {
                    return Err(Error::UnknownEntity(id.to_string()));
                }
            }
        }
        if a == b {
            return Err(Error::InvalidArgument(format!("{a} cannot befriend themselves")));
        }

        let mut friends = self.inner.friends.write();
        let list = friends.entry(a).or_default();
        if !list.contains(&b) {
            list.push(b);
        }
        let list = friends.entry(b).or_default();
        if !list.contains(&a) {
            list.push(a);
        }
        Ok(())
    }

    /// Remove a friendship. Returns true if it existed.
    pub fn remove_friendship(&self, a: UserId, b: UserId) -> bool {
        let mut friends = self.inner.friends.write();
        let mut removed = false;
        if let Some(list) = friends.get_mut(&a) {
            let before = list.len();
            list.retain(|f| *f != b);
            removed = list.len() != before;
        }
        if let Some(list) = friends.get_mut(&b) {
            list.retain(|f| *f != a);
        }
        removed
    }

    /// Record that `user` likes `place`. Idempotent.
    pub fn add_like(&self, user: UserId, place: PlaceId) -> Result<()> {
        if !self.inner.users.read().contains_key(&user) {
            return Err(Error::UnknownEntity(user.to_string()));
        }
        if !self.inner.places.read().contains_key(&place) {
            return Err(Error::UnknownEntity(place.to_string()));
        }
        let mut likes = self.inner.likes.write();
        let list = likes.entry(user).or_default();
        if !list.contains(&place) {
            list.push(place);
        }
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.inner.closed.load(Ordering::Acquire)
    }

    fn ensure_open(&self) -> Result<()> {
        if self.is_closed() {
            return Err(Error::DataUnavailable("memory store is shut down".into()));
        }
        Ok(())
    }
}

fn missing(what: impl std::fmt::Display) -> Error {
    Error::DataUnavailable(format!("no record for {what}"))
}

// ============================================================================
// SocialStore impl
// ============================================================================

#[async_trait]
impl SocialStore for MemoryStore {
    async fn shutdown(&self) -> Result<()> {
        self.inner.closed.store(true, Ordering::Release);
        Ok(())
    }

    async fn all_user_ids(&self) -> Result<Vec<UserId>> {
        self.ensure_open()?;
        let mut ids: Vec<UserId> = self.inner.users.read().keys().copied().collect();
        ids.sort();
        Ok(ids)
    }

    async fn all_place_ids(&self) -> Result<Vec<PlaceId>> {
        self.ensure_open()?;
        let mut ids: Vec<PlaceId> = self.inner.places.read().keys().copied().collect();
        ids.sort();
        Ok(ids)
    }

    async fn friends_of(&self, user: UserId) -> Result<Vec<UserId>> {
        self.ensure_open()?;
        self.inner.friends.read().get(&user).cloned().ok_or_else(|| missing(user))
    }

    async fn liked_places_of(&self, user: UserId) -> Result<Vec<PlaceId>> {
        self.ensure_open()?;
        self.inner.likes.read().get(&user).cloned().ok_or_else(|| missing(user))
    }

    async fn category_of(&self, place: PlaceId) -> Result<String> {
        self.ensure_open()?;
        self.inner.places.read()
            .get(&place)
            .map(|p| p.category.clone())
            .ok_or_else(|| missing(place))
    }

    async fn user_profile(&self, user: UserId) -> Result<UserProfile> {
        self.ensure_open()?;
        self.inner.users.read().get(&user).cloned().ok_or_else(|| missing(user))
    }

    async fn place_profile(&self, place: PlaceId) -> Result<PlaceProfile> {
        self.ensure_open()?;
        self.inner.places.read().get(&place).cloned().ok_or_else(|| missing(place))
    }

    async fn user_location(&self, user: UserId) -> Result<GeoPoint> {
        self.ensure_open()?;
        self.inner.users.read().get(&user).map(|u| u.location).ok_or_else(|| missing(user))
    }

    async fn place_location(&self, place: PlaceId) -> Result<GeoPoint> {
        self.ensure_open()?;
        self.inner.places.read().get(&place).map(|p| p.location).ok_or_else(|| missing(place))
    }
}

// ============================================================================
// Tests
// ============================================================================
