//! Shared fixtures for the end-to-end tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use socialgraph::{
    Error, GeoPoint, MemoryStore, PlaceId, PlaceProfile, Result, SocialStore, UserId, UserProfile,
};

// ============================================================================
// Graph builders
// ============================================================================

pub fn user(store: &MemoryStore, id: u64, lat: f64, lon: f64) {
    store.add_user(UserProfile::new(UserId(id), format!("First{id}"), format!("Last{id}"), GeoPoint::new(lat, lon)));
}

pub fn place(store: &MemoryStore, id: u64, category: &str, lat: f64, lon: f64) {
    store.add_place(PlaceProfile::new(PlaceId(id), format!("Place{id}"), category, GeoPoint::new(lat, lon)));
}

pub fn friends(store: &MemoryStore, pairs: &[(u64, u64)]) {
    for &(a, b) in pairs {
        store.add_friendship(UserId(a), UserId(b)).unwrap();
    }
}

pub fn likes(store: &MemoryStore, pairs: &[(u64, u64)]) {
    for &(u, p) in pairs {
        store.add_like(UserId(u), PlaceId(p)).unwrap();
    }
}

/// Users 1..=4 in a line (1–2, 2–3, 3–4) plus an isolated user 5.
pub fn chain_store() -> MemoryStore {
    let store = MemoryStore::new();
    for id in 1..=5 {
        user(&store, id, id as f64, 0.0);
    }
    friends(&store, &[(1, 2), (2, 3), (3, 4)]);
    store
}

// ============================================================================
// CountingStore — records how often each lookup is made
// ============================================================================

#[derive(Default)]
pub struct Counters {
    pub friends_of: AtomicUsize,
    pub liked_places_of: AtomicUsize,
    pub category_of: AtomicUsize,
    pub shutdown: AtomicUsize,
    pub categories_asked: Mutex<Vec<PlaceId>>,
}

impl Counters {
    pub fn get(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }
}

pub struct CountingStore {
    pub inner: MemoryStore,
    pub counters: Arc<Counters>,
}

impl CountingStore {
    pub fn new(inner: MemoryStore) -> (Self, Arc<Counters>) {
        let counters = Arc::new(Counters::default());
        (Self { inner, counters: counters.clone() }, counters)
    }
}

#[async_trait]
impl SocialStore for CountingStore {
    async fn shutdown(&self) -> Result<()> {
        self.counters.shutdown.fetch_add(1, Ordering::SeqCst);
        self.inner.shutdown().await
    }

    async fn all_user_ids(&self) -> Result<Vec<UserId>> {
        self.inner.all_user_ids().await
    }

    async fn all_place_ids(&self) -> Result<Vec<PlaceId>> {
        self.inner.all_place_ids().await
    }

    async fn friends_of(&self, user: UserId) -> Result<Vec<UserId>> {
        self.counters.friends_of.fetch_add(1, Ordering::SeqCst);
        self.inner.friends_of(user).await
    }

    async fn liked_places_of(&self, user: UserId) -> Result<Vec<PlaceId>> {
        self.counters.liked_places_of.fetch_add(1, Ordering::SeqCst);
        self.inner.liked_places_of(user).await
    }

    async fn category_of(&self, place: PlaceId) -> Result<String> {
        self.counters.category_of.fetch_add(1, Ordering::SeqCst);
        self.counters.categories_asked.lock().push(place);
        self.inner.category_of(place).await
    }

    async fn user_profile(&self, user: UserId) -> Result<UserProfile> {
        self.inner.user_profile(user).await
    }

    async fn place_profile(&self, place: PlaceId) -> Result<PlaceProfile> {
        self.inner.place_profile(place).await
    }
}

// ============================================================================
// FlakyStore — fails specific lookups
// ============================================================================

pub struct FlakyStore {
    pub inner: MemoryStore,
    /// `liked_places_of` fails for this user.
    pub likes_fail_for: Option<UserId>,
    /// `friends_of` fails for this user.
    pub friends_fail_for: Option<UserId>,
}

impl FlakyStore {
    pub fn new(inner: MemoryStore) -> Self {
        Self { inner, likes_fail_for: None, friends_fail_for: None }
    }
}

fn outage(what: &str, user: UserId) -> Error {
    Error::DataUnavailable(format!("connection reset while reading {what} of {user}"))
}

#[async_trait]
impl SocialStore for FlakyStore {
    async fn shutdown(&self) -> Result<()> {
        self.inner.shutdown().await
    }

    async fn all_user_ids(&self) -> Result<Vec<UserId>> {
        self.inner.all_user_ids().await
    }

    async fn all_place_ids(&self) -> Result<Vec<PlaceId>> {
        self.inner.all_place_ids().await
    }

    async fn friends_of(&self, user: UserId) -> Result<Vec<UserId>> {
        if self.friends_fail_for == Some(user) {
            return Err(outage("friends", user));
        }
        self.inner.friends_of(user).await
    }

    async fn liked_places_of(&self, user: UserId) -> Result<Vec<PlaceId>> {
        if self.likes_fail_for == Some(user) {
            return Err(outage("likes", user));
        }
        self.inner.liked_places_of(user).await
    }

    async fn category_of(&self, place: PlaceId) -> Result<String> {
        self.inner.category_of(place).await
    }

    async fn user_profile(&self, user: UserId) -> Result<UserProfile> {
        self.inner.user_profile(user).await
    }

    async fn place_profile(&self, place: PlaceId) -> Result<PlaceProfile> {
        self.inner.place_profile(place).await
    }
}
