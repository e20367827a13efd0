//! GraphIndex — the once-built, read-only snapshot of the user universe,
//! user → liked places, and place → category.
//!
//! Built eagerly when the engine opens so that the affinity weight and the
//! place rankings never go back to the store for likes or categories.
//! Friend lists are deliberately *not* part of the snapshot: traversals
//! fetch them live on every step.

use chrono::{DateTime, Utc};
use hashbrown::{HashMap, HashSet};
use smallvec::SmallVec;

use crate::model::{PlaceId, UserId};
use crate::storage::SocialStore;
use crate::Result;

/// Liked places of one user. Most users like a handful of places.
pub type Likes = SmallVec<[PlaceId; 8]>;

#[derive(Debug, Clone)]
pub struct GraphIndex {
    users: HashSet<UserId>,
    user_to_places: HashMap<UserId, Likes>,
    place_to_category: HashMap<PlaceId, String>,
    built_at: DateTime<Utc>,
}

impl GraphIndex {
    /// Fetch the user universe, every user's likes, and the category of every
    /// liked place (once per distinct place).
    ///
    /// All-or-nothing: the first store failure aborts the build.
    pub async fn build<S: SocialStore + ?Sized>(store: &S) -> Result<Self> {
        let ids = store.all_user_ids().await?;
        let mut users = HashSet::with_capacity(ids.len());
        let mut user_to_places = HashMap::with_capacity(ids.len());
        let mut place_to_category = HashMap::new();

        for user in ids {
            if !users.insert(user) {
                continue;
            }
            let mut likes = Likes::new();
            for place in store.liked_places_of(user).await? {
                if likes.contains(&place) {
                    continue;
                }
                likes.push(place);
                if !place_to_category.contains_key(&place) {
                    let category = store.category_of(place).await?;
                    place_to_category.insert(place, category);
                }
            }
            user_to_places.insert(user, likes);
        }

        let index = Self {
            users,
            user_to_places,
            place_to_category,
            built_at: Utc::now(),
        };
        tracing::info!(
            users = index.user_count(),
            liked_places = index.place_count(),
            categories = index.category_count(),
            "graph index built"
        );
        Ok(index)
    }

    pub fn contains_user(&self, user: UserId) -> bool {
        self.users.contains(&user)
    }

    pub fn users(&self) -> impl Iterator<Item = UserId> + '_ {
        self.users.iter().copied()
    }

    /// Places liked by `user`; empty for users outside the snapshot.
    pub fn likes_of(&self, user: UserId) -> &[PlaceId] {
        self.user_to_places.get(&user).map(|l| l.as_slice()).unwrap_or(&[])
    }

    pub fn likes(&self, user: UserId, place: PlaceId) -> bool {
        self.likes_of(user).contains(&place)
    }

    pub fn category_of(&self, place: PlaceId) -> Option<&str> {
        self.place_to_category.get(&place).map(String::as_str)
    }

    /// Per-category like counts for one user.
    pub fn category_counts(&self, user: UserId) -> HashMap<&str, usize> {
        let mut counts = HashMap::new();
        for place in self.likes_of(user) {
            if let Some(category) = self.category_of(*place) {
                *counts.entry(category).or_insert(0) += 1;
            }
        }
        counts
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of distinct places liked by at least one user.
    pub fn place_count(&self) -> usize {
        self.place_to_category.len()
    }

    /// Number of distinct category strings among liked places.
    pub fn category_count(&self) -> usize {
        self.place_to_category.values().collect::<HashSet<_>>().len()
    }

    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }
}
