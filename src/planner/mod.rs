//! Activity planning.
//!
//! Picks the user's geographically closest friends, then ranks the places
//! that group likes by suitability:
//!
//! ```text
//! suitability(p) = likes(p) / (distance(p, centroid) + 0.01)
//! ```
//!
//! where `likes(p)` counts the user and each close friend once, and
//! `centroid` is the mean coordinate of the close friends. Higher is better.

use hashbrown::HashMap;

use crate::config::EngineConfig;
use crate::index::GraphIndex;
use crate::model::*;
use crate::rank::ScoredQueue;
use crate::storage::SocialStore;
use crate::traversal::known_friends;
use crate::{Error, Result};

/// Build the activity plan for `user`.
///
/// Either limit being zero yields an empty plan before any validation.
/// Friends are ordered nearest first, places most suitable first; equal
/// scores fall back to the smaller id.
pub async fn plan_activities<S: SocialStore + ?Sized>(
    store: &S,
    index: &GraphIndex,
    config: &EngineConfig,
    user: UserId,
    max_friends: usize,
    max_places: usize,
) -> Result<ActivityPlan> {
    if max_friends == 0 || max_places == 0 {
        return Ok(ActivityPlan::empty());
    }
    if !index.contains_user(user) {
        return Err(Error::UnknownEntity(user.to_string()));
    }

    let profile = store.user_profile(user).await?;
    let close = closest_friends(store, index, user, profile.location, max_friends).await?;

    let centroid = GeoPoint::centroid(close.iter().map(|(_, loc)| loc))
        .unwrap_or(profile.location);

    // Tally likes: the user and each close friend count once per place.
    let mut tally: HashMap<PlaceId, usize> = HashMap::new();
    for who in std::iter::once(user).chain(close.iter().map(|(id, _)| *id)) {
        for place in index.likes_of(who) {
            *tally.entry(*place).or_insert(0) += 1;
        }
    }

    let mut ranked = ScoredQueue::highest_first();
    for (place, likes) in tally {
        let loc = store.place_location(place).await?;
        let score = likes as f64 / (loc.distance_to(&centroid) + config.suitability_smoothing);
        ranked.push(place, score);
    }

    let mut close_friends = Vec::with_capacity(close.len());
    for (id, _) in &close {
        close_friends.push(store.user_profile(*id).await?);
    }
    let mut suggested_places = Vec::new();
    for scored in ranked.take(max_places) {
        suggested_places.push(store.place_profile(scored.item).await?);
    }

    tracing::debug!(
        %user,
        friends = close_friends.len(),
        places = suggested_places.len(),
        "activity plan built"
    );
    Ok(ActivityPlan {
        user: Some(profile),
        close_friends,
        suggested_places,
    })
}

/// The `k` friends nearest to `origin`, nearest first, with their locations.
async fn closest_friends<S: SocialStore + ?Sized>(
    store: &S,
    index: &GraphIndex,
    user: UserId,
    origin: GeoPoint,
    k: usize,
) -> Result<Vec<(UserId, GeoPoint)>> {
    let mut friends = known_friends(store, index, user).await?;
    friends.sort_unstable();
    friends.dedup();

    let mut locations = HashMap::with_capacity(friends.len());
    let mut by_distance = ScoredQueue::lowest_first();
    for friend in friends {
        let loc = store.user_location(friend).await?;
        by_distance.push(friend, origin.distance_to(&loc));
        locations.insert(friend, loc);
    }

    Ok(by_distance
        .take(k)
        .into_iter()
        .filter_map(|s| locations.get(&s.item).map(|loc| (s.item, *loc)))
        .collect())
}
