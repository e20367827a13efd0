//! Place recommendation with a proximity fallback.
//!
//! Tier 1 ranks places the user's friends like (and the user does not) by
//! how many distinct friends like them. When that runs short, tier 2 fills
//! the rest with places nobody in the circle likes, nearest to the user
//! first. Running out of places yields a short list, not an error.

use hashbrown::{HashMap, HashSet};

use crate::index::GraphIndex;
use crate::model::{PlaceId, UserId};
use crate::rank::ScoredQueue;
use crate::storage::SocialStore;
use crate::traversal::known_friends;
use crate::{Error, Result};

pub async fn recommend_places<S: SocialStore + ?Sized>(
    store: &S,
    index: &GraphIndex,
    user: UserId,
    count: usize,
) -> Result<Vec<PlaceId>> {
    if !index.contains_user(user) {
        return Err(Error::UnknownEntity(user.to_string()));
    }
    if count == 0 {
        return Err(Error::InvalidArgument("recommendation count must be at least 1".into()));
    }

    let own: HashSet<PlaceId> = index.likes_of(user).iter().copied().collect();
    let friends: HashSet<UserId> = known_friends(store, index, user).await?.into_iter().collect();

    // Tier 1: friend likes the user has not liked yet.
    let mut friend_likes: HashMap<PlaceId, usize> = HashMap::new();
    for friend in &friends {
        for place in index.likes_of(*friend) {
            if !own.contains(place) {
                *friend_likes.entry(*place).or_insert(0) += 1;
            }
        }
    }
    let mut popular = ScoredQueue::highest_first();
    popular.extend(friend_likes.iter().map(|(place, n)| (*place, *n as f64)));
    let mut out: Vec<PlaceId> = popular.take(count).into_iter().map(|s| s.item).collect();

    if out.len() < count {
        let tier_one = out.len();
        // Tier 2: places untouched by the user and every friend.
        let origin = store.user_location(user).await?;
        let mut nearby = ScoredQueue::lowest_first();
        for place in store.all_place_ids().await? {
            if own.contains(&place) || friend_likes.contains_key(&place) {
                continue;
            }
            let loc = store.place_location(place).await?;
            nearby.push(place, origin.distance_to(&loc));
        }
        let mut seen: HashSet<PlaceId> = out.iter().copied().collect();
        while out.len() < count {
            let Some(next) = nearby.pop() else { break };
            if seen.insert(next.item) {
                out.push(next.item);
            }
        }
        tracing::debug!(%user, tier_one, tier_two = out.len() - tier_one, "place fallback used");
    }

    Ok(out)
}
