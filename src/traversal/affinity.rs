//! Friend recommendation by best-first expansion over affinity weights.
//!
//! ```text
//! weight(u, v) = 1 / (sharedPlaces(u, v) + 0.1 × sharedCategories(u, v) + 0.01)
//! ```
//!
//! `sharedPlaces` counts places both users like. `sharedCategories` sums,
//! over each category both users like, the smaller of the two like counts.
//! A lower weight means a stronger affinity, so the expansion is plain
//! single-source shortest path: the cheapest unexplored user pops next, and
//! the first `count` users popped that are neither the seed nor one of its
//! friends are the recommendations.

use hashbrown::{HashMap, HashSet};

use crate::config::AffinityWeights;
use crate::index::GraphIndex;
use crate::model::UserId;
use crate::rank::{Scored, ScoredQueue};
use crate::storage::SocialStore;
use crate::{Error, Result};
use super::known_friends;

/// Edge weight between two users, read entirely from the snapshot.
/// Always strictly positive.
pub fn affinity_weight(index: &GraphIndex, weights: &AffinityWeights, u: UserId, v: UserId) -> f64 {
    let likes_v = index.likes_of(v);
    let shared_places = index.likes_of(u).iter().filter(|p| likes_v.contains(p)).count();

    let counts_u = index.category_counts(u);
    let counts_v = index.category_counts(v);
    let shared_categories: usize = counts_u
        .iter()
        .filter_map(|(category, cu)| counts_v.get(category).map(|cv| (*cu).min(*cv)))
        .sum();

    1.0 / (weights.shared_place * shared_places as f64
        + weights.shared_category * shared_categories as f64
        + weights.smoothing)
}

/// Up to `count` users who are not `user` and not already `user`'s friends,
/// cheapest cumulative path cost first.
pub async fn recommend_friends<S: SocialStore + ?Sized>(
    store: &S,
    index: &GraphIndex,
    weights: &AffinityWeights,
    user: UserId,
    count: usize,
) -> Result<Vec<Scored<UserId>>> {
    if count == 0 {
        return Err(Error::InvalidArgument("recommendation count must be at least 1".into()));
    }
    if !index.contains_user(user) {
        return Err(Error::UnknownEntity(user.to_string()));
    }

    let friends = known_friends(store, index, user).await?;
    let excluded: HashSet<UserId> = friends.iter().copied().chain([user]).collect();

    // authoritative best cost per user; queue entries that disagree are stale
    let mut best: HashMap<UserId, f64> = HashMap::new();
    let mut queue = ScoredQueue::lowest_first();
    best.insert(user, 0.0);
    queue.push(user, 0.0);
    for &friend in &friends {
        if best.contains_key(&friend) {
            continue;
        }
        let cost = affinity_weight(index, weights, user, friend);
        best.insert(friend, cost);
        queue.push(friend, cost);
    }

    let mut settled: HashSet<UserId> = HashSet::new();
    let mut out = Vec::with_capacity(count);

    while let Some(Scored { item: node, score: cost }) = queue.pop() {
        if settled.contains(&node) || best.get(&node).is_some_and(|b| cost > *b) {
            continue;
        }
        settled.insert(node);

        if !excluded.contains(&node) {
            out.push(Scored::new(node, cost));
            if out.len() == count {
                break;
            }
        }

        for next in known_friends(store, index, node).await? {
            if settled.contains(&next) {
                continue;
            }
            let candidate = cost + affinity_weight(index, weights, node, next);
            match best.get(&next) {
                Some(existing) if candidate >= *existing => {}
                _ => {
                    best.insert(next, candidate);
                    queue.push(next, candidate);
                }
            }
        }
    }

    tracing::debug!(%user, requested = count, found = out.len(), "friend recommendation finished");
    Ok(out)
}
