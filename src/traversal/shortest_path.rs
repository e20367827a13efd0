//! Relational distance: minimum number of friendship hops between two users.

use std::collections::VecDeque;

use hashbrown::HashMap;

use crate::index::GraphIndex;
use crate::model::{Distance, UserId};
use crate::storage::SocialStore;
use crate::{Error, Result};
use super::known_friends;

/// Breadth-first search from `from` until `to` shows up among a dequeued
/// node's friends.
///
/// `distance(a, a)` is 0 and never touches the store. Both ids must be in
/// the snapshot's user set.
pub async fn distance<S: SocialStore + ?Sized>(
    store: &S,
    index: &GraphIndex,
    from: UserId,
    to: UserId,
) -> Result<Distance> {
    if from == to {
        return Ok(Distance::Hops(0));
    }
    for id in [from, to] {
        if !index.contains_user(id) {
            return Err(Error::UnknownEntity(id.to_string()));
        }
    }

    // hop count doubles as the visited set
    let mut hops: HashMap<UserId, usize> = HashMap::new();
    let mut queue = VecDeque::new();
    hops.insert(from, 0);
    queue.push_back(from);

    while let Some(node) = queue.pop_front() {
        let depth = hops[&node];
        for friend in known_friends(store, index, node).await? {
            if friend == to {
                return Ok(Distance::Hops(depth + 1));
            }
            if !hops.contains_key(&friend) {
                hops.insert(friend, depth + 1);
                queue.push_back(friend);
            }
        }
    }

    Ok(Distance::Unreachable)
}
