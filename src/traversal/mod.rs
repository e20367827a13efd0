//! Friend-graph traversals.
//!
//! Both traversals walk the *live* friend relation: every node's friend list
//! is fetched from the store when the node is expanded and is never cached
//! across calls. State (visited sets, cost tables, queues) is call-local, so
//! a failed call leaves nothing behind.
//!
//! | Traversal | Module | Edge cost |
//! |-----------|--------|-----------|
//! | relational distance | `shortest_path` | 1 per hop (BFS) |
//! | friend recommendation | `affinity` | affinity weight (best-first) |

pub mod shortest_path;
pub mod affinity;

pub use shortest_path::distance;
pub use affinity::{affinity_weight, recommend_friends};

use crate::index::GraphIndex;
use crate::model::UserId;
use crate::storage::SocialStore;
use crate::Result;

/// Fetch `user`'s friends, dropping any id the snapshot does not know.
pub(crate) async fn known_friends<S: SocialStore + ?Sized>(
    store: &S,
    index: &GraphIndex,
    user: UserId,
) -> Result<Vec<UserId>> {
    let mut friends = store.friends_of(user).await?;
    friends.retain(|f| {
        let known = index.contains_user(*f);
        if !known {
            tracing::warn!(%user, friend = %f, "skipping friend outside the indexed user set");
        }
        known
    });
    Ok(friends)
}
