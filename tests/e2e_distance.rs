//! End-to-end tests for relational distance.
//!
//! Each test opens a `SocialGraph` over a `MemoryStore` and queries hop
//! counts through the public API.

mod common;

use common::*;
use socialgraph::{Distance, Error, MemoryStore, SocialGraph, UserId};

// ============================================================================
// 1. Line graph: 1–2–3–4, isolated 5
// ============================================================================

#[tokio::test]
async fn test_chain_distances() {
    let store = chain_store();
    let graph = SocialGraph::open_memory(&store).await.unwrap();

    assert_eq!(graph.distance(UserId(1), UserId(4)).await.unwrap(), Distance::Hops(3));
    assert_eq!(graph.distance(UserId(1), UserId(3)).await.unwrap(), Distance::Hops(2));
    assert_eq!(graph.distance(UserId(4), UserId(1)).await.unwrap(), Distance::Hops(3));
    assert_eq!(graph.distance(UserId(2), UserId(2)).await.unwrap(), Distance::Hops(0));
}

#[tokio::test]
async fn test_isolated_user_is_unreachable() {
    let store = chain_store();
    let graph = SocialGraph::open_memory(&store).await.unwrap();

    let d = graph.distance(UserId(1), UserId(5)).await.unwrap();
    assert_eq!(d, Distance::Unreachable);
    assert_eq!(d.hops(), None);
    assert!(!d.is_reachable());
}

// ============================================================================
// 2. Self distance never touches the store
// ============================================================================

#[tokio::test]
async fn test_self_distance_makes_no_lookups() {
    let (store, counters) = CountingStore::new(chain_store());
    let graph = SocialGraph::open(store).await.unwrap();

    assert_eq!(graph.distance(UserId(3), UserId(3)).await.unwrap(), Distance::Hops(0));
    assert_eq!(Counters::get(&counters.friends_of), 0);
}

// ============================================================================
// 3. Friend lists are live, not cached
// ============================================================================

#[tokio::test]
async fn test_friend_changes_are_seen_immediately() {
    let store = chain_store();
    let graph = SocialGraph::open_memory(&store).await.unwrap();
    assert_eq!(graph.distance(UserId(1), UserId(4)).await.unwrap(), Distance::Hops(3));

    store.add_friendship(UserId(1), UserId(4)).unwrap();
    assert_eq!(graph.distance(UserId(1), UserId(4)).await.unwrap(), Distance::Hops(1));

    store.remove_friendship(UserId(2), UserId(3));
    store.remove_friendship(UserId(1), UserId(4));
    assert_eq!(graph.distance(UserId(1), UserId(4)).await.unwrap(), Distance::Unreachable);
}

// ============================================================================
// 4. Errors
// ============================================================================

#[tokio::test]
async fn test_unknown_user_is_rejected() {
    let store = chain_store();
    let graph = SocialGraph::open_memory(&store).await.unwrap();

    for (a, b) in [(1, 42), (42, 1)] {
        let err = graph.distance(UserId(a), UserId(b)).await.unwrap_err();
        assert!(matches!(err, Error::UnknownEntity(_)), "got {err:?}");
    }
}

#[tokio::test]
async fn test_user_added_after_open_is_unknown() {
    let store = chain_store();
    let graph = SocialGraph::open_memory(&store).await.unwrap();

    user(&store, 6, 0.0, 0.0);
    store.add_friendship(UserId(4), UserId(6)).unwrap();
    let err = graph.distance(UserId(1), UserId(6)).await.unwrap_err();
    assert!(matches!(err, Error::UnknownEntity(_)));
}

#[tokio::test]
async fn test_store_outage_aborts_search() {
    let mut store = FlakyStore::new(chain_store());
    store.friends_fail_for = Some(UserId(3));
    let graph = SocialGraph::open(store).await.unwrap();

    // reachable without expanding 3
    assert_eq!(graph.distance(UserId(1), UserId(3)).await.unwrap(), Distance::Hops(2));
    let err = graph.distance(UserId(1), UserId(4)).await.unwrap_err();
    assert!(matches!(err, Error::DataUnavailable(_)));
    // the failure leaves the engine usable
    assert_eq!(graph.distance(UserId(1), UserId(2)).await.unwrap(), Distance::Hops(1));
}

// ============================================================================
// 5. Denser graph: BFS finds the shortest of several routes
// ============================================================================

#[tokio::test]
async fn test_shortest_of_several_routes() {
    let store = MemoryStore::new();
    for id in 1..=8 {
        user(&store, id, 0.0, 0.0);
    }
    // long way: 1-2-3-4-5-8, short way: 1-6-7-8
    friends(&store, &[(1, 2), (2, 3), (3, 4), (4, 5), (5, 8), (1, 6), (6, 7), (7, 8)]);
    let graph = SocialGraph::open_memory(&store).await.unwrap();

    assert_eq!(graph.distance(UserId(1), UserId(8)).await.unwrap(), Distance::Hops(3));
    assert_eq!(graph.distance(UserId(8), UserId(1)).await.unwrap(), Distance::Hops(3));
    assert_eq!(graph.distance(UserId(2), UserId(7)).await.unwrap(), Distance::Hops(3));
}
