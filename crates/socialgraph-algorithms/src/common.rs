//! Shared utilities for friend-graph algorithms
//!
//! Algorithms run against any [`FriendGraph`]: a read-only view handing out the
//! friend set of a user. Friend sets keep insertion order, and every capped
//! scan walks them front to back, so the order is part of each result.

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxBuildHasher;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// User identifier type (u64)
pub type UserId = u64;

/// Insertion-ordered set of friend ids
pub type FriendSet = IndexSet<UserId, FxBuildHasher>;

/// Read-only access to an undirected friendship relation
pub trait FriendGraph {
    /// Friend set of `user`, or `None` if the user is unknown
    fn friends(&self, user: UserId) -> Option<&FriendSet>;

    /// Whether `user` is known to the graph
    fn contains(&self, user: UserId) -> bool {
        self.friends(user).is_some()
    }

    /// Whether `a` lists `b` as a friend
    fn are_friends(&self, a: UserId, b: UserId) -> bool {
        self.friends(a).is_some_and(|friends| friends.contains(&b))
    }
}

impl<S: BuildHasher> FriendGraph for IndexMap<UserId, FriendSet, S> {
    fn friends(&self, user: UserId) -> Option<&FriendSet> {
        self.get(&user)
    }
}

impl<S: BuildHasher> FriendGraph for HashMap<UserId, FriendSet, S> {
    fn friends(&self, user: UserId) -> Option<&FriendSet> {
        self.get(&user)
    }
}

/// Count how many of the first `limit` ids of `candidates` also appear in `other`
pub fn count_common(candidates: &FriendSet, other: &FriendSet, limit: usize) -> usize {
    candidates
        .iter()
        .take(limit)
        .filter(|id| other.contains(*id))
        .count()
}

/// Helper to build a symmetric adjacency map from an edge list (test/bench support)
///
/// Users `1..=user_count` get an entry even without edges. Edges are inserted
/// in list order, `b` into `a`'s set first.
pub fn adjacency_from_edges(
    user_count: UserId,
    edges: &[(UserId, UserId)],
) -> IndexMap<UserId, FriendSet, FxBuildHasher> {
    let mut adjacency: IndexMap<UserId, FriendSet, FxBuildHasher> = IndexMap::default();
    for user in 1..=user_count {
        adjacency.insert(user, FriendSet::default());
    }
    for &(a, b) in edges {
        if a == b {
            continue;
        }
        adjacency.entry(a).or_default().insert(b);
        adjacency.entry(b).or_default().insert(a);
    }
    adjacency
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacency_is_symmetric() {
        let graph = adjacency_from_edges(4, &[(1, 2), (2, 3), (3, 3)]);

        assert_eq!(graph.len(), 4);
        assert!(graph.are_friends(1, 2));
        assert!(graph.are_friends(2, 1));
        assert!(!graph.are_friends(3, 3));
        assert_eq!(graph.friends(4).map(|f| f.len()), Some(0));
        assert!(graph.friends(5).is_none());
    }

    #[test]
    fn test_friend_order_is_insertion_order() {
        let graph = adjacency_from_edges(5, &[(1, 4), (1, 2), (1, 5), (1, 3)]);
        let order: Vec<UserId> = graph.friends(1).unwrap().iter().copied().collect();
        assert_eq!(order, vec![4, 2, 5, 3]);
    }

    #[test]
    fn test_count_common_respects_limit() {
        let graph = adjacency_from_edges(6, &[(1, 3), (1, 4), (1, 5), (2, 3), (2, 4), (2, 5)]);
        let a = graph.friends(1).unwrap();
        let b = graph.friends(2).unwrap();

        assert_eq!(count_common(a, b, usize::MAX), 3);
        assert_eq!(count_common(a, b, 2), 2);
        assert_eq!(count_common(a, b, 0), 0);
    }
}
