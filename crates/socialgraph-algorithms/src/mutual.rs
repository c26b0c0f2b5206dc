//! Mutual-friend computation
//!
//! Both variants inspect at most `scan_limit` candidates from the first user's
//! friend set, in insertion order. They therefore truncate at the same
//! boundary and return the same list; very high-degree users may get an
//! incomplete answer.

use super::common::{FriendGraph, FriendSet, UserId};
use rustc_hash::FxHashSet;

/// Default number of candidates inspected from the first user's friend set
///
/// The boundary is exact: candidate 701 is never looked at.
pub const MUTUAL_SCAN_LIMIT: usize = 700;

/// Mutual friends of `a` and `b` by a linear scan of `a`'s friend set
///
/// Unknown users yield an empty list.
pub fn mutual_friends_bfs<G: FriendGraph + ?Sized>(
    graph: &G,
    a: UserId,
    b: UserId,
    scan_limit: usize,
) -> Vec<UserId> {
    let (Some(friends_a), Some(friends_b)) = (graph.friends(a), graph.friends(b)) else {
        return Vec::new();
    };

    friends_a
        .iter()
        .take(scan_limit)
        .copied()
        .filter(|friend| friends_b.contains(friend))
        .collect()
}

/// Mutual friends of `a` and `b` by a depth-first walk rooted at `a`
///
/// Every friend reached from the root costs one unit of `scan_limit`.
pub fn mutual_friends_dfs<G: FriendGraph + ?Sized>(
    graph: &G,
    a: UserId,
    b: UserId,
    scan_limit: usize,
) -> Vec<UserId> {
    let (Some(_), Some(friends_b)) = (graph.friends(a), graph.friends(b)) else {
        return Vec::new();
    };

    let mut walk = MutualWalk {
        friends_b,
        budget: scan_limit,
        visited: FxHashSet::default(),
        mutual: Vec::new(),
    };
    walk.visit(graph, a, 0);
    walk.mutual
}

struct MutualWalk<'g> {
    friends_b: &'g FriendSet,
    budget: usize,
    visited: FxHashSet<UserId>,
    mutual: Vec<UserId>,
}

impl MutualWalk<'_> {
    fn visit<G: FriendGraph + ?Sized>(&mut self, graph: &G, user: UserId, depth: usize) {
        if !self.visited.insert(user) {
            return;
        }

        // Leaf: a friend of the root
        if depth == 1 {
            if self.friends_b.contains(&user) {
                self.mutual.push(user);
            }
            return;
        }

        let Some(friends) = graph.friends(user) else {
            return;
        };
        for &friend in friends {
            if self.budget == 0 {
                break;
            }
            self.budget -= 1;
            self.visit(graph, friend, depth + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::adjacency_from_edges;

    fn sample_graph() -> indexmap::IndexMap<UserId, FriendSet, rustc_hash::FxBuildHasher> {
        // 1 and 2 share 3, 4, 5; 1 also knows 6, 2 also knows 7
        adjacency_from_edges(
            7,
            &[(1, 3), (1, 6), (1, 4), (1, 5), (2, 5), (2, 3), (2, 7), (2, 4)],
        )
    }

    #[test]
    fn test_mutual_friends_in_first_user_order() {
        let graph = sample_graph();
        assert_eq!(mutual_friends_bfs(&graph, 1, 2, MUTUAL_SCAN_LIMIT), vec![3, 4, 5]);
        assert_eq!(mutual_friends_bfs(&graph, 2, 1, MUTUAL_SCAN_LIMIT), vec![5, 3, 4]);
    }

    #[test]
    fn test_unknown_user_yields_empty() {
        let graph = sample_graph();
        assert!(mutual_friends_bfs(&graph, 1, 99, MUTUAL_SCAN_LIMIT).is_empty());
        assert!(mutual_friends_dfs(&graph, 99, 1, MUTUAL_SCAN_LIMIT).is_empty());
    }

    #[test]
    fn test_variants_agree() {
        let graph = sample_graph();
        for (a, b) in [(1, 2), (2, 1), (3, 4), (1, 7), (6, 7)] {
            assert_eq!(
                mutual_friends_bfs(&graph, a, b, MUTUAL_SCAN_LIMIT),
                mutual_friends_dfs(&graph, a, b, MUTUAL_SCAN_LIMIT),
                "pair ({}, {})",
                a,
                b
            );
        }
    }

    #[test]
    fn test_scan_limit_truncates_both_variants() {
        let graph = sample_graph();
        // Friends of 1 in order: 3, 6, 4, 5 -> only 3 and 6 are inspected
        assert_eq!(mutual_friends_bfs(&graph, 1, 2, 2), vec![3]);
        assert_eq!(mutual_friends_dfs(&graph, 1, 2, 2), vec![3]);
        assert!(mutual_friends_bfs(&graph, 1, 2, 0).is_empty());
        assert!(mutual_friends_dfs(&graph, 1, 2, 0).is_empty());
    }

    #[test]
    fn test_large_degree_is_capped() {
        // User 1 and 2 share 1000 friends (ids 3..=1002)
        let edges: Vec<(UserId, UserId)> = (3..=1002)
            .flat_map(|f| [(1, f), (2, f)])
            .collect();
        let graph = adjacency_from_edges(1002, &edges);

        let bfs = mutual_friends_bfs(&graph, 1, 2, MUTUAL_SCAN_LIMIT);
        let dfs = mutual_friends_dfs(&graph, 1, 2, MUTUAL_SCAN_LIMIT);
        assert_eq!(bfs.len(), MUTUAL_SCAN_LIMIT);
        // Friend 700 of user 1 is id 702; id 703 is never inspected
        assert_eq!(bfs.last(), Some(&702));
        assert_eq!(bfs, dfs);
    }
}
