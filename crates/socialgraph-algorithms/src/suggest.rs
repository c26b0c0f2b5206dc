//! Friend suggestion over the friends-of-friends neighborhood
//!
//! Two bounded traversals (BFS and DFS) and one exhaustive scan. A candidate is
//! scored by the number of the origin's friends it also knows; only candidates
//! with a positive score are kept. Results are sorted by descending score and
//! ties keep discovery order.

use super::common::{count_common, FriendGraph, FriendSet, UserId};
use indexmap::IndexMap;
use rayon::prelude::*;
use rustc_hash::{FxBuildHasher, FxHashSet};
use std::collections::VecDeque;

/// Deepest level the DFS descends to (origin = 0)
const MAX_DFS_DEPTH: usize = 2;

/// A suggested user and the number of friends shared with the origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Suggestion {
    pub user: UserId,
    pub mutual_count: usize,
}

/// Bounds on suggestion work
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SuggestionLimits {
    /// Traversal stops once more than this many users have been visited
    pub max_visited: usize,
    /// Friends of the origin inspected when scoring one candidate, exactly
    pub mutual_check_limit: usize,
    /// Candidate pool size per requested suggestion
    pub candidates_per_result: usize,
    /// Ceiling on the candidate pool
    pub max_candidates: usize,
}

impl Default for SuggestionLimits {
    fn default() -> Self {
        Self {
            max_visited: 7_000,
            mutual_check_limit: 150,
            candidates_per_result: 15,
            max_candidates: 1_500,
        }
    }
}

impl SuggestionLimits {
    /// Candidate pool size for a request of `top_k` suggestions
    pub fn candidate_pool(&self, top_k: usize) -> usize {
        top_k
            .saturating_mul(self.candidates_per_result)
            .min(self.max_candidates)
    }
}

type Candidates = IndexMap<UserId, usize, FxBuildHasher>;

/// Breadth-first friend suggestion
///
/// The queue is seeded with the origin's friends, all marked visited, so
/// existing friends are never suggested by this variant. Friends-of-friends
/// are scored as they are discovered and not expanded further.
pub fn suggest_friends_bfs<G: FriendGraph + ?Sized>(
    graph: &G,
    user: UserId,
    top_k: usize,
    limits: &SuggestionLimits,
) -> Vec<Suggestion> {
    let Some(origin_friends) = graph.friends(user) else {
        return Vec::new();
    };

    let pool = limits.candidate_pool(top_k);
    let mut visited: FxHashSet<UserId> = FxHashSet::default();
    let mut queue = VecDeque::with_capacity(origin_friends.len());
    let mut candidates = Candidates::default();

    visited.insert(user);
    for &friend in origin_friends {
        visited.insert(friend);
        queue.push_back(friend);
    }

    while candidates.len() < pool {
        let Some(current) = queue.pop_front() else {
            break;
        };

        if let Some(current_friends) = graph.friends(current) {
            for &neighbor in current_friends {
                if !visited.insert(neighbor) {
                    continue;
                }
                if let Some(count) =
                    mutual_score(graph, origin_friends, neighbor, limits.mutual_check_limit)
                {
                    candidates.insert(neighbor, count);
                }
            }
        }

        if visited.len() > limits.max_visited {
            break;
        }
    }

    rank(candidates, top_k)
}

/// Depth-first friend suggestion
///
/// Recursion stops below depth 2. Users first reached from a depth-1 node are
/// scored; since a friend of the origin can be reached that way before the
/// origin's own loop gets to it, existing friends may be suggested.
pub fn suggest_friends_dfs<G: FriendGraph + ?Sized>(
    graph: &G,
    user: UserId,
    top_k: usize,
    limits: &SuggestionLimits,
) -> Vec<Suggestion> {
    let Some(origin_friends) = graph.friends(user) else {
        return Vec::new();
    };

    let mut walk = SuggestionWalk {
        graph,
        origin: user,
        origin_friends,
        limits,
        visited: FxHashSet::default(),
        candidates: Candidates::default(),
    };
    walk.visit(user, 0);

    rank(walk.candidates, top_k)
}

/// Score every user in `candidates` except `user` and its current friends
///
/// Counts are exact (no check limit). Scoring runs in parallel; results keep
/// the order of `candidates` before the stable sort.
pub fn suggest_friends_exhaustive<G: FriendGraph + Sync + ?Sized>(
    graph: &G,
    user: UserId,
    candidates: &[UserId],
    limit: usize,
) -> Vec<Suggestion> {
    let Some(origin_friends) = graph.friends(user) else {
        return Vec::new();
    };

    let mut scored: Vec<Suggestion> = candidates
        .par_iter()
        .filter(|&&candidate| candidate != user && !origin_friends.contains(&candidate))
        .filter_map(|&candidate| {
            mutual_score(graph, origin_friends, candidate, usize::MAX).map(|mutual_count| {
                Suggestion {
                    user: candidate,
                    mutual_count,
                }
            })
        })
        .collect();

    scored.sort_by(|a, b| b.mutual_count.cmp(&a.mutual_count));
    scored.truncate(limit);
    scored
}

struct SuggestionWalk<'g, G: ?Sized> {
    graph: &'g G,
    origin: UserId,
    origin_friends: &'g FriendSet,
    limits: &'g SuggestionLimits,
    visited: FxHashSet<UserId>,
    candidates: Candidates,
}

impl<G: FriendGraph + ?Sized> SuggestionWalk<'_, G> {
    fn visit(&mut self, current: UserId, depth: usize) {
        if depth > MAX_DFS_DEPTH || self.visited.len() > self.limits.max_visited {
            return;
        }
        if !self.visited.insert(current) {
            return;
        }
        // Deeper calls would return immediately
        if depth == MAX_DFS_DEPTH {
            return;
        }

        let graph = self.graph;
        let Some(current_friends) = graph.friends(current) else {
            return;
        };

        for &neighbor in current_friends {
            if self.visited.contains(&neighbor) {
                continue;
            }
            if depth == 1 && neighbor != self.origin {
                if let Some(count) = mutual_score(
                    graph,
                    self.origin_friends,
                    neighbor,
                    self.limits.mutual_check_limit,
                ) {
                    self.candidates.insert(neighbor, count);
                }
            }
            self.visit(neighbor, depth + 1);
        }
    }
}

fn mutual_score<G: FriendGraph + ?Sized>(
    graph: &G,
    origin_friends: &FriendSet,
    candidate: UserId,
    check_limit: usize,
) -> Option<usize> {
    let candidate_friends = graph.friends(candidate)?;
    let count = count_common(origin_friends, candidate_friends, check_limit);
    (count > 0).then_some(count)
}

fn rank(candidates: Candidates, top_k: usize) -> Vec<Suggestion> {
    let mut ranked: Vec<Suggestion> = candidates
        .into_iter()
        .map(|(user, mutual_count)| Suggestion { user, mutual_count })
        .collect();
    // Stable: ties keep discovery order
    ranked.sort_by(|a, b| b.mutual_count.cmp(&a.mutual_count));
    ranked.truncate(top_k);
    ranked
}
