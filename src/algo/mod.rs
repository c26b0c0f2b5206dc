//! Graph algorithms module
//!
//! Algorithms are implemented in the `socialgraph-algorithms` crate.
//! This module provides the integration/adapter layer.

use crate::graph::{SocialStore, UserId};
use socialgraph_algorithms::{FriendGraph, FriendSet};

// Re-export algorithms
pub use socialgraph_algorithms::{
    find_pairs_with_counts, mutual_friends_bfs, mutual_friends_dfs, suggest_friends_bfs,
    suggest_friends_dfs, suggest_friends_exhaustive, top_k_by_score, top_mutual_pairs, MutualPair,
    PairSampleLimits, PairScanLimits, Scored, Suggestion, SuggestionLimits, MUTUAL_SCAN_LIMIT,
};

impl FriendGraph for SocialStore {
    fn friends(&self, user: UserId) -> Option<&FriendSet> {
        self.adjacency().get(&user)
    }
}

/// Users in store order, limited to the first `limit`
pub fn leading_users(store: &SocialStore, limit: usize) -> Vec<UserId> {
    store.users().take(limit).map(|user| user.id).collect()
}
