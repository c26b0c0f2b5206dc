//! Query processing module
//!
//! Read-only queries over a [`SocialStore`]: mutual friends, friend
//! suggestions, trending posts, name search, feeds and mutual-pair scans.
//! Queries never fail; unknown users or posts yield empty results.

pub mod feed;
pub mod search;
pub mod trending;

// Re-export main types
pub use feed::{friend_count, friend_feed, friend_posts, friends_of, user_posts, FeedEntry, FriendSummary};
pub use search::{search_users_by_name, SearchLimits};
pub use trending::top_k_posts;

use crate::algo::{self, MutualPair, Suggestion};
use crate::config::QueryLimits;
use crate::graph::{Post, SocialStore, User, UserId};
use std::collections::BTreeMap;

/// Default number of results for suggestion and pair queries
pub const DEFAULT_RESULT_LIMIT: usize = 20;

/// Query engine - runs every query with one set of [`QueryLimits`]
#[derive(Debug, Clone, Default)]
pub struct QueryEngine {
    limits: QueryLimits,
}

impl QueryEngine {
    pub fn new(limits: QueryLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &QueryLimits {
        &self.limits
    }

    /// Mutual friends of `a` and `b` by linear scan
    pub fn mutual_friends_bfs(&self, store: &SocialStore, a: UserId, b: UserId) -> Vec<UserId> {
        algo::mutual_friends_bfs(store, a, b, self.limits.mutual_scan_limit)
    }

    /// Mutual friends of `a` and `b` by depth-first walk
    pub fn mutual_friends_dfs(&self, store: &SocialStore, a: UserId, b: UserId) -> Vec<UserId> {
        algo::mutual_friends_dfs(store, a, b, self.limits.mutual_scan_limit)
    }

    pub fn suggest_friends_bfs(&self, store: &SocialStore, user: UserId, top_k: usize) -> Vec<Suggestion> {
        algo::suggest_friends_bfs(store, user, top_k, &self.limits.suggestion)
    }

    pub fn suggest_friends_dfs(&self, store: &SocialStore, user: UserId, top_k: usize) -> Vec<Suggestion> {
        algo::suggest_friends_dfs(store, user, top_k, &self.limits.suggestion)
    }

    /// Exact suggestions over every user in the store
    pub fn suggest_friends_exhaustive(&self, store: &SocialStore, user: UserId, limit: usize) -> Vec<Suggestion> {
        let candidates = store.user_ids();
        algo::suggest_friends_exhaustive(store, user, &candidates, limit)
    }

    pub fn top_k_posts(&self, store: &SocialStore, k: usize) -> Vec<Post> {
        trending::top_k_posts(store, k)
    }

    pub fn search_users_by_name(&self, store: &SocialStore, term: &str) -> Vec<User> {
        search::search_users_by_name(store, term, &self.limits.search)
    }

    /// The `k` pairs with the most mutual friends among the leading users
    pub fn top_mutual_pairs(&self, store: &SocialStore, k: usize) -> Vec<MutualPair> {
        let scan = &self.limits.pair_scan;
        let users = algo::leading_users(store, scan.outer_users.max(scan.inner_users));
        algo::top_mutual_pairs(store, &users, k, scan)
    }

    /// Sample pairs whose exact mutual-friend count is one of `targets`
    pub fn find_pairs_with_counts(
        &self,
        store: &SocialStore,
        targets: &[usize],
    ) -> BTreeMap<usize, Vec<(UserId, UserId)>> {
        let sample = &self.limits.pair_sample;
        let users = algo::leading_users(store, sample.sample_users);
        algo::find_pairs_with_counts(store, &users, targets, sample)
    }
}
