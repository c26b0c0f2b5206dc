//! Sampled scans for user pairs with many mutual friends
//!
//! Exhaustive pair enumeration is quadratic, so both scans look at a prefix of
//! the user list only. The prefix sizes are part of the result.

use super::common::{count_common, FriendGraph, UserId};
use super::mutual::{mutual_friends_bfs, MUTUAL_SCAN_LIMIT};
use rayon::prelude::*;
use std::collections::BTreeMap;

/// A user pair and the friends they share
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MutualPair {
    pub first: UserId,
    pub second: UserId,
    pub mutual: Vec<UserId>,
    pub are_friends: bool,
}

impl MutualPair {
    pub fn count(&self) -> usize {
        self.mutual.len()
    }
}

/// Bounds for [`top_mutual_pairs`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PairScanLimits {
    /// Users taken as the first member of a pair
    pub outer_users: usize,
    /// Users taken as the second member of a pair
    pub inner_users: usize,
    /// Candidates inspected per mutual-friend computation
    pub scan_limit: usize,
}

impl Default for PairScanLimits {
    fn default() -> Self {
        Self {
            outer_users: 8_000,
            inner_users: 1_500,
            scan_limit: MUTUAL_SCAN_LIMIT,
        }
    }
}

/// Bounds for [`find_pairs_with_counts`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PairSampleLimits {
    /// Users considered at all
    pub sample_users: usize,
    /// Each user is compared with the users following it inside this window
    pub window: usize,
    /// Pairs kept per target count
    pub per_count: usize,
}

impl Default for PairSampleLimits {
    fn default() -> Self {
        Self {
            sample_users: 5_000,
            window: 100,
            per_count: 5,
        }
    }
}

/// The `k` pairs with the most mutual friends among a sample of `users`
///
/// Pairs are `(first, second)` with `first` from the first `outer_users`
/// entries, `second` from the first `inner_users` entries, and
/// `first < second`. Pairs without mutual friends are dropped. Ties keep scan
/// order.
pub fn top_mutual_pairs<G: FriendGraph + Sync + ?Sized>(
    graph: &G,
    users: &[UserId],
    k: usize,
    limits: &PairScanLimits,
) -> Vec<MutualPair> {
    let outer = &users[..users.len().min(limits.outer_users)];
    let inner = &users[..users.len().min(limits.inner_users)];
    let scan_limit = limits.scan_limit;

    let mut pairs: Vec<MutualPair> = outer
        .par_iter()
        .flat_map_iter(|&first| {
            inner
                .iter()
                .filter(move |&&second| first < second)
                .filter_map(move |&second| {
                    let mutual = mutual_friends_bfs(graph, first, second, scan_limit);
                    (!mutual.is_empty()).then(|| MutualPair {
                        first,
                        second,
                        are_friends: graph.are_friends(first, second),
                        mutual,
                    })
                })
        })
        .collect();

    pairs.sort_by(|a, b| b.count().cmp(&a.count()));
    pairs.truncate(k);
    pairs
}

/// Find up to `per_count` pairs for each exact mutual-friend count in `targets`
///
/// Every target gets an entry, possibly empty.
pub fn find_pairs_with_counts<G: FriendGraph + ?Sized>(
    graph: &G,
    users: &[UserId],
    targets: &[usize],
    limits: &PairSampleLimits,
) -> BTreeMap<usize, Vec<(UserId, UserId)>> {
    let mut found: BTreeMap<usize, Vec<(UserId, UserId)>> =
        targets.iter().map(|&count| (count, Vec::new())).collect();

    let sample = &users[..users.len().min(limits.sample_users)];
    for (i, &first) in sample.iter().enumerate() {
        let window_end = (i + limits.window).min(sample.len());
        let Some(first_friends) = graph.friends(first) else {
            continue;
        };

        for &second in &sample[(i + 1).min(window_end)..window_end] {
            let Some(second_friends) = graph.friends(second) else {
                continue;
            };
            let count = count_common(first_friends, second_friends, usize::MAX);
            if let Some(bucket) = found.get_mut(&count) {
                if bucket.len() < limits.per_count {
                    bucket.push((first, second));
                }
            }
        }

        if found.values().all(|bucket| bucket.len() >= limits.per_count) {
            break;
        }
    }

    found
}
