//! Substring search over user names

use crate::graph::{SocialStore, User};
use serde::{Deserialize, Serialize};

/// Bounds on name search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchLimits {
    /// Terms longer than this many characters go through the name index
    pub index_min_chars: usize,
    /// Users inspected by the full scan used for short terms
    pub scan_limit: usize,
    pub max_results: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            index_min_chars: 2,
            scan_limit: 7_000,
            max_results: 40,
        }
    }
}

/// Users whose lowercased name contains the trimmed, lowercased `term`
///
/// Long terms only look at the index bucket of their first character, so a
/// match must share the term's initial. Short terms scan users in insertion
/// order. A blank term matches nobody.
pub fn search_users_by_name(store: &SocialStore, term: &str, limits: &SearchLimits) -> Vec<User> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }

    let matches = |user: &User| user.search_key().contains(&term);
    let mut results = Vec::new();

    if term.chars().count() > limits.index_min_chars {
        for &id in store.name_index().bucket_for(&term) {
            if let Some(user) = store.get_user(id).filter(|user| matches(*user)) {
                results.push(user.clone());
            }
            if results.len() >= limits.max_results {
                break;
            }
        }
    } else {
        for (inspected, user) in store.users().enumerate() {
            if matches(user) {
                results.push(user.clone());
            }
            if inspected + 1 >= limits.scan_limit || results.len() >= limits.max_results {
                break;
            }
        }
    }

    results
}
