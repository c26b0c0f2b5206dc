pub mod common;
pub mod mutual;
pub mod suggest;
pub mod ranking;
pub mod pairs;

pub use common::{adjacency_from_edges, count_common, FriendGraph, FriendSet, UserId};
pub use mutual::{mutual_friends_bfs, mutual_friends_dfs, MUTUAL_SCAN_LIMIT};
pub use suggest::{
    suggest_friends_bfs, suggest_friends_dfs, suggest_friends_exhaustive, Suggestion,
    SuggestionLimits,
};
pub use ranking::{top_k_by_score, Scored};
pub use pairs::{find_pairs_with_counts, top_mutual_pairs, MutualPair, PairSampleLimits, PairScanLimits};
