//! Socialgraph Engine
//!
//! An in-memory social-graph query engine: users, symmetric friendships and
//! posts, a deterministic synthetic dataset, and bounded graph queries over it.
//!
//! # Architecture
//!
//! - [`graph`]: data model and the [`SocialStore`]
//! - [`generator`]: seeded PRNG and the synthetic graph
//! - [`algo`]: adapter onto the `socialgraph-algorithms` crate
//! - [`query`]: search, trending posts, feeds and the [`QueryEngine`]
//! - [`persistence`]: JSON snapshots behind a [`PersistenceAdapter`]
//! - [`network`]: the [`SocialNetwork`] context tying it together
//!
//! ## Example Usage
//!
//! ```rust
//! use socialgraph::{EngineConfig, SocialNetwork};
//!
//! // A small graph keeps the example fast
//! let mut config = EngineConfig::default();
//! config.generator.user_count = 500;
//! config.generator.cluster_count = 5;
//! config.generator.target_edges = 5_000;
//!
//! let mut network = SocialNetwork::in_memory(config);
//!
//! // Users 2 and 3 always share seven friends
//! assert_eq!(network.mutual_friends_bfs(2, 3).len(), 7);
//!
//! // Mutations report failures as values
//! assert!(network.add_friendship(2, 2).is_err());
//! network.add_user(501, "Nova").unwrap();
//! network.add_friendship(501, 2).unwrap();
//! assert_eq!(network.friend_count(501), 1);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod generator;
pub mod graph;
pub mod network;
pub mod persistence;
pub mod query;

// Re-export main types for convenience
pub use graph::{
    GraphError, GraphResult, GraphStatistics, NameIndex, Post, PostId, SocialStore, User, UserId,
};

pub use generator::{populate, GenerationReport, GeneratorConfig, Lcg, PairCheck};

pub use query::{FeedEntry, FriendSummary, QueryEngine, SearchLimits};

pub use persistence::{
    FileStore, KeyValueStore, KvPersistence, MemoryStore, NoPersistence, PersistenceAdapter,
    PersistenceError, PersistenceResult, SessionStore,
};

pub use config::{ConfigError, EngineConfig, PersistenceBackend, PersistenceConfig, QueryLimits};

pub use network::SocialNetwork;

pub use socialgraph_algorithms::{MutualPair, Suggestion};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.3.0");
    }
}
