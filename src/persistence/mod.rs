//! Persistence layer for the social graph
//!
//! The engine itself does no I/O. It calls a [`PersistenceAdapter`] after each
//! successful write and once during initialization. Snapshots are JSON:
//! - friendships: `{"<user id>": [friend ids in insertion order], ...}`
//! - posts: `{"<post id>": {"id", "authorId", "content", "likes", "shares"}, ...}`,
//!   user-created posts only

pub mod kv;
pub mod session;

pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use session::SessionStore;

use crate::config::{PersistenceBackend, PersistenceConfig};
use crate::graph::{Post, PostId, SocialStore, UserId};
use indexmap::IndexMap;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Persistence errors
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed persisted data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage lock poisoned")]
    Poisoned,
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Persisted friendship snapshot
pub type FriendshipSnapshot = IndexMap<String, Vec<UserId>>;

/// Persisted post snapshot
pub type PostSnapshot = IndexMap<String, Post>;

/// Save/load hooks called by the engine
pub trait PersistenceAdapter: Send + Sync {
    /// Save every user's friend list
    fn save_friendships(&self, store: &SocialStore) -> PersistenceResult<()>;

    /// Replace friend lists from the snapshot; returns the number of users restored
    ///
    /// On error the store is left untouched.
    fn load_friendships(&self, store: &mut SocialStore) -> PersistenceResult<usize>;

    /// Save user-created posts
    fn save_posts(&self, store: &SocialStore) -> PersistenceResult<()>;

    /// Restore user-created posts; returns the number of posts restored
    ///
    /// On error the store is left untouched.
    fn load_posts(&self, store: &mut SocialStore) -> PersistenceResult<usize>;
}

/// Adapter that saves and loads nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPersistence;

impl PersistenceAdapter for NoPersistence {
    fn save_friendships(&self, _store: &SocialStore) -> PersistenceResult<()> {
        Ok(())
    }

    fn load_friendships(&self, _store: &mut SocialStore) -> PersistenceResult<usize> {
        Ok(0)
    }

    fn save_posts(&self, _store: &SocialStore) -> PersistenceResult<()> {
        Ok(())
    }

    fn load_posts(&self, _store: &mut SocialStore) -> PersistenceResult<usize> {
        Ok(0)
    }
}

/// JSON snapshots in a [`KeyValueStore`]
#[derive(Debug, Clone)]
pub struct KvPersistence<S: KeyValueStore> {
    kv: S,
    friendships_key: String,
    posts_key: String,
}

impl<S: KeyValueStore> KvPersistence<S> {
    /// Use the default keys
    pub fn new(kv: S) -> Self {
        let defaults = PersistenceConfig::default();
        Self::with_keys(kv, defaults.friendships_key, defaults.posts_key)
    }

    pub fn with_keys(kv: S, friendships_key: impl Into<String>, posts_key: impl Into<String>) -> Self {
        Self {
            kv,
            friendships_key: friendships_key.into(),
            posts_key: posts_key.into(),
        }
    }

    pub fn kv(&self) -> &S {
        &self.kv
    }
}

impl<S: KeyValueStore> PersistenceAdapter for KvPersistence<S> {
    fn save_friendships(&self, store: &SocialStore) -> PersistenceResult<()> {
        let snapshot: FriendshipSnapshot = store
            .users()
            .map(|user| {
                let friends = store
                    .friends(user.id)
                    .map(|set| set.iter().copied().collect())
                    .unwrap_or_default();
                (user.id.to_string(), friends)
            })
            .collect();

        self.kv.put(&self.friendships_key, &serde_json::to_string(&snapshot)?)?;
        debug!("Saved friend lists of {} users", snapshot.len());
        Ok(())
    }

    fn load_friendships(&self, store: &mut SocialStore) -> PersistenceResult<usize> {
        let Some(raw) = self.kv.get(&self.friendships_key)? else {
            return Ok(0);
        };
        let snapshot: FriendshipSnapshot = serde_json::from_str(&raw)?;

        let mut restored = 0;
        let mut dropped = 0;
        for (key, friends) in snapshot {
            let Ok(user) = key.parse::<UserId>() else {
                warn!("Skipping friend list with non-numeric key {:?}", key);
                continue;
            };
            // Unknown users are skipped
            if let Ok(count) = store.replace_friends(user, friends) {
                dropped += count;
                restored += 1;
            }
        }
        let repaired = store.repair_symmetry();

        info!(
            "Restored friend lists of {} users ({} invalid ids dropped, {} reverse edges repaired)",
            restored, dropped, repaired
        );
        Ok(restored)
    }

    fn save_posts(&self, store: &SocialStore) -> PersistenceResult<()> {
        let snapshot: PostSnapshot = store
            .posts()
            .filter(|post| post.is_user_created())
            .map(|post| (post.id.as_u64().to_string(), post.clone()))
            .collect();

        self.kv.put(&self.posts_key, &serde_json::to_string(&snapshot)?)?;
        debug!("Saved {} user-created posts", snapshot.len());
        Ok(())
    }

    fn load_posts(&self, store: &mut SocialStore) -> PersistenceResult<usize> {
        let Some(raw) = self.kv.get(&self.posts_key)? else {
            return Ok(0);
        };
        let snapshot: PostSnapshot = serde_json::from_str(&raw)?;

        let mut restored = 0;
        for (key, mut post) in snapshot {
            let Ok(id) = key.parse::<u64>() else {
                warn!("Skipping post with non-numeric key {:?}", key);
                continue;
            };
            post.id = PostId(id);
            if !post.is_user_created() {
                continue;
            }
            match store.upsert_post(post) {
                Ok(()) => restored += 1,
                Err(e) => warn!("Skipping persisted post {}: {}", id, e),
            }
        }

        info!("Restored {} user-created posts", restored);
        Ok(restored)
    }
}

/// Build the adapter selected by `config`
pub fn adapter_from_config(config: &PersistenceConfig) -> PersistenceResult<Box<dyn PersistenceAdapter>> {
    let adapter: Box<dyn PersistenceAdapter> = match &config.backend {
        PersistenceBackend::Disabled => Box::new(NoPersistence),
        PersistenceBackend::Memory => Box::new(KvPersistence::with_keys(
            MemoryStore::new(),
            &config.friendships_key,
            &config.posts_key,
        )),
        PersistenceBackend::File { directory } => {
            info!("Initializing file persistence at: {:?}", directory);
            Box::new(KvPersistence::with_keys(
                FileStore::open(directory)?,
                &config.friendships_key,
                &config.posts_key,
            ))
        }
    };
    Ok(adapter)
}
