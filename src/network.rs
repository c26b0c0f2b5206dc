//! Social network context
//!
//! [`SocialNetwork`] owns the store, the query engine and the persistence
//! adapter. Every entry point first makes sure the synthetic graph exists and
//! persisted data has been loaded; writes are saved right after they succeed.

use crate::config::EngineConfig;
use crate::generator::{self, GenerationReport, GeneratorConfig, PairCheck};
use crate::graph::{
    GraphError, GraphResult, GraphStatistics, Post, PostId, SocialStore, User, UserId,
};
use crate::persistence::{self, NoPersistence, PersistenceAdapter, PersistenceResult};
use crate::query::{FeedEntry, FriendSummary, QueryEngine};
use socialgraph_algorithms::{MutualPair, Suggestion};
use std::collections::BTreeMap;
use tracing::{error, info, warn};

pub struct SocialNetwork {
    store: SocialStore,
    generator: GeneratorConfig,
    queries: QueryEngine,
    persistence: Box<dyn PersistenceAdapter>,
}

impl std::fmt::Debug for SocialNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SocialNetwork")
            .field("initialized", &self.store.is_initialized())
            .field("users", &self.store.user_count())
            .field("edges", &self.store.edge_count())
            .field("posts", &self.store.post_count())
            .finish()
    }
}

impl Default for SocialNetwork {
    fn default() -> Self {
        Self::in_memory(EngineConfig::default())
    }
}

impl SocialNetwork {
    /// Build a network with the persistence backend named in `config`
    pub fn new(config: EngineConfig) -> PersistenceResult<Self> {
        let adapter = persistence::adapter_from_config(&config.persistence)?;
        Ok(Self::with_persistence(config, adapter))
    }

    /// Build a network that never saves or loads
    pub fn in_memory(config: EngineConfig) -> Self {
        Self::with_persistence(config, Box::new(NoPersistence))
    }

    pub fn with_persistence(config: EngineConfig, persistence: Box<dyn PersistenceAdapter>) -> Self {
        Self {
            store: SocialStore::new(),
            generator: config.generator,
            queries: QueryEngine::new(config.limits),
            persistence,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.store.is_initialized()
    }

    /// Generate the graph and load persisted data, once
    ///
    /// Returns the generation report on the call that did the work. Load
    /// failures are logged and leave the generated data in place.
    pub fn ensure_initialized(&mut self) -> Option<GenerationReport> {
        if self.store.is_initialized() {
            return None;
        }

        let report = match generator::populate(&mut self.store, &self.generator) {
            Ok(report) => report,
            Err(e) => {
                error!("Graph generation failed: {}", e);
                self.store.mark_initialized();
                None
            }
        };

        if let Err(e) = self.persistence.load_friendships(&mut self.store) {
            error!("Error loading persisted friendships: {}", e);
        }
        if let Err(e) = self.persistence.load_posts(&mut self.store) {
            error!("Error loading persisted posts: {}", e);
        }
        report
    }

    /// The initialized store
    pub fn store(&mut self) -> &SocialStore {
        self.ensure_initialized();
        &self.store
    }

    pub fn queries(&self) -> &QueryEngine {
        &self.queries
    }

    pub fn user(&mut self, id: UserId) -> Option<User> {
        self.store().get_user(id).cloned()
    }

    pub fn post(&mut self, id: PostId) -> Option<Post> {
        self.store().get_post(id).cloned()
    }

    // ---- mutations ----

    /// Register a new user with no friends
    ///
    /// Surrounding whitespace is trimmed from `name` before it is stored.
    /// Users are not part of the persisted snapshots.
    pub fn add_user(&mut self, id: UserId, name: &str) -> GraphResult<()> {
        self.ensure_initialized();
        let result = self.store.insert_user(User::new(id, name.trim()));
        match &result {
            Ok(()) => info!("Added user {} ({})", id, name.trim()),
            Err(e) => warn!("Rejected user {}: {}", id, e),
        }
        result
    }

    /// Befriend `a` and `b`, then save friendships
    pub fn add_friendship(&mut self, a: UserId, b: UserId) -> GraphResult<()> {
        self.ensure_initialized();
        if let Err(e) = self.store.connect(a, b) {
            warn!("Rejected friendship {} <-> {}: {}", a, b, e);
            return Err(e);
        }
        info!("Users {} and {} are now friends", a, b);
        self.save_friendships();
        Ok(())
    }

    /// Add one like; returns the new like count
    ///
    /// Counters saturate at `u64::MAX`.
    pub fn like_post(&mut self, id: PostId) -> GraphResult<u64> {
        self.bump_post(id, |post| {
            post.likes = post.likes.saturating_add(1);
            post.likes
        })
    }

    /// Add one share; returns the new share count
    pub fn share_post(&mut self, id: PostId) -> GraphResult<u64> {
        self.bump_post(id, |post| {
            post.shares = post.shares.saturating_add(1);
            post.shares
        })
    }

    /// Publish a post for `author`; returns its id
    pub fn create_post(&mut self, author: UserId, content: &str) -> GraphResult<PostId> {
        self.ensure_initialized();
        if !self.store.has_user(author) {
            warn!("Rejected post by unknown user {}", author);
            return Err(GraphError::UserNotFound(author));
        }
        let content = content.trim();
        if content.is_empty() {
            warn!("Rejected empty post by user {}", author);
            return Err(GraphError::InvalidPost("content is empty".to_string()));
        }

        let id = self.store.next_post_id();
        self.store.insert_post(Post::new(id, author, content))?;
        info!("User {} created post {}", author, id.as_u64());
        self.save_posts();
        Ok(id)
    }

    fn bump_post(&mut self, id: PostId, bump: impl FnOnce(&mut Post) -> u64) -> GraphResult<u64> {
        self.ensure_initialized();
        let Some(post) = self.store.get_post_mut(id) else {
            warn!("Post {} not found", id.as_u64());
            return Err(GraphError::PostNotFound(id));
        };
        let count = bump(post);
        if post.is_user_created() {
            self.save_posts();
        }
        Ok(count)
    }

    fn save_friendships(&self) {
        if let Err(e) = self.persistence.save_friendships(&self.store) {
            warn!("Failed to save friendships: {}", e);
        }
    }

    fn save_posts(&self) {
        if let Err(e) = self.persistence.save_posts(&self.store) {
            warn!("Failed to save posts: {}", e);
        }
    }

    // ---- queries ----

    pub fn mutual_friends_bfs(&mut self, a: UserId, b: UserId) -> Vec<UserId> {
        self.ensure_initialized();
        self.queries.mutual_friends_bfs(&self.store, a, b)
    }

    pub fn mutual_friends_dfs(&mut self, a: UserId, b: UserId) -> Vec<UserId> {
        self.ensure_initialized();
        self.queries.mutual_friends_dfs(&self.store, a, b)
    }

    pub fn suggest_friends_bfs(&mut self, user: UserId, top_k: usize) -> Vec<Suggestion> {
        self.ensure_initialized();
        self.queries.suggest_friends_bfs(&self.store, user, top_k)
    }

    pub fn suggest_friends_dfs(&mut self, user: UserId, top_k: usize) -> Vec<Suggestion> {
        self.ensure_initialized();
        self.queries.suggest_friends_dfs(&self.store, user, top_k)
    }

    pub fn suggest_friends_exhaustive(&mut self, user: UserId, limit: usize) -> Vec<Suggestion> {
        self.ensure_initialized();
        self.queries.suggest_friends_exhaustive(&self.store, user, limit)
    }

    pub fn top_k_posts(&mut self, k: usize) -> Vec<Post> {
        self.ensure_initialized();
        self.queries.top_k_posts(&self.store, k)
    }

    pub fn search_users_by_name(&mut self, term: &str) -> Vec<User> {
        self.ensure_initialized();
        self.queries.search_users_by_name(&self.store, term)
    }

    pub fn friend_feed(&mut self, user: UserId) -> Vec<FeedEntry> {
        crate::query::friend_feed(self.store(), user)
    }

    pub fn user_posts(&mut self, user: UserId) -> Vec<FeedEntry> {
        crate::query::user_posts(self.store(), user)
    }

    pub fn friend_posts(&mut self, user: UserId, friend: UserId) -> Vec<FeedEntry> {
        crate::query::friend_posts(self.store(), user, friend)
    }

    pub fn friends_of(&mut self, user: UserId) -> Vec<FriendSummary> {
        crate::query::friends_of(self.store(), user)
    }

    pub fn friend_count(&mut self, user: UserId) -> usize {
        crate::query::friend_count(self.store(), user)
    }

    pub fn top_mutual_pairs(&mut self, k: usize) -> Vec<MutualPair> {
        self.ensure_initialized();
        self.queries.top_mutual_pairs(&self.store, k)
    }

    pub fn find_pairs_with_counts(&mut self, targets: &[usize]) -> BTreeMap<usize, Vec<(UserId, UserId)>> {
        self.ensure_initialized();
        self.queries.find_pairs_with_counts(&self.store, targets)
    }

    pub fn verify_demonstration_pairs(&mut self) -> Vec<PairCheck> {
        generator::verify_demonstration_pairs(self.store())
    }

    pub fn statistics(&mut self) -> GraphStatistics {
        self.store().statistics()
    }

    pub fn validate(&mut self) -> GraphResult<()> {
        self.store().validate()
    }
}
