//! In-memory social graph storage
//!
//! Holds users, the symmetric friendship relation, posts and the name index.
//! Every map is insertion-ordered so scans (and therefore capped queries) are
//! reproducible.

use super::index::NameIndex;
use super::post::{Post, SEED_POST_CEILING};
use super::types::{PostId, UserId};
use super::user::User;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use serde::{Deserialize, Serialize};
use socialgraph_algorithms::FriendSet;
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("User {0} not found")]
    UserNotFound(UserId),

    #[error("Post {0} not found")]
    PostNotFound(PostId),

    #[error("User {0} already exists")]
    UserAlreadyExists(UserId),

    #[error("Post {0} already exists")]
    PostAlreadyExists(PostId),

    #[error("Users {0} and {1} are already friends")]
    FriendshipAlreadyExists(UserId, UserId),

    #[error("User {0} cannot befriend themselves")]
    SelfFriendship(UserId),

    #[error("Invalid user: {0}")]
    InvalidUser(String),

    #[error("Invalid post: {0}")]
    InvalidPost(String),

    #[error("Friendship {0} -> {1} has no reverse edge")]
    AsymmetricFriendship(UserId, UserId),

    #[error("User {0} lists unknown friend {1}")]
    DanglingFriend(UserId, UserId),
}

pub type GraphResult<T> = Result<T, GraphError>;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Summary counters over the whole store
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphStatistics {
    pub user_count: usize,
    pub edge_count: usize,
    pub post_count: usize,
    pub user_created_posts: usize,
    pub max_degree: usize,
    pub average_degree: f64,
}

/// In-memory social graph
///
/// - users: UserId -> User
/// - friendships: UserId -> FriendSet (symmetric, no self-loops)
/// - posts: PostId -> Post
/// - name_index: lowercase initial -> [UserId]
#[derive(Debug, Default, Clone)]
pub struct SocialStore {
    users: FxIndexMap<UserId, User>,
    friendships: FxIndexMap<UserId, FriendSet>,
    posts: FxIndexMap<PostId, Post>,
    name_index: NameIndex,
    /// Number of unordered friendship pairs
    edge_count: usize,
    max_post_id: u64,
    initialized: bool,
}

impl SocialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn mark_initialized(&mut self) {
        self.initialized = true;
    }

    // ---- users ----

    /// Insert a user with an empty friend set and index its name
    pub fn insert_user(&mut self, user: User) -> GraphResult<()> {
        if user.id == 0 {
            return Err(GraphError::InvalidUser("user id must be positive".to_string()));
        }
        if user.name.trim().is_empty() {
            return Err(GraphError::InvalidUser(format!("user {} has a blank name", user.id)));
        }
        if self.users.contains_key(&user.id) {
            return Err(GraphError::UserAlreadyExists(user.id));
        }

        self.name_index.insert(&user.name, user.id);
        self.friendships.insert(user.id, FriendSet::default());
        self.users.insert(user.id, user);
        Ok(())
    }

    pub fn get_user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    pub fn has_user(&self, id: UserId) -> bool {
        self.users.contains_key(&id)
    }

    /// Users in insertion order
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    pub fn user_ids(&self) -> Vec<UserId> {
        self.users.keys().copied().collect()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn name_index(&self) -> &NameIndex {
        &self.name_index
    }

    // ---- friendships ----

    pub fn friends(&self, user: UserId) -> Option<&FriendSet> {
        self.friendships.get(&user)
    }

    pub fn degree(&self, user: UserId) -> usize {
        self.friends(user).map_or(0, FriendSet::len)
    }

    /// True only when the edge exists in both directions
    pub fn are_friends(&self, a: UserId, b: UserId) -> bool {
        let forward = self.friendships.get(&a).is_some_and(|f| f.contains(&b));
        let backward = self.friendships.get(&b).is_some_and(|f| f.contains(&a));
        forward && backward
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub(crate) fn adjacency(&self) -> &FxIndexMap<UserId, FriendSet> {
        &self.friendships
    }

    /// Create the friendship `a <-> b`
    pub fn connect(&mut self, a: UserId, b: UserId) -> GraphResult<()> {
        if !self.has_user(a) {
            return Err(GraphError::UserNotFound(a));
        }
        if !self.has_user(b) {
            return Err(GraphError::UserNotFound(b));
        }
        if a == b {
            return Err(GraphError::SelfFriendship(a));
        }
        if self.are_friends(a, b) {
            return Err(GraphError::FriendshipAlreadyExists(a, b));
        }
        self.link_if_absent(a, b);
        Ok(())
    }

    /// Insert the symmetric edge unless it already exists
    ///
    /// Returns `true` if the store changed. Self pairs and unknown users are
    /// ignored.
    pub fn link_if_absent(&mut self, a: UserId, b: UserId) -> bool {
        if a == b || !self.has_user(a) || !self.has_user(b) || self.are_friends(a, b) {
            return false;
        }

        let forward_new = self.friendships.get_mut(&a).is_some_and(|f| f.insert(b));
        let backward_new = self.friendships.get_mut(&b).is_some_and(|f| f.insert(a));
        if forward_new && backward_new {
            self.edge_count += 1;
        } else {
            // One direction was already present
            self.recount_edges();
        }
        true
    }

    /// Replace a user's friend list, dropping unknown and self ids
    ///
    /// Returns the number of dropped ids. The relation may be asymmetric and
    /// the edge count stale afterwards; call [`SocialStore::repair_symmetry`]
    /// once all lists are in.
    pub(crate) fn replace_friends(
        &mut self,
        user: UserId,
        friends: impl IntoIterator<Item = UserId>,
    ) -> GraphResult<usize> {
        if !self.has_user(user) {
            return Err(GraphError::UserNotFound(user));
        }

        let mut kept = FriendSet::default();
        let mut dropped = 0;
        for friend in friends {
            if friend != user && self.users.contains_key(&friend) {
                kept.insert(friend);
            } else {
                dropped += 1;
            }
        }

        self.friendships.insert(user, kept);
        Ok(dropped)
    }

    /// Add every missing reverse edge; returns how many were added
    pub fn repair_symmetry(&mut self) -> usize {
        let missing: Vec<(UserId, UserId)> = self
            .friendships
            .iter()
            .flat_map(|(&user, friends)| friends.iter().map(move |&friend| (friend, user)))
            .filter(|(friend, user)| {
                self.friendships
                    .get(friend)
                    .is_some_and(|reverse| !reverse.contains(user))
            })
            .collect();

        for &(friend, user) in &missing {
            if let Some(reverse) = self.friendships.get_mut(&friend) {
                reverse.insert(user);
            }
        }
        self.recount_edges();
        missing.len()
    }

    fn recount_edges(&mut self) {
        let half_edges: usize = self.friendships.values().map(FriendSet::len).sum();
        self.edge_count = half_edges / 2;
    }

    // ---- posts ----

    /// Insert a new post; the author must exist and the id must be free
    pub fn insert_post(&mut self, post: Post) -> GraphResult<()> {
        if post.id.as_u64() == 0 {
            return Err(GraphError::InvalidPost("post id must be positive".to_string()));
        }
        if !self.has_user(post.author_id) {
            return Err(GraphError::UserNotFound(post.author_id));
        }
        if self.posts.contains_key(&post.id) {
            return Err(GraphError::PostAlreadyExists(post.id));
        }
        self.put_post(post);
        Ok(())
    }

    /// Insert or overwrite a post; the author must exist
    pub fn upsert_post(&mut self, post: Post) -> GraphResult<()> {
        if post.id.as_u64() == 0 {
            return Err(GraphError::InvalidPost("post id must be positive".to_string()));
        }
        if !self.has_user(post.author_id) {
            return Err(GraphError::UserNotFound(post.author_id));
        }
        self.put_post(post);
        Ok(())
    }

    fn put_post(&mut self, post: Post) {
        self.max_post_id = self.max_post_id.max(post.id.as_u64());
        self.posts.insert(post.id, post);
    }

    pub fn get_post(&self, id: PostId) -> Option<&Post> {
        self.posts.get(&id)
    }

    pub fn get_post_mut(&mut self, id: PostId) -> Option<&mut Post> {
        self.posts.get_mut(&id)
    }

    /// Posts in insertion order
    pub fn posts(&self) -> impl Iterator<Item = &Post> {
        self.posts.values()
    }

    pub fn post_count(&self) -> usize {
        self.posts.len()
    }

    /// Id for the next user-created post: `max(60000, max id) + 1`
    pub fn next_post_id(&self) -> PostId {
        PostId(self.max_post_id.max(SEED_POST_CEILING) + 1)
    }

    // ---- diagnostics ----

    /// Check symmetry, self-loops and dangling friend ids
    pub fn validate(&self) -> GraphResult<()> {
        for (&user, friends) in &self.friendships {
            for &friend in friends {
                if friend == user {
                    return Err(GraphError::SelfFriendship(user));
                }
                let Some(reverse) = self.friendships.get(&friend) else {
                    return Err(GraphError::DanglingFriend(user, friend));
                };
                if !reverse.contains(&user) {
                    return Err(GraphError::AsymmetricFriendship(user, friend));
                }
            }
        }
        Ok(())
    }

    pub fn statistics(&self) -> GraphStatistics {
        let max_degree = self.friendships.values().map(FriendSet::len).max().unwrap_or(0);
        let average_degree = if self.users.is_empty() {
            0.0
        } else {
            (self.edge_count * 2) as f64 / self.users.len() as f64
        };

        GraphStatistics {
            user_count: self.users.len(),
            edge_count: self.edge_count,
            post_count: self.posts.len(),
            user_created_posts: self.posts.values().filter(|p| p.is_user_created()).count(),
            max_degree,
            average_degree,
        }
    }
}
