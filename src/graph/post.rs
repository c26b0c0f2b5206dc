//! Post records and their ranking score

use super::types::{PostId, UserId};
use serde::{Deserialize, Serialize};

/// Highest id of a seed post; larger ids are user-created
pub const SEED_POST_CEILING: u64 = 60_000;

/// A post authored by a user
///
/// Serialized with camelCase keys (`authorId`), the format used for
/// persisted snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub author_id: UserId,
    pub content: String,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub shares: u64,
}

impl Post {
    pub fn new(id: PostId, author_id: UserId, content: impl Into<String>) -> Self {
        Post {
            id,
            author_id,
            content: content.into(),
            likes: 0,
            shares: 0,
        }
    }

    /// Trending score: `likes + 2 * shares`
    pub fn trending_score(&self) -> u64 {
        self.likes.saturating_add(self.shares.saturating_mul(2))
    }

    /// Whether the post was created after generation (and is persisted)
    pub fn is_user_created(&self) -> bool {
        is_user_created(self.id)
    }
}

pub fn is_user_created(id: PostId) -> bool {
    id.as_u64() > SEED_POST_CEILING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trending_score() {
        let mut post = Post::new(PostId(1), 1, "Beach day was incredible!");
        post.likes = 50;
        post.shares = 103;
        assert_eq!(post.trending_score(), 256);
    }

    #[test]
    fn test_user_created_boundary() {
        assert!(!Post::new(PostId(60_000), 1, "x").is_user_created());
        assert!(Post::new(PostId(60_001), 1, "x").is_user_created());
    }

    #[test]
    fn test_json_shape() {
        let post = Post::new(PostId(60_001), 7, "hello");
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 60001, "authorId": 7, "content": "hello", "likes": 0, "shares": 0})
        );

        let back: Post = serde_json::from_value(json).unwrap();
        assert_eq!(back, post);
    }
}
