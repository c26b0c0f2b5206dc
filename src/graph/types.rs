//! Core type definitions for the social graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a user (shared with the algorithm crate)
pub use socialgraph_algorithms::UserId;

/// Unique identifier for a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl PostId {
    pub fn new(id: u64) -> Self {
        PostId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PostId({})", self.0)
    }
}

impl From<u64> for PostId {
    fn from(id: u64) -> Self {
        PostId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_id() {
        let id = PostId::new(42);
        assert_eq!(id.as_u64(), 42);
        assert_eq!(format!("{}", id), "PostId(42)");

        let id2: PostId = 100.into();
        assert_eq!(id2.as_u64(), 100);
    }

    #[test]
    fn test_post_id_serializes_as_number() {
        assert_eq!(serde_json::to_string(&PostId(7)).unwrap(), "7");
        let id: PostId = serde_json::from_str("60001").unwrap();
        assert_eq!(id, PostId(60001));
    }

    #[test]
    fn test_post_id_ordering() {
        let mut ids = vec![PostId(3), PostId(1), PostId(2)];
        ids.sort();
        assert_eq!(ids, vec![PostId(1), PostId(2), PostId(3)]);
    }
}
