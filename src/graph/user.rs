//! User records

use super::types::UserId;
use serde::{Deserialize, Serialize};

/// A member of the social graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, never 0
    pub id: UserId,

    /// Display name, never blank
    pub name: String,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        User {
            id,
            name: name.into(),
        }
    }

    /// Whether the record may enter the store
    pub fn is_valid(&self) -> bool {
        self.id != 0 && !self.name.trim().is_empty()
    }

    /// Lowercased name used for substring search
    pub fn search_key(&self) -> String {
        self.name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_validity() {
        assert!(User::new(1, "Alice1").is_valid());
        assert!(!User::new(0, "Alice").is_valid());
        assert!(!User::new(5, "   ").is_valid());
        assert!(!User::new(5, "").is_valid());
    }

    #[test]
    fn test_search_key() {
        assert_eq!(User::new(3, "Kate3").search_key(), "kate3");
    }
}
