//! First-letter name index
//!
//! Maps the lowercase first character of a user name to the ids carrying that
//! initial, in insertion order. Entries are only ever appended.

use super::types::UserId;
use rustc_hash::FxHashMap;

#[derive(Debug, Default, Clone)]
pub struct NameIndex {
    buckets: FxHashMap<char, Vec<UserId>>,
    entries: usize,
}

impl NameIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index key of a name or search term
    pub fn key_for(text: &str) -> Option<char> {
        text.chars().next().and_then(|c| c.to_lowercase().next())
    }

    pub fn insert(&mut self, name: &str, user: UserId) {
        if let Some(key) = Self::key_for(name) {
            self.buckets.entry(key).or_default().push(user);
            self.entries += 1;
        }
    }

    /// Users whose name starts with `key`
    pub fn bucket(&self, key: char) -> &[UserId] {
        self.buckets.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Bucket matching the first character of `term`
    pub fn bucket_for(&self, term: &str) -> &[UserId] {
        Self::key_for(term).map(|key| self.bucket(key)).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buckets_by_lowercase_initial() {
        let mut index = NameIndex::new();
        index.insert("Alice1", 1);
        index.insert("bob2", 2);
        index.insert("Ava3", 3);

        assert_eq!(index.bucket('a'), &[1, 3]);
        assert_eq!(index.bucket('b'), &[2]);
        assert!(index.bucket('z').is_empty());
        assert_eq!(index.bucket_for("ALI"), &[1, 3]);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_empty_name_is_not_indexed() {
        let mut index = NameIndex::new();
        index.insert("", 9);
        assert!(index.is_empty());
        assert!(index.bucket_for("").is_empty());
    }
}
