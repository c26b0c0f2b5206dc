//! Per-user post feeds and friend listings

use crate::graph::{Post, SocialStore, User, UserId};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A post together with its author's display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedEntry {
    #[serde(flatten)]
    pub post: Post,
    pub author_name: String,
}

/// A friend and the number of posts they authored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendSummary {
    #[serde(flatten)]
    pub user: User,
    pub post_count: usize,
}

/// Posts authored by the friends of `user`, newest first
pub fn friend_feed(store: &SocialStore, user: UserId) -> Vec<FeedEntry> {
    let Some(friends) = store.friends(user) else {
        return Vec::new();
    };
    newest_first(store, |post| friends.contains(&post.author_id))
}

/// Posts authored by `user`, newest first
pub fn user_posts(store: &SocialStore, user: UserId) -> Vec<FeedEntry> {
    newest_first(store, |post| post.author_id == user)
}

/// Posts of `friend`, newest first; empty unless `friend` is a friend of `user`
pub fn friend_posts(store: &SocialStore, user: UserId, friend: UserId) -> Vec<FeedEntry> {
    if !store.friends(user).is_some_and(|friends| friends.contains(&friend)) {
        return Vec::new();
    }
    user_posts(store, friend)
}

/// Friends of `user` with their post counts, sorted by name
pub fn friends_of(store: &SocialStore, user: UserId) -> Vec<FriendSummary> {
    let Some(friends) = store.friends(user) else {
        return Vec::new();
    };

    let mut post_counts: FxHashMap<UserId, usize> = FxHashMap::default();
    for post in store.posts() {
        if friends.contains(&post.author_id) {
            *post_counts.entry(post.author_id).or_default() += 1;
        }
    }

    let mut summaries: Vec<FriendSummary> = friends
        .iter()
        .filter_map(|&id| store.get_user(id))
        .map(|friend| FriendSummary {
            user: friend.clone(),
            post_count: post_counts.get(&friend.id).copied().unwrap_or(0),
        })
        .collect();
    summaries.sort_by(|a, b| a.user.name.cmp(&b.user.name));
    summaries
}

/// Number of friends of `user` (0 when unknown)
pub fn friend_count(store: &SocialStore, user: UserId) -> usize {
    store.degree(user)
}

fn newest_first(store: &SocialStore, keep: impl Fn(&Post) -> bool) -> Vec<FeedEntry> {
    let mut entries: Vec<FeedEntry> = store
        .posts()
        .filter(|&post| keep(post))
        .map(|post| FeedEntry {
            post: post.clone(),
            author_name: store
                .get_user(post.author_id)
                .map_or_else(|| "Unknown".to_string(), |author| author.name.clone()),
        })
        .collect();
    entries.sort_by(|a, b| b.post.id.cmp(&a.post.id));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::PostId;

    /// 1 is friends with 2 and 3; 4 is a stranger
    fn sample_store() -> SocialStore {
        let mut store = SocialStore::new();
        for (id, name) in [(1, "Mia1"), (2, "Zoe2"), (3, "Adam3"), (4, "Eve4")] {
            store.insert_user(User::new(id, name)).unwrap();
        }
        store.connect(1, 2).unwrap();
        store.connect(1, 3).unwrap();

        for (id, author) in [(1, 2), (2, 3), (3, 4), (4, 2), (5, 1)] {
            store.insert_post(Post::new(PostId(id), author, format!("post {}", id))).unwrap();
        }
        store
    }

    fn post_ids(entries: &[FeedEntry]) -> Vec<u64> {
        entries.iter().map(|e| e.post.id.as_u64()).collect()
    }

    #[test]
    fn test_friend_feed_newest_first() {
        let store = sample_store();
        let feed = friend_feed(&store, 1);
        assert_eq!(post_ids(&feed), vec![4, 2, 1]);
        assert_eq!(feed[0].author_name, "Zoe2");
        assert!(friend_feed(&store, 99).is_empty());
    }

    #[test]
    fn test_user_and_friend_posts() {
        let store = sample_store();
        assert_eq!(post_ids(&user_posts(&store, 1)), vec![5]);
        assert_eq!(post_ids(&friend_posts(&store, 1, 2)), vec![4, 1]);
        // 4 is not a friend of 1
        assert!(friend_posts(&store, 1, 4).is_empty());
    }

    #[test]
    fn test_friends_of_sorted_by_name() {
        let store = sample_store();
        let friends = friends_of(&store, 1);
        let names: Vec<&str> = friends.iter().map(|f| f.user.name.as_str()).collect();
        assert_eq!(names, vec!["Adam3", "Zoe2"]);
        assert_eq!(friends[0].post_count, 1);
        assert_eq!(friends[1].post_count, 2);
        assert_eq!(friend_count(&store, 1), 2);
        assert_eq!(friend_count(&store, 42), 0);
    }

    #[test]
    fn test_feed_entry_json_shape() {
        let store = sample_store();
        let entry = &user_posts(&store, 1)[0];
        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(json["authorId"], 1);
        assert_eq!(json["authorName"], "Mia1");
        assert_eq!(json["id"], 5);
    }
}
