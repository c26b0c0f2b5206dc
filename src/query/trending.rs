//! Trending posts

use crate::graph::{Post, SocialStore};
use socialgraph_algorithms::top_k_by_score;

/// The `k` posts with the highest `likes + 2 * shares`
///
/// Length is `min(k, post count)`; equal scores keep post insertion order.
pub fn top_k_posts(store: &SocialStore, k: usize) -> Vec<Post> {
    top_k_by_score(store.posts(), k, |post| post.trending_score())
        .into_iter()
        .map(|scored| scored.item.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{PostId, User};

    #[test]
    fn test_ranking_and_ties() {
        let mut store = SocialStore::new();
        store.insert_user(User::new(1, "Alice1")).unwrap();
        for (id, likes, shares) in [(1, 10, 0), (2, 0, 10), (3, 4, 3), (4, 20, 0)] {
            let mut post = Post::new(PostId(id), 1, "x");
            post.likes = likes;
            post.shares = shares;
            store.insert_post(post).unwrap();
        }

        let top: Vec<u64> = top_k_posts(&store, 3).iter().map(|p| p.id.as_u64()).collect();
        // Posts 2 and 4 both score 20
        assert_eq!(top, vec![2, 4, 1]);
        assert_eq!(top_k_posts(&store, 10).len(), 4);
        assert!(top_k_posts(&store, 0).is_empty());
    }
}
