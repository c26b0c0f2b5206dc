use socialgraph::{EngineConfig, GraphError, PostId, SocialNetwork};

fn small_network() -> SocialNetwork {
    let mut config = EngineConfig::default();
    config.generator.user_count = 1_000;
    config.generator.cluster_count = 5;
    config.generator.cluster_edge_cap = 5_000;
    config.generator.target_edges = 8_000;
    config.generator.max_fill_attempts = 20_000;
    SocialNetwork::in_memory(config)
}

#[test]
fn test_add_user() {
    let mut network = small_network();
    let before = network.statistics();

    assert_eq!(network.add_user(1, "Nova"), Err(GraphError::UserAlreadyExists(1)));
    assert_eq!(network.user(1).unwrap().name, "Alice1");
    assert!(matches!(network.add_user(0, "Zero"), Err(GraphError::InvalidUser(_))));
    assert!(matches!(network.add_user(1_001, "   "), Err(GraphError::InvalidUser(_))));
    assert_eq!(network.statistics(), before);

    network.add_user(1_001, "Nova").unwrap();
    assert_eq!(network.friend_count(1_001), 0);
    assert!(network.friends_of(1_001).is_empty());
    assert_eq!(network.search_users_by_name("nova")[0].id, 1_001);
    assert_eq!(network.statistics().user_count, 1_001);
}

#[test]
fn test_add_friendship() {
    let mut network = small_network();
    network.add_user(1_001, "Nova").unwrap();
    let edges = network.statistics().edge_count;

    network.add_friendship(1_001, 2).unwrap();
    assert_eq!(network.statistics().edge_count, edges + 1);
    assert!(network.store().are_friends(2, 1_001));
    assert_eq!(network.friend_count(2), 8);

    // Nova now shares user 2 with every other friend of 2
    assert_eq!(network.mutual_friends_bfs(1_001, 1), vec![2]);
    assert_eq!(network.mutual_friends_dfs(1, 1_001), vec![2]);

    assert_eq!(
        network.add_friendship(2, 1_001),
        Err(GraphError::FriendshipAlreadyExists(2, 1_001))
    );
    assert_eq!(network.add_friendship(7, 7), Err(GraphError::SelfFriendship(7)));
    assert_eq!(network.add_friendship(7, 5_000), Err(GraphError::UserNotFound(5_000)));
    assert_eq!(network.statistics().edge_count, edges + 1);
    assert!(network.validate().is_ok());
}

#[test]
fn test_like_and_share() {
    let mut network = small_network();
    let post = network.post(PostId(10)).unwrap();
    let score = post.trending_score();

    assert_eq!(network.like_post(PostId(10)), Ok(post.likes + 1));
    assert_eq!(network.share_post(PostId(10)), Ok(post.shares + 1));
    assert_eq!(network.post(PostId(10)).unwrap().trending_score(), score + 3);

    assert_eq!(
        network.like_post(PostId(3_001)),
        Err(GraphError::PostNotFound(PostId(3_001)))
    );
    assert_eq!(
        network.share_post(PostId(0)),
        Err(GraphError::PostNotFound(PostId(0)))
    );
}

#[test]
fn test_created_posts_reach_feeds() {
    let mut network = small_network();

    let first = network.create_post(2, "Hello!").unwrap();
    let second = network.create_post(2, "Hello again!").unwrap();
    assert_eq!(first, PostId(60_001));
    assert_eq!(second, PostId(60_002));

    let feed = network.friend_feed(1);
    assert_eq!(feed[0].post.id, second);
    assert_eq!(feed[1].post.content, "Hello!");
    assert_eq!(feed[0].author_name, "Alice2");
    assert_eq!(network.user_posts(2)[0].post.id, second);
    assert_eq!(network.friend_posts(1, 2).len(), 5);

    let summary = network
        .friends_of(1)
        .into_iter()
        .find(|summary| summary.user.id == 2)
        .unwrap();
    assert_eq!(summary.post_count, 5);

    assert_eq!(network.statistics().user_created_posts, 2);
    assert_eq!(network.create_post(5_000, "ghost"), Err(GraphError::UserNotFound(5_000)));
}

#[test]
fn test_liked_post_can_trend() {
    let mut network = small_network();
    let id = network.create_post(3, "Going viral").unwrap();
    for _ in 0..500 {
        network.share_post(id).unwrap();
    }
    let top = network.top_k_posts(1);
    assert_eq!(top[0].id, id);
    assert_eq!(top[0].trending_score(), 1_000);
}
