use socialgraph::{
    EngineConfig, FileStore, KeyValueStore, PersistenceBackend, PostId, SessionStore,
    SocialNetwork, User,
};
use std::path::Path;

fn file_config(directory: &Path) -> EngineConfig {
    let mut config = EngineConfig::default();
    config.generator.user_count = 800;
    config.generator.cluster_count = 4;
    config.generator.cluster_edge_cap = 4_000;
    config.generator.target_edges = 6_000;
    config.generator.max_fill_attempts = 20_000;
    config.persistence.backend = PersistenceBackend::File {
        directory: directory.to_path_buf(),
    };
    config
}

#[test]
fn test_writes_survive_restart() {
    let dir = tempfile::tempdir().unwrap();

    let (edges, seed_likes) = {
        let mut network = SocialNetwork::new(file_config(dir.path())).unwrap();
        assert!(!network.store().are_friends(2, 500));
        network.add_friendship(2, 500).unwrap();

        let seed_likes = network.post(PostId(1)).unwrap().likes;
        network.like_post(PostId(1)).unwrap();

        let id = network.create_post(500, "Persisted post").unwrap();
        network.like_post(id).unwrap();
        network.like_post(id).unwrap();
        (network.statistics().edge_count, seed_likes)
    };
    assert!(dir.path().join("socialNetworkFriendships.json").exists());
    assert!(dir.path().join("socialNetworkPosts.json").exists());

    let mut network = SocialNetwork::new(file_config(dir.path())).unwrap();
    assert!(network.store().are_friends(2, 500));
    assert!(network.store().are_friends(500, 2));
    assert_eq!(network.statistics().edge_count, edges);
    assert!(network.validate().is_ok());

    // Seed posts are regenerated, user-created posts are restored
    assert_eq!(network.post(PostId(1)).unwrap().likes, seed_likes);
    let restored = network.post(PostId(60_001)).unwrap();
    assert_eq!(restored.author_id, 500);
    assert_eq!(restored.content, "Persisted post");
    assert_eq!(restored.likes, 2);
    assert_eq!(network.create_post(500, "Next").unwrap(), PostId(60_002));
}

#[test]
fn test_new_users_are_not_persisted() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut network = SocialNetwork::new(file_config(dir.path())).unwrap();
        network.add_user(801, "Nova").unwrap();
        network.add_friendship(801, 3).unwrap();
    }

    let mut network = SocialNetwork::new(file_config(dir.path())).unwrap();
    assert!(network.user(801).is_none());
    assert!(!network.store().friends(3).unwrap().contains(&801));
    assert!(network.validate().is_ok());
}

#[test]
fn test_malformed_files_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let baseline = SocialNetwork::new(file_config(dir.path()))
        .unwrap()
        .statistics();

    std::fs::write(dir.path().join("socialNetworkFriendships.json"), "{\"1\": [2,").unwrap();
    std::fs::write(dir.path().join("socialNetworkPosts.json"), "[]").unwrap();

    let mut network = SocialNetwork::new(file_config(dir.path())).unwrap();
    assert_eq!(network.statistics(), baseline);
    assert!(network.validate().is_ok());
    assert_eq!(network.friend_count(1), 7);
}

#[test]
fn test_file_store_keys() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path().join("nested")).unwrap();

    assert_eq!(store.get("missing").unwrap(), None);
    store.put("greeting", "\"hi\"").unwrap();
    assert_eq!(store.get("greeting").unwrap().as_deref(), Some("\"hi\""));
    store.remove("greeting").unwrap();
    assert_eq!(store.get("greeting").unwrap(), None);
    store.remove("greeting").unwrap();

    assert!(store.put("../escape", "x").is_err());
    assert!(store.get("").is_err());
}

#[test]
fn test_session_in_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(dir.path());
    let key = config.persistence.session_key.clone();

    let session = SessionStore::new(FileStore::open(dir.path()).unwrap(), key.clone());
    session.login(&User::new(4, "Diana4")).unwrap();

    let reopened = SessionStore::new(FileStore::open(dir.path()).unwrap(), key);
    assert_eq!(reopened.current_user().unwrap(), Some(User::new(4, "Diana4")));
    reopened.logout().unwrap();
    assert_eq!(session.current_user().unwrap(), None);
    assert!(!dir.path().join("currentUser.json").exists());
}

#[test]
fn test_config_file_selects_backend() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(&dir.path().join("data"));
    let path = dir.path().join("engine.yaml");
    config.save(&path).unwrap();

    let loaded = EngineConfig::load(&path).unwrap();
    assert_eq!(loaded, config);

    let mut network = SocialNetwork::new(loaded).unwrap();
    network.create_post(1, "From a config file").unwrap();
    assert!(dir.path().join("data").join("socialNetworkPosts.json").exists());
}
