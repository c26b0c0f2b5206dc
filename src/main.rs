use anyhow::Context;
use socialgraph::{EngineConfig, MemoryStore, PostId, SessionStore, SocialNetwork};
use std::path::Path;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("Socialgraph Engine v{}", socialgraph::version());
    println!("==========================================");
    println!();

    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::load(Path::new(&path))
            .with_context(|| format!("loading configuration from {}", path))?,
        None => EngineConfig::default(),
    };
    let session_key = config.persistence.session_key.clone();
    let mut network = SocialNetwork::new(config).context("opening persistence backend")?;

    // Demo 1: Dataset
    println!("=== Demo 1: Synthetic Dataset ===");
    let started = Instant::now();
    network.ensure_initialized();
    let stats = network.statistics();
    println!("Generated in {:?}", started.elapsed());
    println!("  Users:         {}", stats.user_count);
    println!("  Friendships:   {}", stats.edge_count);
    println!("  Posts:         {}", stats.post_count);
    println!("  Max degree:    {}", stats.max_degree);
    println!("  Avg degree:    {:.2}", stats.average_degree);
    match network.validate() {
        Ok(()) => println!("✓ Friendship relation is symmetric"),
        Err(e) => println!("✗ Invariant violated: {}", e),
    }

    // Demo 2: Mutual friends
    println!("\n=== Demo 2: Mutual Friends ===");
    for check in network.verify_demonstration_pairs() {
        let marker = if check.holds() { "✓" } else { "✗" };
        println!(
            "{} Users {} and {}: {} mutual friends (expected {})",
            marker, check.first, check.second, check.actual, check.expected
        );
    }
    let bfs = network.mutual_friends_bfs(2, 3);
    let dfs = network.mutual_friends_dfs(2, 3);
    println!("  BFS(2, 3): {:?}", bfs);
    println!("  DFS(2, 3): {:?}", dfs);

    // Demo 3: Suggestions
    println!("\n=== Demo 3: Friend Suggestions for user 2 ===");
    for suggestion in network.suggest_friends_bfs(2, 5) {
        let name = network.user(suggestion.user).map(|u| u.name).unwrap_or_default();
        println!("  {} ({} mutual)", name, suggestion.mutual_count);
    }

    // Demo 4: Trending and search
    println!("\n=== Demo 4: Trending Posts ===");
    for post in network.top_k_posts(5) {
        println!(
            "  #{} by user {}: {:?} (score {})",
            post.id.as_u64(),
            post.author_id,
            post.content,
            post.trending_score()
        );
    }
    let matches = network.search_users_by_name("kate");
    println!("\nSearch \"kate\": {} results", matches.len());

    // Demo 5: Mutations and session
    println!("\n=== Demo 5: Mutations ===");
    let session = SessionStore::new(MemoryStore::new(), session_key);
    let next_id = stats.user_count as u64 + 1;
    network.add_user(next_id, "Nova")?;
    network.add_friendship(next_id, 2)?;
    if let Some(user) = network.user(next_id) {
        session.login(&user)?;
    }
    if let Some(current) = session.current_user()? {
        let post = network.create_post(current.id, "Hello from the engine!")?;
        network.like_post(post)?;
        println!("✓ {} joined, befriended user 2 and published post #{}", current.name, post.as_u64());
        println!("  Feed of user 2 starts with: {:?}", network.friend_feed(2).first().map(|e| &e.post.content));
    }
    if let Err(e) = network.like_post(PostId(0)) {
        println!("✓ Rejected: {}", e);
    }
    session.logout()?;

    Ok(())
}
