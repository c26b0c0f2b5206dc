//! Deterministic synthetic social graph
//!
//! Populates an empty [`SocialStore`] with users, clustered friendships and
//! posts. Every random choice comes from one [`Lcg`] stream, consumed in a
//! fixed order, so a seed always yields the same graph.
//!
//! Phases:
//! 1. users `1..=user_count`, named from [`seed_data::NAMES`], indexed as created
//! 2. demonstration friendships among ids `1..=15`
//! 3. dense intra-cluster friendships
//! 4. a few links between every pair of clusters
//! 5. uniformly random fill up to the target edge count
//! 6. posts for every user

pub mod rng;
pub mod seed_data;

pub use rng::{Lcg, DEFAULT_SEED};

use crate::graph::{GraphResult, Post, PostId, SocialStore, User, UserId};
use serde::{Deserialize, Serialize};
use socialgraph_algorithms::{mutual_friends_bfs, MUTUAL_SCAN_LIMIT};
use seed_data::{demonstration_friendships, CONTENTS, DEMONSTRATION_PAIRS, NAMES, SEALED_BLOCK};
use tracing::{debug, info, warn};

/// Generation parameters; the defaults reproduce the reference dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub seed: u64,
    pub user_count: u64,
    pub cluster_count: u64,
    pub cluster_size: u64,
    /// Probability of a friendship between two members of a cluster
    pub cluster_link_probability: f64,
    /// Cluster and cross-cluster phases stop adding edges at this count
    pub cluster_edge_cap: usize,
    /// Cross-cluster links per cluster pair: `min + below(spread)`
    pub cross_links_min: u64,
    pub cross_links_spread: u64,
    /// Random fill stops at this many edges...
    pub target_edges: usize,
    /// ...or after this many attempts
    pub max_fill_attempts: usize,
    pub posts_per_user: usize,
    pub max_likes: u64,
    pub max_shares: u64,
    /// Install the demonstration friendships and seal ids `1..=15`
    pub demonstration: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            user_count: 20_000,
            cluster_count: 50,
            cluster_size: 100,
            cluster_link_probability: 0.3,
            cluster_edge_cap: 150_000,
            cross_links_min: 3,
            cross_links_spread: 5,
            target_edges: 200_000,
            max_fill_attempts: 300_000,
            posts_per_user: 3,
            max_likes: 500,
            max_shares: 200,
            demonstration: true,
        }
    }
}

/// Edge counts per phase, as reported by [`populate`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub users: usize,
    pub demonstration_edges: usize,
    pub cluster_edges: usize,
    pub cross_cluster_edges: usize,
    pub fill_edges: usize,
    pub fill_attempts: usize,
    pub posts: usize,
}

impl GenerationReport {
    pub fn total_edges(&self) -> usize {
        self.demonstration_edges + self.cluster_edges + self.cross_cluster_edges + self.fill_edges
    }
}

/// Outcome of checking one demonstration pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairCheck {
    pub first: UserId,
    pub second: UserId,
    pub expected: usize,
    pub actual: usize,
}

impl PairCheck {
    pub fn holds(&self) -> bool {
        self.expected == self.actual
    }
}

/// Fill `store` with the synthetic graph
///
/// Returns `Ok(None)` without touching the store if it is already
/// initialized. The store is marked initialized on success.
pub fn populate(
    store: &mut SocialStore,
    config: &GeneratorConfig,
) -> GraphResult<Option<GenerationReport>> {
    if store.is_initialized() {
        debug!("Store already initialized, skipping generation");
        return Ok(None);
    }

    let mut generator = Generator {
        store,
        config,
        rng: Lcg::new(config.seed),
        sealed: if config.demonstration && config.user_count >= SEALED_BLOCK {
            SEALED_BLOCK
        } else {
            0
        },
    };
    let report = generator.run()?;
    store.mark_initialized();

    info!(
        "Generated {} users, {} friendships, {} posts",
        report.users,
        store.edge_count(),
        report.posts
    );
    Ok(Some(report))
}

/// Mutual-friend counts of the demonstration pairs
pub fn verify_demonstration_pairs(store: &SocialStore) -> Vec<PairCheck> {
    DEMONSTRATION_PAIRS
        .iter()
        .map(|&(first, second, expected)| {
            let actual = mutual_friends_bfs(store, first, second, MUTUAL_SCAN_LIMIT).len();
            let check = PairCheck {
                first,
                second,
                expected,
                actual,
            };
            if check.holds() {
                info!("Users {} and {}: {} mutual friends", first, second, actual);
            } else {
                warn!(
                    "Users {} and {}: expected {} mutual friends, found {}",
                    first, second, expected, actual
                );
            }
            check
        })
        .collect()
}

struct Generator<'a> {
    store: &'a mut SocialStore,
    config: &'a GeneratorConfig,
    rng: Lcg,
    /// Highest sealed id, 0 when nothing is sealed
    sealed: UserId,
}

impl Generator<'_> {
    fn run(&mut self) -> GraphResult<GenerationReport> {
        let mut report = GenerationReport {
            users: self.create_users()?,
            ..GenerationReport::default()
        };

        report.demonstration_edges = self.install_demonstration();
        report.cluster_edges = self.link_clusters();
        report.cross_cluster_edges = self.link_across_clusters();
        let (fill_edges, fill_attempts) = self.fill_random();
        report.fill_edges = fill_edges;
        report.fill_attempts = fill_attempts;
        report.posts = self.create_posts()?;

        Ok(report)
    }

    fn is_sealed(&self, user: UserId) -> bool {
        user <= self.sealed
    }

    fn link(&mut self, a: UserId, b: UserId) -> bool {
        !self.is_sealed(a) && !self.is_sealed(b) && self.store.link_if_absent(a, b)
    }

    fn create_users(&mut self) -> GraphResult<usize> {
        for id in 1..=self.config.user_count {
            let name = NAMES[self.rng.below(NAMES.len() as u64) as usize];
            self.store.insert_user(User::new(id, format!("{}{}", name, id)))?;
        }
        debug!("Created {} users", self.config.user_count);
        Ok(self.config.user_count as usize)
    }

    fn install_demonstration(&mut self) -> usize {
        if self.sealed == 0 {
            return 0;
        }
        let created = demonstration_friendships()
            .into_iter()
            .filter(|&(a, b)| self.store.link_if_absent(a, b))
            .count();
        debug!("Installed {} demonstration friendships", created);
        created
    }

    fn link_clusters(&mut self) -> usize {
        let before = self.store.edge_count();
        let size = self.config.cluster_size;

        for cluster in 0..self.config.cluster_count {
            let start = cluster * size + 1;
            if start > self.config.user_count {
                break;
            }
            let end = (start + size - 1).min(self.config.user_count);

            for i in start..=end {
                for j in (i + 1)..=end {
                    let draw = self.rng.next_f64();
                    if draw < self.config.cluster_link_probability
                        && self.store.edge_count() < self.config.cluster_edge_cap
                    {
                        self.link(i, j);
                    }
                }
            }
        }

        let created = self.store.edge_count() - before;
        debug!("Cluster phase added {} friendships", created);
        created
    }

    fn link_across_clusters(&mut self) -> usize {
        let before = self.store.edge_count();
        let size = self.config.cluster_size;
        let clusters = self.config.cluster_count;

        for c1 in 0..clusters {
            for c2 in (c1 + 1)..clusters {
                let connections = self.rng.below(self.config.cross_links_spread) + self.config.cross_links_min;
                for _ in 0..connections {
                    let u1 = c1 * size + self.rng.below(size) + 1;
                    let u2 = c2 * size + self.rng.below(size) + 1;
                    if self.store.edge_count() < self.config.cluster_edge_cap {
                        self.link(u1, u2);
                    }
                }
            }
        }

        let created = self.store.edge_count() - before;
        debug!("Cross-cluster phase added {} friendships", created);
        created
    }

    fn fill_random(&mut self) -> (usize, usize) {
        let before = self.store.edge_count();
        let users = self.config.user_count;
        let mut attempts = 0;

        while self.store.edge_count() < self.config.target_edges
            && attempts < self.config.max_fill_attempts
        {
            let u1 = self.rng.below(users) + 1;
            let u2 = self.rng.below(users) + 1;
            self.link(u1, u2);
            attempts += 1;
        }

        let created = self.store.edge_count() - before;
        debug!(
            "Random fill added {} friendships in {} attempts",
            created, attempts
        );
        (created, attempts)
    }

    fn create_posts(&mut self) -> GraphResult<usize> {
        let mut next_id = 1;
        for author in 1..=self.config.user_count {
            for _ in 0..self.config.posts_per_user {
                let content = CONTENTS[self.rng.below(CONTENTS.len() as u64) as usize];
                let likes = self.rng.below(self.config.max_likes);
                let shares = self.rng.below(self.config.max_shares);

                self.store.insert_post(Post {
                    id: PostId(next_id),
                    author_id: author,
                    content: content.to_string(),
                    likes,
                    shares,
                })?;
                next_id += 1;
            }
        }
        Ok((next_id - 1) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> GeneratorConfig {
        GeneratorConfig {
            user_count: 400,
            cluster_count: 4,
            cluster_edge_cap: 3_000,
            target_edges: 4_000,
            max_fill_attempts: 10_000,
            ..GeneratorConfig::default()
        }
    }

    #[test]
    fn test_small_graph_is_consistent() {
        let mut store = SocialStore::new();
        let report = populate(&mut store, &small_config()).unwrap().unwrap();

        assert!(store.is_initialized());
        assert_eq!(store.user_count(), 400);
        assert_eq!(store.post_count(), 1_200);
        assert_eq!(report.total_edges(), store.edge_count());
        assert_eq!(report.demonstration_edges, 45);
        assert!(store.validate().is_ok());
    }

    #[test]
    fn test_sealed_block_keeps_demonstration_counts() {
        let mut store = SocialStore::new();
        populate(&mut store, &small_config()).unwrap();

        for check in verify_demonstration_pairs(&store) {
            assert!(check.holds(), "{:?}", check);
        }
        // Sealed users only have demonstration friends
        assert_eq!(store.degree(1), 7);
        assert!(store.friends(15).unwrap().iter().all(|&f| f <= SEALED_BLOCK));
    }

    #[test]
    fn test_second_populate_is_noop() {
        let mut store = SocialStore::new();
        populate(&mut store, &small_config()).unwrap();
        let edges = store.edge_count();

        assert!(populate(&mut store, &small_config()).unwrap().is_none());
        assert_eq!(store.edge_count(), edges);
        assert_eq!(store.user_count(), 400);
    }

    #[test]
    fn test_same_seed_same_graph() {
        let mut a = SocialStore::new();
        let mut b = SocialStore::new();
        populate(&mut a, &small_config()).unwrap();
        populate(&mut b, &small_config()).unwrap();

        for id in [1, 16, 123, 400] {
            let fa: Vec<UserId> = a.friends(id).unwrap().iter().copied().collect();
            let fb: Vec<UserId> = b.friends(id).unwrap().iter().copied().collect();
            assert_eq!(fa, fb);
        }
        assert_eq!(a.get_post(PostId(7)), b.get_post(PostId(7)));
    }

    #[test]
    fn test_without_demonstration() {
        let config = GeneratorConfig {
            user_count: 10,
            cluster_count: 1,
            cluster_size: 10,
            cluster_link_probability: 1.0,
            target_edges: 45,
            demonstration: false,
            posts_per_user: 1,
            ..GeneratorConfig::default()
        };
        let mut store = SocialStore::new();
        let report = populate(&mut store, &config).unwrap().unwrap();

        // Complete graph on 10 users
        assert_eq!(report.demonstration_edges, 0);
        assert_eq!(report.cluster_edges, 45);
        assert_eq!(report.fill_attempts, 0);
        assert_eq!(store.degree(1), 9);
    }
}
