//! Engine configuration
//!
//! Every section has defaults that reproduce the reference dataset and query
//! caps, so an empty document is a valid configuration.
//!
//! # Example Configuration
//!
//! ```yaml
//! generator:
//!   seed: 12345
//!   user_count: 20000
//! limits:
//!   mutual_scan_limit: 700
//!   suggestion:
//!     max_visited: 7000
//!   search:
//!     max_results: 40
//! persistence:
//!   backend:
//!     kind: file
//!     directory: ./socialgraph_data
//! ```

use crate::generator::GeneratorConfig;
use crate::query::SearchLimits;
use serde::{Deserialize, Serialize};
use socialgraph_algorithms::{PairSampleLimits, PairScanLimits, SuggestionLimits, MUTUAL_SCAN_LIMIT};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub generator: GeneratorConfig,
    pub limits: QueryLimits,
    pub persistence: PersistenceConfig,
}

impl EngineConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: EngineConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Save configuration to a YAML file
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let generator = &self.generator;
        if !(0.0..=1.0).contains(&generator.cluster_link_probability) {
            return Err(ConfigError::Invalid(format!(
                "cluster_link_probability must be within [0, 1], got {}",
                generator.cluster_link_probability
            )));
        }
        if generator.cluster_size == 0 {
            return Err(ConfigError::Invalid("cluster_size must be positive".to_string()));
        }
        if let PersistenceBackend::File { directory } = &self.persistence.backend {
            if directory.as_os_str().is_empty() {
                return Err(ConfigError::Invalid("persistence directory is empty".to_string()));
            }
        }
        Ok(())
    }
}

/// Caps on query work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryLimits {
    /// Candidates inspected per mutual-friend computation
    pub mutual_scan_limit: usize,
    pub suggestion: SuggestionLimits,
    pub search: SearchLimits,
    pub pair_scan: PairScanLimits,
    pub pair_sample: PairSampleLimits,
}

impl Default for QueryLimits {
    fn default() -> Self {
        Self {
            mutual_scan_limit: MUTUAL_SCAN_LIMIT,
            suggestion: SuggestionLimits::default(),
            search: SearchLimits::default(),
            pair_scan: PairScanLimits::default(),
            pair_sample: PairSampleLimits::default(),
        }
    }
}

/// Where snapshots and the session live
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PersistenceBackend {
    /// Nothing is saved or loaded
    #[default]
    Disabled,
    /// Process-local key-value store
    Memory,
    /// One JSON file per key under `directory`
    File { directory: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistenceConfig {
    pub backend: PersistenceBackend,
    pub friendships_key: String,
    pub posts_key: String,
    pub session_key: String,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            backend: PersistenceBackend::Disabled,
            friendships_key: "socialNetworkFriendships".to_string(),
            posts_key: "socialNetworkPosts".to_string(),
            session_key: "currentUser".to_string(),
        }
    }
}
