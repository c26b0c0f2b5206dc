//! Social graph data model
//!
//! Users, the symmetric friendship relation, posts and the first-letter name
//! index, all held in memory by [`SocialStore`].

pub mod index;
pub mod post;
pub mod store;
pub mod types;
pub mod user;

// Re-export main types
pub use index::NameIndex;
pub use post::{Post, SEED_POST_CEILING};
pub use store::{GraphError, GraphResult, GraphStatistics, SocialStore};
pub use types::{PostId, UserId};
pub use user::User;
