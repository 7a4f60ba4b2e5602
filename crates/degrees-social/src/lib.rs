//! In-memory social graph with symmetric friendships and shortest paths.
//!
//! [`SocialGraph`] stores users keyed by sequential integer ID plus a
//! symmetric friendship adjacency. It supports incremental construction
//! via [`add_user`] / [`add_friendship`], wholesale random population via
//! [`populate`], and breadth-first shortest-path queries from one user to
//! every reachable user via [`all_social_paths`].
//!
//! [`add_user`]: SocialGraph::add_user
//! [`add_friendship`]: SocialGraph::add_friendship
//! [`populate`]: SocialGraph::populate
//! [`all_social_paths`]: SocialGraph::all_social_paths

pub mod error;
pub mod graph;
pub mod populate;
pub mod user;

pub use error::{SocialError, SocialResult};
pub use graph::SocialGraph;
pub use populate::PopulateStrategy;
pub use user::{User, UserId};
