//! Git repository introspection
//!
//! The create pipeline only reads from git; all access goes through the
//! [`GitIntrospector`] trait so tests can supply canned answers.

mod cli;

pub use cli::GitCli;

use crate::error::Result;
use crate::types::RepositoryReference;
use async_trait::async_trait;

/// Branches considered as destination, in priority order
pub const DESTINATION_PRIORITY: [&str; 2] = ["master", "develop"];

/// Read-only view of the local git repository
#[async_trait]
pub trait GitIntrospector: Send + Sync {
    /// Name of the checked-out branch
    async fn current_branch(&self) -> Result<String>;

    /// First branch of `priority` that exists in the repository
    ///
    /// "Closest" means first present in priority order, not graph distance.
    async fn closest_branch(&self, priority: &[&str]) -> Result<String>;

    /// Message of the most recent commit on the current branch
    async fn current_commit_message(&self) -> Result<String>;

    /// Provider, owner and name of the repository's remote
    async fn remote_info(&self) -> Result<RepositoryReference>;
}
