//! Platform services for Bitbucket Cloud, GitHub and GitLab
//!
//! Provides a unified interface for pull request creation across providers.

mod bitbucket;
mod detection;
mod factory;
mod github;
mod gitlab;

pub use bitbucket::BitbucketService;
pub use detection::{detect_provider, parse_repo_info};
pub use factory::create_platform_service;
pub use github::GitHubService;
pub use gitlab::GitLabService;

use crate::error::Result;
use crate::types::{PullRequest, PullRequestRequest};
use async_trait::async_trait;

/// Platform service trait for PR/MR creation
///
/// This trait abstracts the hosting providers, allowing the create pipeline
/// to dispatch to any of them.
#[async_trait]
pub trait PlatformService: Send + Sync {
    /// Create a new pull request
    async fn create_pull_request(&self, request: &PullRequestRequest) -> Result<PullRequest>;
}
