//! Core types for preq

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Git hosting provider
///
/// This is the closed set of providers a pull request can be submitted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Provider {
    /// bitbucket.org
    BitbucketCloud,
    /// GitHub or GitHub Enterprise
    #[serde(rename = "github")]
    GitHub,
    /// GitLab or self-hosted GitLab
    #[serde(rename = "gitlab")]
    GitLab,
}

impl Provider {
    /// Every supported provider, in prompt order
    pub const ALL: [Self; 3] = [Self::BitbucketCloud, Self::GitHub, Self::GitLab];

    /// Identifier used on the command line and in prompts
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BitbucketCloud => "bitbucket-cloud",
            Self::GitHub => "github",
            Self::GitLab => "gitlab",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| Error::InvalidProvider(s.to_string()))
    }
}

/// A hosted repository under a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryReference {
    /// Hosting provider
    pub provider: Provider,
    /// Repository owner (user, organization or workspace)
    pub owner: String,
    /// Repository name
    pub name: String,
    /// Host the repository was found on; `None` means the provider's
    /// configured default
    pub host: Option<String>,
}

impl RepositoryReference {
    /// `owner/name` form
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Same provider, owner and name, regardless of host
    pub fn same_repository(&self, other: &Self) -> bool {
        self.provider == other.provider && self.owner == other.owner && self.name == other.name
    }
}

/// Outbound pull request creation request
///
/// Built once from a validated parameter set, passed to the provider, then
/// discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRequest {
    /// Target repository
    pub repository: RepositoryReference,
    /// Source branch
    pub source: String,
    /// Destination branch
    pub destination: String,
    /// Effective title, including any work-in-progress prefix
    pub title: String,
    /// Optional body
    pub description: Option<String>,
    /// Close the source branch once merged
    pub close_branch: bool,
}

/// A pull request as returned by the provider after creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    /// PR/MR number
    pub number: u64,
    /// Web URL for the PR/MR
    pub url: String,
    /// Source branch name
    pub source: String,
    /// Destination branch name
    pub destination: String,
    /// PR/MR title
    pub title: String,
}
