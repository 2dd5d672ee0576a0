//! Scripted git introspector for testing

use async_trait::async_trait;
use preq::error::{Error, Result};
use preq::git::GitIntrospector;
use preq::types::RepositoryReference;
use std::sync::Mutex;

/// Introspector answering from fixed values
///
/// A `None` facet fails the way a repository without that context would.
#[derive(Default)]
pub struct MockGit {
    pub current_branch: Option<String>,
    /// Branches that exist; `closest_branch` picks from these
    pub branches: Vec<String>,
    pub commit_message: Option<String>,
    pub remote: Option<RepositoryReference>,
    pub closest_calls: Mutex<Vec<Vec<String>>>,
}

impl MockGit {
    /// A repository with no usable context at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// Scenario repository: feature-x off develop, remote acme/widgets on Bitbucket
    pub fn scenario() -> Self {
        Self {
            current_branch: Some("feature-x".to_string()),
            branches: vec!["develop".to_string(), "feature-x".to_string()],
            commit_message: Some("Add feature".to_string()),
            remote: Some(super::fixtures::acme_widgets()),
            closest_calls: Mutex::new(Vec::new()),
        }
    }

    /// Priority lists `closest_branch` was asked about
    pub fn get_closest_calls(&self) -> Vec<Vec<String>> {
        self.closest_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GitIntrospector for MockGit {
    async fn current_branch(&self) -> Result<String> {
        self.current_branch
            .clone()
            .ok_or_else(|| Error::Introspection("not a git repository".to_string()))
    }

    async fn closest_branch(&self, priority: &[&str]) -> Result<String> {
        self.closest_calls
            .lock()
            .unwrap()
            .push(priority.iter().map(ToString::to_string).collect());

        priority
            .iter()
            .find(|p| self.branches.iter().any(|b| b == **p))
            .map(ToString::to_string)
            .ok_or_else(|| Error::Introspection("no candidate branch".to_string()))
    }

    async fn current_commit_message(&self) -> Result<String> {
        self.commit_message
            .clone()
            .ok_or_else(|| Error::Introspection("no commits".to_string()))
    }

    async fn remote_info(&self) -> Result<RepositoryReference> {
        self.remote
            .clone()
            .ok_or_else(|| Error::Introspection("no remotes configured".to_string()))
    }
}
