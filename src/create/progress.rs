//! Progress callback trait for interface-agnostic updates
//!
//! This trait allows different interfaces to follow the create pipeline
//! without the pipeline knowing how anything is displayed.

use crate::types::PullRequest;
use async_trait::async_trait;
use std::fmt;

/// Pipeline phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Reading defaults from the repository
    ResolvingDefaults,
    /// Applying command-line flags
    ApplyingFlags,
    /// Asking the user
    Prompting,
    /// Checking the final parameters
    Validating,
    /// Calling the provider
    Creating,
    /// Pull request created
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::ResolvingDefaults => "Reading repository",
            Self::ApplyingFlags => "Applying flags",
            Self::Prompting => "Prompting",
            Self::Validating => "Validating",
            Self::Creating => "Creating pull request",
            Self::Complete => "Done",
        };
        f.write_str(s)
    }
}

/// Progress callback trait
#[async_trait]
pub trait ProgressCallback: Send + Sync {
    /// Called when entering a new phase
    async fn on_phase(&self, phase: Phase);

    /// Called once the provider has created the pull request
    async fn on_created(&self, pr: &PullRequest);
}

/// No-op progress callback for testing or when progress isn't needed
pub struct NoopProgress;

#[async_trait]
impl ProgressCallback for NoopProgress {
    async fn on_phase(&self, _phase: Phase) {}
    async fn on_created(&self, _pr: &PullRequest) {}
}
