//! Error types for preq

use crate::create::Field;
use thiserror::Error;

/// Result alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while resolving, validating or submitting a pull request
#[derive(Debug, Error)]
pub enum Error {
    /// A required parameter is still empty after resolution
    #[error("{0} is missing")]
    MissingField(Field),

    /// Repository is not of the form `owner/name`
    #[error("repository must be in the form of 'owner/repo'")]
    MalformedRepository(String),

    /// Provider is not part of the supported enumeration
    #[error("unknown repository provider: {0}")]
    InvalidProvider(String),

    /// Only one of `--provider` / `--repository` was given
    #[error("must specify both provider and repository, or none")]
    CoupledFlagViolation,

    /// Reading repository state through git failed
    #[error("git: {0}")]
    Introspection(String),

    /// An interactive prompt failed or was aborted
    #[error("prompt failed: {0}")]
    Prompt(String),

    /// No usable credentials for the provider
    #[error("authentication error: {0}")]
    Auth(String),

    /// GitHub API error
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    /// GitLab API error
    #[error("GitLab API error: {0}")]
    GitLabApi(String),

    /// Bitbucket API error
    #[error("Bitbucket API error: {0}")]
    BitbucketApi(String),

    /// Generic platform failure
    #[error("platform error: {0}")]
    Platform(String),

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl From<octocrab::Error> for Error {
    fn from(err: octocrab::Error) -> Self {
        Self::GitHubApi(err.to_string())
    }
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Self::Prompt(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        assert_eq!(
            Error::MissingField(Field::Source).to_string(),
            "source is missing"
        );
        assert_eq!(
            Error::MissingField(Field::Destination).to_string(),
            "destination is missing"
        );
    }

    #[test]
    fn test_coupled_flag_message() {
        assert_eq!(
            Error::CoupledFlagViolation.to_string(),
            "must specify both provider and repository, or none"
        );
    }
}
