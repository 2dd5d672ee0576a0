//! Test data factories for preq types

use preq::create::{FlagValues, ParameterSet};
use preq::types::{Provider, PullRequestRequest, RepositoryReference};

/// Repository used throughout the scenarios
pub fn acme_widgets() -> RepositoryReference {
    RepositoryReference {
        provider: Provider::BitbucketCloud,
        owner: "acme".to_string(),
        name: "widgets".to_string(),
        host: None,
    }
}

/// A fully populated parameter set
pub fn complete_params() -> ParameterSet {
    ParameterSet {
        provider: "bitbucket-cloud".to_string(),
        repository: "acme/widgets".to_string(),
        source: "feature-x".to_string(),
        destination: "develop".to_string(),
        title: "Add feature".to_string(),
        ..ParameterSet::default()
    }
}

/// A request as the dispatcher would build it
pub fn make_request(title: &str) -> PullRequestRequest {
    PullRequestRequest {
        repository: acme_widgets(),
        source: "feature-x".to_string(),
        destination: "develop".to_string(),
        title: title.to_string(),
        description: None,
        close_branch: true,
    }
}

/// Flags supplying both repository and provider
pub fn repo_flags(repository: &str, provider: &str) -> FlagValues {
    FlagValues {
        repository: Some(repository.to_string()),
        provider: Some(provider.to_string()),
        ..FlagValues::default()
    }
}
