//! Platform service factory
//!
//! Creates platform services based on the target repository.

use crate::auth::{get_bitbucket_auth, get_github_auth, get_gitlab_auth};
use crate::error::Result;
use crate::platform::{BitbucketService, GitHubService, GitLabService, PlatformService};
use crate::types::{Provider, RepositoryReference};
use tracing::debug;

/// Create a platform service for a repository
///
/// Credentials and API endpoints follow the host the repository was found
/// on, falling back to `GH_HOST`/`GITLAB_HOST` and then the public service.
pub async fn create_platform_service(
    repository: &RepositoryReference,
) -> Result<Box<dyn PlatformService>> {
    let host = repository.host.as_deref();
    debug!(provider = %repository.provider, host, "creating platform service");

    match repository.provider {
        Provider::BitbucketCloud => {
            let auth = get_bitbucket_auth()?;
            Ok(Box::new(BitbucketService::new(
                auth.credentials,
                repository.owner.clone(),
                repository.name.clone(),
                None,
            )))
        }
        Provider::GitHub => {
            let auth = get_github_auth(host).await?;
            Ok(Box::new(GitHubService::new(
                &auth.token,
                repository.owner.clone(),
                repository.name.clone(),
                auth.host,
            )?))
        }
        Provider::GitLab => {
            let auth = get_gitlab_auth(host).await?;
            Ok(Box::new(GitLabService::new(
                auth.token,
                repository.owner.clone(),
                repository.name.clone(),
                Some(gitlab_base_url(&auth.host)),
            )))
        }
    }
}

fn gitlab_base_url(host: &str) -> String {
    format!("https://{host}")
}
