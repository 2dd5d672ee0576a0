//! Building and sending the pull request

use crate::create::ValidatedParameters;
use crate::error::Result;
use crate::platform::PlatformService;
use crate::types::{PullRequest, PullRequestRequest};
use tracing::debug;

/// Prefix marking a work-in-progress title
pub const WIP_PREFIX: &str = "[WIP] ";

/// Title as it will be sent
pub fn effective_title(title: &str, work_in_progress: bool) -> String {
    if work_in_progress {
        format!("{WIP_PREFIX}{title}")
    } else {
        title.to_string()
    }
}

/// Build the outbound request from validated parameters
pub fn build_request(validated: ValidatedParameters) -> PullRequestRequest {
    let (params, repository) = validated.into_parts();

    PullRequestRequest {
        repository,
        title: effective_title(&params.title, params.work_in_progress),
        description: Some(params.description).filter(|d| !d.is_empty()),
        source: params.source,
        destination: params.destination,
        close_branch: params.close_branch,
    }
}

/// Submit the request to the provider
///
/// Provider errors are returned as-is; nothing is retried.
pub async fn dispatch(
    request: &PullRequestRequest,
    platform: &dyn PlatformService,
) -> Result<PullRequest> {
    debug!(
        repository = %request.repository.full_name(),
        provider = %request.repository.provider,
        source = %request.source,
        destination = %request.destination,
        "creating pull request"
    );

    platform.create_pull_request(request).await
}
