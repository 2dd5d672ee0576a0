//! Best-effort defaults from the local repository

use crate::create::ParameterSet;
use crate::git::{DESTINATION_PRIORITY, GitIntrospector};
use crate::types::RepositoryReference;
use tracing::debug;

/// Fill `params` from repository state
///
/// Each field is looked up on its own; a failed lookup leaves that field
/// untouched and is never reported as an error. The detected remote is
/// returned so its host can follow the repository through validation.
pub async fn resolve_defaults(
    git: &dyn GitIntrospector,
    params: &mut ParameterSet,
) -> Option<RepositoryReference> {
    match git.current_branch().await {
        Ok(branch) => params.source = branch,
        Err(e) => debug!(error = %e, "no default source branch"),
    }

    match git.closest_branch(&DESTINATION_PRIORITY).await {
        Ok(branch) => params.destination = branch,
        Err(e) => debug!(error = %e, "no default destination branch"),
    }

    match git.current_commit_message().await {
        Ok(message) => params.title = message,
        Err(e) => debug!(error = %e, "no default title"),
    }

    match git.remote_info().await {
        Ok(remote) => {
            params.repository = remote.full_name();
            params.provider = remote.provider.to_string();
            Some(remote)
        }
        Err(e) => {
            debug!(error = %e, "no default repository");
            None
        }
    }
}
