//! Authentication for Bitbucket Cloud, GitHub and GitLab
//!
//! Tokens come from the provider's CLI (gh, glab) or from environment
//! variables. Where a token was found is logged at `debug`.

mod bitbucket;
mod github;
mod gitlab;

pub use bitbucket::{BitbucketAuthConfig, BitbucketCredentials, get_bitbucket_auth};
pub use github::{GITHUB_COM_HOST, GitHubAuthConfig, get_github_auth};
pub use gitlab::{GITLAB_COM_HOST, GitLabAuthConfig, get_gitlab_auth};

use tokio::process::Command;
use tracing::debug;

/// Read a non-empty environment variable
fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// First variable in `names` with a value, paired with its name
fn first_env<'a>(
    lookup: &impl Fn(&str) -> Option<String>,
    names: &[&'a str],
) -> Option<(&'a str, String)> {
    names
        .iter()
        .find_map(|&name| lookup(name).map(|value| (name, value)))
}

/// Token printed by a provider CLI, if it is installed and logged in
async fn cli_token(program: &str, args: &[&str]) -> Option<String> {
    let output = match Command::new(program).args(args).output().await {
        Ok(output) => output,
        Err(e) => {
            debug!(program, error = %e, "provider CLI not available");
            return None;
        }
    };

    if !output.status.success() {
        debug!(program, status = %output.status, "provider CLI has no token");
        return None;
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!token.is_empty()).then_some(token)
}
