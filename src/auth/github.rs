//! GitHub authentication

use crate::auth::{cli_token, first_env, non_empty_env};
use crate::error::{Error, Result};
use tracing::debug;

/// Host of public GitHub
pub const GITHUB_COM_HOST: &str = "github.com";

/// GitHub authentication configuration
#[derive(Debug, Clone)]
pub struct GitHubAuthConfig {
    /// Authentication token
    pub token: String,
    /// GitHub Enterprise host (None for github.com)
    pub host: Option<String>,
}

/// Get GitHub authentication for `host`
///
/// `host` is where the repository lives; without one, `GH_HOST` is used.
///
/// Priority:
/// 1. gh CLI (`gh auth token`)
/// 2. `GITHUB_TOKEN` environment variable
/// 3. `GH_TOKEN` environment variable
pub async fn get_github_auth(host: Option<&str>) -> Result<GitHubAuthConfig> {
    let host = enterprise_host(host, non_empty_env);

    let mut args = vec!["auth", "token"];
    if let Some(h) = &host {
        args.extend(["--hostname", h.as_str()]);
    }

    let token = if let Some(token) = cli_token("gh", &args).await {
        debug!(host = host.as_deref().unwrap_or(GITHUB_COM_HOST), "using token from gh");
        token
    } else if let Some((var, token)) = first_env(&non_empty_env, &["GITHUB_TOKEN", "GH_TOKEN"]) {
        debug!(var, "using GitHub token from environment");
        token
    } else {
        return Err(Error::Auth(
            "No GitHub authentication found. Run `gh auth login` or set GITHUB_TOKEN".to_string(),
        ));
    };

    Ok(GitHubAuthConfig { token, host })
}

/// Enterprise host to talk to; `None` means github.com
fn enterprise_host(
    remote_host: Option<&str>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Option<String> {
    remote_host
        .map(String::from)
        .or_else(|| lookup("GH_HOST"))
        .filter(|h| h != GITHUB_COM_HOST)
}
