//! GitLab authentication

use crate::auth::{cli_token, first_env, non_empty_env};
use crate::error::{Error, Result};
use tracing::debug;

/// Host of gitlab.com
pub const GITLAB_COM_HOST: &str = "gitlab.com";

/// GitLab authentication configuration
#[derive(Debug, Clone)]
pub struct GitLabAuthConfig {
    /// Authentication token
    pub token: String,
    /// Instance the token belongs to
    pub host: String,
}

/// Get GitLab authentication for `host`
///
/// `host` is where the repository lives; without one, `GITLAB_HOST` or
/// gitlab.com is used.
///
/// Priority:
/// 1. glab CLI (`glab auth token`)
/// 2. `GITLAB_TOKEN` environment variable
/// 3. `GL_TOKEN` environment variable
pub async fn get_gitlab_auth(host: Option<&str>) -> Result<GitLabAuthConfig> {
    let host = instance_host(host, non_empty_env);

    let from_cli = cli_token("glab", &["auth", "token", "--hostname", host.as_str()]).await;

    let token = if let Some(token) = from_cli {
        debug!(%host, "using token from glab");
        token
    } else if let Some((var, token)) = first_env(&non_empty_env, &["GITLAB_TOKEN", "GL_TOKEN"]) {
        debug!(var, %host, "using GitLab token from environment");
        token
    } else {
        return Err(Error::Auth(format!(
            "No GitLab authentication found for {host}. Run `glab auth login` or set GITLAB_TOKEN"
        )));
    };

    Ok(GitLabAuthConfig { token, host })
}

fn instance_host(remote_host: Option<&str>, lookup: impl Fn(&str) -> Option<String>) -> String {
    remote_host
        .map(String::from)
        .or_else(|| lookup("GITLAB_HOST"))
        .unwrap_or_else(|| GITLAB_COM_HOST.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_host_wins_over_gitlab_host() {
        let host = instance_host(Some("code.gitlab.com"), |_| {
            Some("gitlab.internal".to_string())
        });
        assert_eq!(host, "code.gitlab.com");
    }

    #[test]
    fn test_gitlab_host_then_default() {
        assert_eq!(
            instance_host(None, |_| Some("gitlab.internal".to_string())),
            "gitlab.internal"
        );
        assert_eq!(instance_host(None, |_| None), GITLAB_COM_HOST);
    }
}
