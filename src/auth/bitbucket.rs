//! Bitbucket Cloud authentication

use crate::auth::non_empty_env;
use crate::error::{Error, Result};
use std::fmt;
use tracing::debug;

/// Credentials accepted by the Bitbucket Cloud API
#[derive(Clone, PartialEq, Eq)]
pub enum BitbucketCredentials {
    /// Repository, project or workspace access token (bearer)
    Token(String),
    /// Username with an app password (basic auth)
    AppPassword {
        /// Bitbucket username
        username: String,
        /// App password
        password: String,
    },
}

impl fmt::Debug for BitbucketCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(_) => f.write_str("Token(***)"),
            Self::AppPassword { username, .. } => f
                .debug_struct("AppPassword")
                .field("username", username)
                .field("password", &"***")
                .finish(),
        }
    }
}

/// Bitbucket authentication configuration
#[derive(Debug, Clone)]
pub struct BitbucketAuthConfig {
    /// Credentials to send
    pub credentials: BitbucketCredentials,
}

/// Get Bitbucket Cloud authentication
///
/// Priority:
/// 1. `BITBUCKET_TOKEN` environment variable
/// 2. `BITBUCKET_USERNAME` + `BITBUCKET_APP_PASSWORD` environment variables
pub fn get_bitbucket_auth() -> Result<BitbucketAuthConfig> {
    resolve_bitbucket_auth(non_empty_env)
}

fn resolve_bitbucket_auth(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<BitbucketAuthConfig> {
    if let Some(token) = lookup("BITBUCKET_TOKEN") {
        debug!("using BITBUCKET_TOKEN");
        return Ok(BitbucketAuthConfig {
            credentials: BitbucketCredentials::Token(token),
        });
    }

    if let (Some(username), Some(password)) = (
        lookup("BITBUCKET_USERNAME"),
        lookup("BITBUCKET_APP_PASSWORD"),
    ) {
        debug!(%username, "using Bitbucket app password");
        return Ok(BitbucketAuthConfig {
            credentials: BitbucketCredentials::AppPassword { username, password },
        });
    }

    Err(Error::Auth(
        "No Bitbucket authentication found. Set BITBUCKET_TOKEN, or BITBUCKET_USERNAME and BITBUCKET_APP_PASSWORD".to_string(),
    ))
}
