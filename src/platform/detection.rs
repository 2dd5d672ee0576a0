//! Provider detection from remote URLs

use crate::error::{Error, Result};
use crate::types::{Provider, RepositoryReference};
use regex::Regex;
use std::env;
use std::sync::LazyLock;

// scp-like form: git@host:owner/repo.git
// ssh:// form, optional port: ssh://git@host:22/owner/repo.git
// HTTPS format: https://host/owner/repo.git
static RE_SCP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^git@[^:/]+:(.+?)(?:\.git)?/?$").expect("hardcoded regex is valid")
});
static RE_SSH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^ssh://(?:[^@/]+@)?[^:/]+(?::\d+)?/(.+?)(?:\.git)?/?$")
        .expect("hardcoded regex is valid")
});
static RE_HTTPS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[^/]+/(.+?)(?:\.git)?/?$").expect("hardcoded regex is valid")
});

/// Detect the provider from a remote URL
pub fn detect_provider(url: &str) -> Option<Provider> {
    extract_hostname(url).and_then(|host| provider_for_host(&host))
}

fn provider_for_host(hostname: &str) -> Option<Provider> {
    let gh_host = env::var("GH_HOST").ok();
    let gitlab_host = env::var("GITLAB_HOST").ok();

    if hostname == "bitbucket.org" {
        return Some(Provider::BitbucketCloud);
    }

    if hostname == "github.com"
        || hostname.ends_with(".github.com")
        || gh_host.as_deref() == Some(hostname)
    {
        return Some(Provider::GitHub);
    }

    if hostname == "gitlab.com"
        || hostname.ends_with(".gitlab.com")
        || gitlab_host.as_deref() == Some(hostname)
    {
        return Some(Provider::GitLab);
    }

    None
}

/// Parse provider, owner, name and host from a remote URL
///
/// Only `owner/name` paths are accepted; nested GitLab groups cannot be
/// expressed as a two-part repository and are rejected.
pub fn parse_repo_info(url: &str) -> Result<RepositoryReference> {
    let host = extract_hostname(url)
        .ok_or_else(|| Error::Introspection(format!("cannot parse remote URL: {url}")))?;
    let provider = provider_for_host(&host)
        .ok_or_else(|| Error::Introspection(format!("unsupported remote host: {host}")))?;

    let path = [&RE_SCP, &RE_SSH, &RE_HTTPS]
        .into_iter()
        .find_map(|re| re.captures(url))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| Error::Introspection(format!("cannot parse remote URL: {url}")))?;

    match path.split('/').collect::<Vec<_>>()[..] {
        [owner, name] if !owner.is_empty() && !name.is_empty() => Ok(RepositoryReference {
            provider,
            owner: owner.to_string(),
            name: name.to_string(),
            host: Some(host),
        }),
        _ => Err(Error::Introspection(format!("invalid repo path: {path}"))),
    }
}

fn extract_hostname(url: &str) -> Option<String> {
    // scp-like form
    if let Some(rest) = url.strip_prefix("git@") {
        return rest.split(':').next().map(ToString::to_string);
    }

    // HTTPS and ssh:// form
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(ToString::to_string))
}
