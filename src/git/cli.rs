//! [`GitIntrospector`] backed by the `git` executable

use crate::error::{Error, Result};
use crate::git::GitIntrospector;
use crate::platform::parse_repo_info;
use crate::types::RepositoryReference;
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::process::Command;
use tracing::debug;

/// Runs `git` subcommands inside a working directory
#[derive(Debug, Clone)]
pub struct GitCli {
    dir: PathBuf,
}

impl GitCli {
    /// Introspect the repository containing `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    async fn git(&self, args: &[&str]) -> Result<String> {
        debug!(dir = %self.dir.display(), ?args, "running git");

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.dir)
            .output()
            .await
            .map_err(|e| Error::Introspection(format!("cannot run git: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(Error::Introspection(format!(
                "git {} failed: {stderr}",
                args.join(" ")
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[async_trait]
impl GitIntrospector for GitCli {
    async fn current_branch(&self) -> Result<String> {
        let branch = self.git(&["symbolic-ref", "--short", "HEAD"]).await?;
        if branch.is_empty() {
            return Err(Error::Introspection("HEAD is not on a branch".to_string()));
        }
        Ok(branch)
    }

    async fn closest_branch(&self, priority: &[&str]) -> Result<String> {
        let refs = self
            .git(&[
                "for-each-ref",
                "--format=%(refname)",
                "refs/heads",
                "refs/remotes",
            ])
            .await?;
        let refs: Vec<&str> = refs.lines().collect();

        priority
            .iter()
            .find(|name| branch_present(&refs, name))
            .map(ToString::to_string)
            .ok_or_else(|| {
                Error::Introspection(format!("none of {} exist", priority.join(", ")))
            })
    }

    async fn current_commit_message(&self) -> Result<String> {
        let message = self.git(&["log", "-1", "--format=%s"]).await?;
        if message.is_empty() {
            return Err(Error::Introspection("last commit has no message".to_string()));
        }
        Ok(message)
    }

    async fn remote_info(&self) -> Result<RepositoryReference> {
        let remotes = self.git(&["remote"]).await?;
        let remotes: Vec<&str> = remotes.lines().filter(|l| !l.is_empty()).collect();
        let remote = pick_remote(&remotes)
            .ok_or_else(|| Error::Introspection("no remotes configured".to_string()))?;

        let url = self.git(&["remote", "get-url", remote]).await?;
        parse_repo_info(&url)
    }
}

/// Prefer `origin`, otherwise the first remote
fn pick_remote<'a>(remotes: &[&'a str]) -> Option<&'a str> {
    remotes
        .iter()
        .find(|r| **r == "origin")
        .or_else(|| remotes.first())
        .copied()
}

/// Whether `name` exists as a local or remote-tracking branch
fn branch_present(refs: &[&str], name: &str) -> bool {
    refs.iter().any(|r| {
        if let Some(local) = r.strip_prefix("refs/heads/") {
            return local == name;
        }
        r.strip_prefix("refs/remotes/")
            .and_then(|rest| rest.split_once('/'))
            .is_some_and(|(_, branch)| branch == name)
    })
}
