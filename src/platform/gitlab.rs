//! GitLab platform service implementation

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{PullRequest, PullRequestRequest};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// GitLab service using reqwest
pub struct GitLabService {
    client: Client,
    token: String,
    base_url: String,
    project_path: String,
}

#[derive(Deserialize)]
struct MergeRequest {
    iid: u64,
    web_url: String,
    source_branch: String,
    target_branch: String,
    title: String,
}

#[derive(Serialize)]
struct CreateMrPayload<'a> {
    source_branch: &'a str,
    target_branch: &'a str,
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    remove_source_branch: bool,
}

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Base URL of gitlab.com
pub const GITLAB_COM: &str = "https://gitlab.com";

impl GitLabService {
    /// Create a new GitLab service
    ///
    /// `base_url` is the scheme and host of the instance (defaults to gitlab.com).
    pub fn new(token: String, owner: String, name: String, base_url: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| GITLAB_COM.to_string());

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            base_url: base_url.trim_end_matches('/').to_string(),
            project_path: format!("{owner}/{name}"),
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/v4{}", self.base_url, path)
    }

    fn encoded_project(&self) -> String {
        urlencoding::encode(&self.project_path).into_owned()
    }
}

/// Pull the human-readable message out of a GitLab error response
///
/// GitLab reports `message` as a string, a list of strings, or an object of
/// per-attribute lists; some endpoints use `error` instead.
fn error_message(status: StatusCode, body: &str) -> String {
    let detail = serde_json::from_str::<Value>(body).ok().and_then(|v| {
        match v.get("message").or_else(|| v.get("error"))? {
            Value::String(s) => Some(s.clone()),
            Value::Array(items) => Some(
                items
                    .iter()
                    .map(|i| i.as_str().map_or_else(|| i.to_string(), ToString::to_string))
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
            other => Some(other.to_string()),
        }
    });

    format!("{status}: {}", detail.unwrap_or_else(|| body.to_string()))
}

#[async_trait]
impl PlatformService for GitLabService {
    async fn create_pull_request(&self, request: &PullRequestRequest) -> Result<PullRequest> {
        let url = self.api_url(&format!(
            "/projects/{}/merge_requests",
            self.encoded_project()
        ));

        let payload = CreateMrPayload {
            source_branch: &request.source,
            target_branch: &request.destination,
            title: &request.title,
            description: request.description.as_deref(),
            remove_source_branch: request.close_branch,
        };

        let response = self
            .client
            .post(&url)
            .header("PRIVATE-TOKEN", &self.token)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::GitLabApi(error_message(status, &body)));
        }

        let mr: MergeRequest = response.json().await?;

        Ok(PullRequest {
            number: mr.iid,
            url: mr.web_url,
            source: mr.source_branch,
            destination: mr.target_branch,
            title: mr.title,
        })
    }
}
