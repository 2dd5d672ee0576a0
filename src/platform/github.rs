//! GitHub platform service implementation

use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{PullRequest, PullRequestRequest};
use async_trait::async_trait;
use octocrab::Octocrab;
use tracing::debug;

/// GitHub service using octocrab
pub struct GitHubService {
    client: Octocrab,
    owner: String,
    name: String,
}

impl GitHubService {
    /// Create a new GitHub service
    pub fn new(token: &str, owner: String, name: String, host: Option<String>) -> Result<Self> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        if let Some(ref h) = host {
            let base_url = format!("https://{h}/api/v3");
            builder = builder
                .base_uri(&base_url)
                .map_err(|e| Error::GitHubApi(e.to_string()))?;
        }

        let client = builder.build().map_err(|e| Error::GitHubApi(e.to_string()))?;

        Ok(Self {
            client,
            owner,
            name,
        })
    }
}

#[async_trait]
impl PlatformService for GitHubService {
    async fn create_pull_request(&self, request: &PullRequestRequest) -> Result<PullRequest> {
        if request.close_branch {
            debug!("GitHub has no close-source-branch option; ignoring");
        }

        let pulls = self.client.pulls(&self.owner, &self.name);
        let mut create = pulls.create(&request.title, &request.source, &request.destination);
        if let Some(body) = &request.description {
            create = create.body(body);
        }

        let pr = create.send().await?;

        Ok(PullRequest {
            number: pr.number,
            url: pr
                .html_url
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            source: pr.head.ref_field.clone(),
            destination: pr.base.ref_field.clone(),
            title: pr.title.as_deref().unwrap_or_default().to_string(),
        })
    }
}
