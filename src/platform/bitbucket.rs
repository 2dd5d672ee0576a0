//! Bitbucket Cloud platform service implementation

use crate::auth::BitbucketCredentials;
use crate::error::{Error, Result};
use crate::platform::PlatformService;
use crate::types::{PullRequest, PullRequestRequest};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};

/// Bitbucket Cloud REST API root
pub const BITBUCKET_API: &str = "https://api.bitbucket.org/2.0";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Bitbucket Cloud service using reqwest
pub struct BitbucketService {
    client: Client,
    credentials: BitbucketCredentials,
    api_base: String,
    owner: String,
    name: String,
}

#[derive(Serialize)]
struct BranchRef<'a> {
    branch: BranchName<'a>,
}

#[derive(Serialize)]
struct BranchName<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct CreatePrPayload<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    source: BranchRef<'a>,
    destination: BranchRef<'a>,
    close_source_branch: bool,
}

#[derive(Deserialize)]
struct BbPullRequest {
    id: u64,
    title: String,
    source: BbEndpoint,
    destination: BbEndpoint,
    links: BbLinks,
}

#[derive(Deserialize)]
struct BbEndpoint {
    branch: BbBranch,
}

#[derive(Deserialize)]
struct BbBranch {
    name: String,
}

#[derive(Deserialize)]
struct BbLinks {
    html: BbLink,
}

#[derive(Deserialize)]
struct BbLink {
    href: String,
}

#[derive(Deserialize)]
struct BbErrorBody {
    error: BbErrorDetail,
}

#[derive(Deserialize)]
struct BbErrorDetail {
    message: String,
}

impl BitbucketService {
    /// Create a new Bitbucket Cloud service
    ///
    /// `api_base` overrides the REST API root (defaults to api.bitbucket.org).
    pub fn new(
        credentials: BitbucketCredentials,
        owner: String,
        name: String,
        api_base: Option<String>,
    ) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            credentials,
            api_base: api_base
                .unwrap_or_else(|| BITBUCKET_API.to_string())
                .trim_end_matches('/')
                .to_string(),
            owner,
            name,
        }
    }

    fn pull_requests_url(&self) -> String {
        format!(
            "{}/repositories/{}/{}/pullrequests",
            self.api_base,
            urlencoding::encode(&self.owner),
            urlencoding::encode(&self.name)
        )
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.credentials {
            BitbucketCredentials::Token(token) => builder.bearer_auth(token),
            BitbucketCredentials::AppPassword { username, password } => {
                builder.basic_auth(username, Some(password))
            }
        }
    }
}

/// Pull the human-readable message out of a Bitbucket error response
fn error_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<BbErrorBody>(body).map_or_else(
        |_| format!("{status}: {body}"),
        |b| format!("{status}: {}", b.error.message),
    )
}

#[async_trait]
impl PlatformService for BitbucketService {
    async fn create_pull_request(&self, request: &PullRequestRequest) -> Result<PullRequest> {
        let payload = CreatePrPayload {
            title: &request.title,
            description: request.description.as_deref(),
            source: BranchRef {
                branch: BranchName {
                    name: &request.source,
                },
            },
            destination: BranchRef {
                branch: BranchName {
                    name: &request.destination,
                },
            },
            close_source_branch: request.close_branch,
        };

        let response = self
            .authorize(self.client.post(self.pull_requests_url()))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::BitbucketApi(error_message(status, &body)));
        }

        let pr: BbPullRequest = response.json().await?;

        Ok(PullRequest {
            number: pr.id,
            url: pr.links.html.href,
            source: pr.source.branch.name,
            destination: pr.destination.branch.name,
            title: pr.title,
        })
    }
}
