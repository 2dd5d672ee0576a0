//! Mock platform service for testing

use async_trait::async_trait;
use preq::error::{Error, Result};
use preq::platform::PlatformService;
use preq::types::{PullRequest, PullRequestRequest};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Call-recording platform service
///
/// Features:
/// - Auto-incrementing PR numbers
/// - Call tracking for verification
/// - Error injection for failure path testing
pub struct MockPlatformService {
    next_pr_number: AtomicU64,
    create_calls: Mutex<Vec<PullRequestRequest>>,
    error_on_create: Mutex<Option<String>>,
}

impl MockPlatformService {
    /// Create a new mock numbering pull requests from 1
    pub fn new() -> Self {
        Self {
            next_pr_number: AtomicU64::new(1),
            create_calls: Mutex::new(Vec::new()),
            error_on_create: Mutex::new(None),
        }
    }

    /// Make `create_pull_request` return an error
    pub fn fail_create(&self, msg: &str) {
        *self.error_on_create.lock().unwrap() = Some(msg.to_string());
    }

    /// Get all `create_pull_request` calls
    pub fn get_create_calls(&self) -> Vec<PullRequestRequest> {
        self.create_calls.lock().unwrap().clone()
    }

    /// Assert exactly one request was sent and return it
    pub fn single_request(&self) -> PullRequestRequest {
        let calls = self.get_create_calls();
        assert_eq!(calls.len(), 1, "expected one create call, got: {calls:?}");
        calls.into_iter().next().unwrap()
    }
}

impl Default for MockPlatformService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlatformService for MockPlatformService {
    async fn create_pull_request(&self, request: &PullRequestRequest) -> Result<PullRequest> {
        self.create_calls.lock().unwrap().push(request.clone());

        if let Some(msg) = self.error_on_create.lock().unwrap().as_ref() {
            return Err(Error::BitbucketApi(msg.clone()));
        }

        let number = self.next_pr_number.fetch_add(1, Ordering::SeqCst);
        Ok(PullRequest {
            number,
            url: format!(
                "https://bitbucket.org/{}/pull-requests/{number}",
                request.repository.full_name()
            ),
            source: request.source.clone(),
            destination: request.destination.clone(),
            title: request.title.clone(),
        })
    }
}
