//! Platform services against local HTTP mocks

mod common;

use common::fixtures::make_request;
use mockito::Matcher;
use preq::auth::BitbucketCredentials;
use preq::error::Error;
use preq::platform::{BitbucketService, GitLabService, PlatformService};
use preq::types::{Provider, PullRequestRequest, RepositoryReference};
use serde_json::json;

fn bitbucket_pr_body(title: &str) -> String {
    json!({
        "id": 42,
        "title": title,
        "source": { "branch": { "name": "feature-x" } },
        "destination": { "branch": { "name": "develop" } },
        "links": { "html": { "href": "https://bitbucket.org/acme/widgets/pull-requests/42" } }
    })
    .to_string()
}

// =============================================================================
// Bitbucket Cloud
// =============================================================================

#[tokio::test]
async fn test_bitbucket_create_with_token() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/repositories/acme/widgets/pullrequests")
        .match_header("authorization", "Bearer tok")
        .match_body(Matcher::Json(json!({
            "title": "[WIP] Add feature",
            "source": { "branch": { "name": "feature-x" } },
            "destination": { "branch": { "name": "develop" } },
            "close_source_branch": true
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(bitbucket_pr_body("[WIP] Add feature"))
        .create_async()
        .await;

    let service = BitbucketService::new(
        BitbucketCredentials::Token("tok".into()),
        "acme".into(),
        "widgets".into(),
        Some(server.url()),
    );

    let pr = service
        .create_pull_request(&make_request("[WIP] Add feature"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(pr.number, 42);
    assert_eq!(pr.source, "feature-x");
    assert_eq!(pr.destination, "develop");
    assert_eq!(pr.url, "https://bitbucket.org/acme/widgets/pull-requests/42");
}

#[tokio::test]
async fn test_bitbucket_app_password_and_description() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/repositories/acme/widgets/pullrequests")
        .match_header("authorization", "Basic amRvZTpwdw==")
        .match_body(Matcher::PartialJson(json!({
            "description": "Closes #12",
            "close_source_branch": false
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(bitbucket_pr_body("Add feature"))
        .create_async()
        .await;

    let service = BitbucketService::new(
        BitbucketCredentials::AppPassword {
            username: "jdoe".into(),
            password: "pw".into(),
        },
        "acme".into(),
        "widgets".into(),
        Some(server.url()),
    );
    let request = PullRequestRequest {
        description: Some("Closes #12".into()),
        close_branch: false,
        ..make_request("Add feature")
    };

    service.create_pull_request(&request).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_bitbucket_error_message_surfaces() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/repositories/acme/widgets/pullrequests")
        .with_status(400)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "type": "error",
                "error": { "message": "There are no changes to be pulled" }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let service = BitbucketService::new(
        BitbucketCredentials::Token("tok".into()),
        "acme".into(),
        "widgets".into(),
        Some(server.url()),
    );

    let err = service
        .create_pull_request(&make_request("Add feature"))
        .await
        .unwrap_err();

    match err {
        Error::BitbucketApi(msg) => assert!(
            msg.contains("There are no changes to be pulled"),
            "unexpected message: {msg}"
        ),
        other => panic!("expected BitbucketApi, got {other:?}"),
    }
}

// =============================================================================
// GitLab
// =============================================================================

fn gitlab_mr_path() -> Matcher {
    Matcher::Regex(r"^/api/v4/projects/acme%2[Ff]widgets/merge_requests$".to_string())
}

#[tokio::test]
async fn test_gitlab_create_merge_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", gitlab_mr_path())
        .match_header("private-token", "glpat")
        .match_body(Matcher::Json(json!({
            "source_branch": "feature-x",
            "target_branch": "develop",
            "title": "Add feature",
            "remove_source_branch": true
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "iid": 7,
                "web_url": "https://gitlab.com/acme/widgets/-/merge_requests/7",
                "source_branch": "feature-x",
                "target_branch": "develop",
                "title": "Add feature"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let service = GitLabService::new(
        "glpat".into(),
        "acme".into(),
        "widgets".into(),
        Some(server.url()),
    );
    let request = PullRequestRequest {
        repository: RepositoryReference {
            provider: Provider::GitLab,
            ..make_request("").repository
        },
        ..make_request("Add feature")
    };

    let pr = service.create_pull_request(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(pr.number, 7);
    assert_eq!(pr.url, "https://gitlab.com/acme/widgets/-/merge_requests/7");
}

#[tokio::test]
async fn test_gitlab_error_message_surfaces() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", gitlab_mr_path())
        .with_status(409)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"message":["Another open merge request already exists for this source branch: !7"]}"#,
        )
        .create_async()
        .await;

    let service = GitLabService::new(
        "glpat".into(),
        "acme".into(),
        "widgets".into(),
        Some(server.url()),
    );

    let err = service
        .create_pull_request(&make_request("Add feature"))
        .await
        .unwrap_err();

    match err {
        Error::GitLabApi(msg) => assert_eq!(
            msg,
            "409 Conflict: Another open merge request already exists for this source branch: !7"
        ),
        other => panic!("expected GitLabApi, got {other:?}"),
    }
}
