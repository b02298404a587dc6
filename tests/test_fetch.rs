//! Integration tests for the fetcher against a mock GitHub API

use mockito::{Matcher, Server};
use tempfile::TempDir;

use github_docs::error::Error;
use github_docs::github::Listing;
use github_docs::services::{Fetcher, RecordStore};
use github_docs::types::RepositoryId;
use test_util::{TEST_TOKEN, create_mock_github_client};

const FIRST_PAGE_QUERY: &str = "state=all&per_page=100";

fn repository_id() -> RepositoryId {
    RepositoryId::new("octo", "demo")
}

#[tokio::test]
async fn test_fetch_writes_three_record_stores() {
    let mut server = Server::new_async().await;
    let milestones = server
        .mock("GET", "/repos/octo/demo/milestones")
        .match_query(Matcher::Exact(FIRST_PAGE_QUERY.to_string()))
        .match_header("authorization", Matcher::Regex(TEST_TOKEN.to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"title": "v1", "state": "open", "open_issues": 3, "closed_issues": 7, "extra": true}]"#)
        .create_async()
        .await;
    let issues = server
        .mock("GET", "/repos/octo/demo/issues")
        .match_query(Matcher::Exact(FIRST_PAGE_QUERY.to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"number": 42, "title": "Fix bug", "state": "closed", "labels": [{"name": "bug"}]}]"#)
        .create_async()
        .await;
    let pulls = server
        .mock("GET", "/repos/octo/demo/pulls")
        .match_query(Matcher::Exact(FIRST_PAGE_QUERY.to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"number": 11, "title": "Add feature2", "merged_at": "2024-01-01T00:00:00Z"}]"#)
        .create_async()
        .await;

    let temp_dir = TempDir::new().unwrap();
    let store = RecordStore::new(temp_dir.path());
    let fetcher = Fetcher::new(create_mock_github_client(&server.url()), store.clone());

    let written = fetcher.run(&repository_id()).await.unwrap();

    milestones.assert_async().await;
    issues.assert_async().await;
    pulls.assert_async().await;

    assert_eq!(
        written,
        vec![
            temp_dir.path().join("milestones.json"),
            temp_dir.path().join("issues.json"),
            temp_dir.path().join("prs.json"),
        ]
    );

    // Records are persisted verbatim, unknown fields included
    let raw: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(temp_dir.path().join("milestones.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(raw[0]["extra"], serde_json::Value::Bool(true));

    let snapshot = store.load_snapshot().unwrap();
    assert_eq!(snapshot.milestones[0].completion_percentage(), 70);
    assert_eq!(snapshot.issues[0].number.value(), 42);
    assert!(snapshot.pull_requests[0].is_merged());
}

#[tokio::test]
async fn test_fetch_follows_next_links() {
    let mut server = Server::new_async().await;
    let next_link = format!(
        "<{}/repos/octo/demo/issues?state=all&per_page=100&page=2>; rel=\"next\"",
        server.url()
    );
    let first_page = server
        .mock("GET", "/repos/octo/demo/issues")
        .match_query(Matcher::Exact(FIRST_PAGE_QUERY.to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_header("link", &next_link)
        .with_body(r#"[{"number": 1, "title": "one", "state": "open"}]"#)
        .create_async()
        .await;
    let second_page = server
        .mock("GET", "/repos/octo/demo/issues")
        .match_query(Matcher::UrlEncoded("page".to_string(), "2".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"number": 2, "title": "two", "state": "closed"}]"#)
        .create_async()
        .await;

    let client = create_mock_github_client(&server.url());
    let records = client
        .fetch_listing(&repository_id(), Listing::Issues)
        .await
        .unwrap();

    first_page.assert_async().await;
    second_page.assert_async().await;
    let numbers: Vec<u64> = records
        .iter()
        .map(|record| record["number"].as_u64().unwrap())
        .collect();
    assert_eq!(numbers, vec![1, 2]);
}

#[tokio::test]
async fn test_fetch_stops_at_max_pages() {
    let mut server = Server::new_async().await;
    let next_link = format!(
        "<{}/repos/octo/demo/pulls?state=all&per_page=100&page=2>; rel=\"next\"",
        server.url()
    );
    let _first_page = server
        .mock("GET", "/repos/octo/demo/pulls")
        .match_query(Matcher::Exact(FIRST_PAGE_QUERY.to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_header("link", &next_link)
        .with_body(r#"[{"number": 1, "title": "one", "merged_at": null}]"#)
        .create_async()
        .await;
    let second_page = server
        .mock("GET", "/repos/octo/demo/pulls")
        .match_query(Matcher::UrlEncoded("page".to_string(), "2".to_string()))
        .with_status(200)
        .with_body("[]")
        .expect(0)
        .create_async()
        .await;

    let client = create_mock_github_client(&server.url()).with_max_pages(Some(1));
    let records = client.fetch_pull_requests(&repository_id()).await.unwrap();

    second_page.assert_async().await;
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn test_unauthorized_is_auth_error_and_writes_nothing() {
    let mut server = Server::new_async().await;
    let _milestones = server
        .mock("GET", "/repos/octo/demo/milestones")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "Bad credentials", "documentation_url": "https://docs.github.com/rest"}"#)
        .create_async()
        .await;

    let temp_dir = TempDir::new().unwrap();
    let fetcher = Fetcher::new(
        create_mock_github_client(&server.url()),
        RecordStore::new(temp_dir.path()),
    );

    let error = fetcher.run(&repository_id()).await.unwrap_err();

    assert!(matches!(error, Error::Auth(_)), "unexpected error: {:?}", error);
    assert!(!temp_dir.path().join("milestones.json").exists());
    assert!(!temp_dir.path().join("issues.json").exists());
}

#[tokio::test]
async fn test_not_found_is_http_error_after_earlier_stores() {
    let mut server = Server::new_async().await;
    let _milestones = server
        .mock("GET", "/repos/octo/demo/milestones")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("[]")
        .create_async()
        .await;
    let _issues = server
        .mock("GET", "/repos/octo/demo/issues")
        .match_query(Matcher::Any)
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "Not Found", "documentation_url": "https://docs.github.com/rest"}"#)
        .create_async()
        .await;
    let pulls = server
        .mock("GET", "/repos/octo/demo/pulls")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("[]")
        .expect(0)
        .create_async()
        .await;

    let temp_dir = TempDir::new().unwrap();
    let fetcher = Fetcher::new(
        create_mock_github_client(&server.url()),
        RecordStore::new(temp_dir.path()),
    );

    let error = fetcher.run(&repository_id()).await.unwrap_err();

    assert_eq!(error.status(), Some(404));
    pulls.assert_async().await;
    assert!(temp_dir.path().join("milestones.json").exists());
    assert!(!temp_dir.path().join("prs.json").exists());
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    // Nothing listens on port 1
    let client = create_mock_github_client("http://127.0.0.1:1");

    let error = client.fetch_milestones(&repository_id()).await.unwrap_err();

    assert!(matches!(error, Error::Network(_)), "unexpected error: {:?}", error);
}

#[tokio::test]
async fn test_html_error_page_keeps_status() {
    let mut server = Server::new_async().await;
    let _milestones = server
        .mock("GET", "/repos/octo/demo/milestones")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_header("content-type", "text/html")
        .with_body("<html><body><h1>503 Service Unavailable</h1></body></html>")
        .create_async()
        .await;

    let client = create_mock_github_client(&server.url());
    let error = client.fetch_milestones(&repository_id()).await.unwrap_err();

    assert_eq!(error.status(), Some(503), "unexpected error: {:?}", error);
    assert!(error.to_string().contains("503 Service Unavailable"));
}

#[tokio::test]
async fn test_unauthorized_with_empty_body_is_auth_error() {
    let mut server = Server::new_async().await;
    let _milestones = server
        .mock("GET", "/repos/octo/demo/milestones")
        .match_query(Matcher::Any)
        .with_status(401)
        .create_async()
        .await;

    let client = create_mock_github_client(&server.url());
    let error = client.fetch_milestones(&repository_id()).await.unwrap_err();

    assert!(matches!(error, Error::Auth(_)), "unexpected error: {:?}", error);
}

#[tokio::test]
async fn test_json_error_without_message_keeps_status() {
    let mut server = Server::new_async().await;
    let _issues = server
        .mock("GET", "/repos/octo/demo/issues")
        .match_query(Matcher::Any)
        .with_status(422)
        .with_header("content-type", "application/json")
        .with_body(r#"{"errors": [{"code": "invalid"}]}"#)
        .create_async()
        .await;

    let client = create_mock_github_client(&server.url());
    let error = client.fetch_issues(&repository_id()).await.unwrap_err();

    assert_eq!(error.status(), Some(422), "unexpected error: {:?}", error);
}
