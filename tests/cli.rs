//! End-to-end runs of the binary against a mock GitHub API.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PULLS_PATH: &str = "/repos/owner/repo/pulls";

fn pr(number: u64, reviewers: &[&str], teams: &[&str], draft: bool) -> Value {
    json!({
        "number": number,
        "title": format!("Change number {}", number),
        "user": { "login": "dev" },
        "html_url": format!("https://github.com/owner/repo/pull/{}", number),
        "created_at": "2024-05-01T10:00:00Z",
        "draft": draft,
        "requested_reviewers": reviewers.iter().map(|l| json!({ "login": l })).collect::<Vec<_>>(),
        "requested_teams": teams.iter().map(|n| json!({ "name": n })).collect::<Vec<_>>()
    })
}

async fn mount_page(server: &MockServer, page: u32, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(PULLS_PATH))
        .and(query_param("page", page.to_string()))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Binary isolated from the caller's config, token and log settings
fn command(server: &MockServer, home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("review-backlog").unwrap();
    cmd.env("HOME", home.path())
        .env("GITHUB_API_URL", server.uri())
        .env_remove("GITHUB_TOKEN")
        .env_remove("RUST_LOG");
    cmd
}

#[tokio::test(flavor = "multi_thread")]
async fn test_full_report() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();
    mount_page(
        &server,
        1,
        ResponseTemplate::new(200).set_body_json(json!([
            pr(10, &["alice"], &[], false),
            pr(11, &[], &[], false),
            pr(12, &[], &[], true),
            pr(13, &["alice"], &["core"], false),
        ])),
    )
    .await;
    mount_page(&server, 2, ResponseTemplate::new(200).set_body_json(json!([]))).await;

    command(&server, &home)
        .args(["--repo", "owner/repo"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Warning: No GitHub token provided. Rate limits may apply.",
        ))
        .stdout(predicate::str::contains("Found 4 open pull requests"))
        .stdout(predicate::str::contains(format!("{:<30}: 2 pending review(s)", "alice")))
        .stdout(predicate::str::contains("team:core"))
        .stdout(predicate::str::contains("Found 1 non-draft PR(s) without reviewers:"))
        .stdout(predicate::str::contains("PR #11: Change number 11"))
        .stdout(predicate::str::contains("PR #12").not())
        .stdout(predicate::str::contains("Total open PRs: 4"))
        .stdout(predicate::str::contains("Total pending review requests: 3"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_token_from_flag_is_sent() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();
    Mock::given(method("GET"))
        .and(path(PULLS_PATH))
        .and(header("authorization", "Bearer flag-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    command(&server, &home)
        .args(["--repo", "owner/repo", "--token", "flag-token"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Using authenticated GitHub API requests"))
        .stdout(predicate::str::contains("No pending review requests found."))
        .stdout(predicate::str::contains(
            "All non-draft PRs have reviewers assigned!",
        ));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failed_page_aborts_before_any_report() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();
    let full_page: Vec<Value> = (1..=100).map(|n| pr(n, &["alice"], &[], false)).collect();
    mount_page(&server, 1, ResponseTemplate::new(200).set_body_json(full_page)).await;
    mount_page(
        &server,
        2,
        ResponseTemplate::new(500).set_body_string("server exploded"),
    )
    .await;
    mount_page(&server, 3, ResponseTemplate::new(200).set_body_json(json!([]))).await;

    command(&server, &home)
        .args(["--repo", "owner/repo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error fetching PRs: 500"))
        .stderr(predicate::str::contains("Response: server exploded"))
        .stdout(predicate::str::contains("PEOPLE WITH THE MOST PENDING REVIEWS").not())
        .stdout(predicate::str::contains("SUMMARY STATISTICS").not());

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_malformed_repo_exits_without_requests() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    command(&server, &home)
        .args(["--repo", "not-a-repo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Error: Repository must be in format OWNER/REPO",
        ));

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_repo_from_config_file() {
    let server = MockServer::start().await;
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".config").join("review-backlog");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.yaml"), "repo: owner/repo\n").unwrap();

    mount_page(&server, 1, ResponseTemplate::new(200).set_body_json(json!([]))).await;

    command(&server, &home)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Fetching open pull requests from owner/repo...",
        ));
}
