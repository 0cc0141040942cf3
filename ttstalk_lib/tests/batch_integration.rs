use std::time::{Duration, Instant};

use ttstalk_lib::batch::run_batch;
use ttstalk_lib::{Client, HistoryStore};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ALICE_PAGE: &str = include_str!("../../ttstalk_api/tests/fixtures/profile_alice.html");
const BOB_PAGE: &str = include_str!("../../ttstalk_api/tests/fixtures/profile_fallback_key.html");
const NO_EMBED_PAGE: &str = include_str!("../../ttstalk_api/tests/fixtures/profile_no_embed.html");

async fn mock_profile(server: &MockServer, handle: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/@{}", handle)))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

fn temp_history(name: &str) -> HistoryStore {
    let path = std::env::temp_dir().join(format!(
        "ttstalk_batch_test_{}_{}.json",
        std::process::id(),
        name
    ));
    let _ = std::fs::remove_file(&path);
    HistoryStore::with_path(path)
}

#[tokio::test]
async fn failed_handle_is_skipped_and_order_is_preserved() {
    let server = MockServer::start().await;
    mock_profile(&server, "alice", ALICE_PAGE).await;
    mock_profile(&server, "broken", NO_EMBED_PAGE).await;
    mock_profile(&server, "bob", BOB_PAGE).await;

    let client = Client::with_base_url(&server.uri()).unwrap();
    let handles: Vec<String> = ["alice", "broken", "bob"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let records = run_batch(&client, &handles, Duration::ZERO, None).await;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].unique_id.as_deref(), Some("alice"));
    assert_eq!(records[1].unique_id.as_deref(), Some("bob"));
}

#[tokio::test]
async fn delay_runs_between_attempts_but_not_after_the_last() {
    let server = MockServer::start().await;
    mock_profile(&server, "alice", ALICE_PAGE).await;
    mock_profile(&server, "broken", NO_EMBED_PAGE).await;
    mock_profile(&server, "bob", BOB_PAGE).await;

    let client = Client::with_base_url(&server.uri()).unwrap();
    let handles: Vec<String> = ["alice", "broken", "bob"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let delay = Duration::from_millis(250);
    let started = Instant::now();
    let records = run_batch(&client, &handles, delay, None).await;
    let elapsed = started.elapsed();

    assert_eq!(records.len(), 2);
    // Two gaps for three handles, even though the middle one fails.
    assert!(elapsed >= delay * 2, "only slept {:?}", elapsed);
    assert!(elapsed < delay * 3, "slept too long: {:?}", elapsed);
}

#[tokio::test]
async fn successes_are_appended_to_history_failures_are_not() {
    let server = MockServer::start().await;
    mock_profile(&server, "alice", ALICE_PAGE).await;
    mock_profile(&server, "broken", NO_EMBED_PAGE).await;
    mock_profile(&server, "bob", BOB_PAGE).await;

    let client = Client::with_base_url(&server.uri()).unwrap();
    let history = temp_history("appends");
    let handles: Vec<String> = ["alice", "broken", "bob"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    run_batch(&client, &handles, Duration::ZERO, Some(&history)).await;

    let entries = history.list(None);
    assert_eq!(entries.len(), 2);
    // History is newest first, so the last success leads.
    assert_eq!(entries[0].unique_id, "bob");
    assert_eq!(entries[1].unique_id, "alice");
    history.clear();
}

#[tokio::test]
async fn http_failures_are_skipped_like_extraction_failures() {
    let server = MockServer::start().await;
    mock_profile(&server, "alice", ALICE_PAGE).await;
    Mock::given(method("GET"))
        .and(path("/@gone"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let client = Client::with_base_url(&server.uri()).unwrap();
    let handles: Vec<String> = ["gone", "alice"].iter().map(|s| s.to_string()).collect();

    let records = run_batch(&client, &handles, Duration::ZERO, None).await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].unique_id.as_deref(), Some("alice"));
}
