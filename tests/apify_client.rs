//! Integration tests for the Apify ads client against a mock API.
//!
//! These tests verify:
//! - The run / poll / dataset request sequence and its wire format
//! - Retry on transient failures, and no retry on client errors
//! - Run starts resent only when no run can have been created
//! - Malformed dataset items skipped without failing the scrape
//! - Failed runs surfacing as errors

use std::sync::Arc;

use ad_footprint::apify::ApifyAdsClient;
use ad_footprint::initialization::init_client;
use ad_footprint::{AdsSource, CollectorError, Config, LogLevel};
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ACTOR: &str = "tester~ads-scraper";

fn test_client(server: &MockServer) -> ApifyAdsClient {
    let config = Config {
        log_level: LogLevel::Error,
        apify_token: "test-token".to_string(),
        actor_id: ACTOR.to_string(),
        api_base_url: server.uri(),
        country: "TN".to_string(),
        max_results: 50,
        timeout_seconds: 5,
        ..Default::default()
    };
    let http = init_client(&config).expect("Failed to build HTTP client");
    ApifyAdsClient::new(Arc::clone(&http), &config).expect("Failed to build Apify client")
}

fn run(status: &str) -> Value {
    json!({
        "data": {
            "id": "run-1",
            "status": status,
            "defaultDatasetId": "ds-1",
            "startedAt": "2024-05-01T10:00:00.000Z"
        }
    })
}

async fn mount_start(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(format!("/acts/{ACTOR}/runs")))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(201).set_body_json(run("READY")))
        .mount(server)
        .await;
}

async fn mount_poll(server: &MockServer, status: &str) {
    Mock::given(method("GET"))
        .and(path("/actor-runs/run-1"))
        .and(query_param("waitForFinish", "60"))
        .respond_with(ResponseTemplate::new(200).set_body_json(run(status)))
        .mount(server)
        .await;
}

async fn mount_dataset(server: &MockServer, items: Value) {
    Mock::given(method("GET"))
        .and(path("/datasets/ds-1/items"))
        .and(query_param("format", "json"))
        .and(query_param("clean", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(items))
        .mount(server)
        .await;
}

/// Body of the first run-start request the server received.
async fn start_request_body(server: &MockServer) -> Value {
    let requests = server
        .received_requests()
        .await
        .expect("request recording should be enabled");
    let start = requests
        .iter()
        .find(|r| r.url.path().ends_with("/runs"))
        .expect("a run should have been started");
    serde_json::from_slice(&start.body).expect("run input should be JSON")
}

#[tokio::test]
async fn test_page_ads_full_flow() {
    let server = MockServer::start().await;
    mount_start(&server).await;
    mount_poll(&server, "SUCCEEDED").await;
    mount_dataset(
        &server,
        json!([
            {
                "ad_archive_id": "1",
                "page_id": 42,
                "page_name": "Shop",
                "snapshot": {"link_url": "https://shop.com"}
            },
            {
                "ad_archive_id": "2",
                "page_id": "42",
                "snapshot": {"cards": [{"link_url": "https://rival.com"}]}
            },
            {"error": "no more results"}
        ]),
    )
    .await;

    let ads = test_client(&server)
        .get_all_ads_by_page_id("42")
        .await
        .expect("scrape should succeed");

    assert_eq!(ads.len(), 2);
    assert_eq!(ads[0].page_id(), Some("42"));
    assert_eq!(ads[1].page_id(), Some("42"));
    assert_eq!(ads[0].link_url(), Some("https://shop.com"));

    let input = start_request_body(&server).await;
    assert_eq!(input["count"], 50);
    assert_eq!(input["scrapeAdDetails"], false);
    let url = input["urls"][0]["url"].as_str().expect("url should be a string");
    assert!(url.starts_with("https://www.facebook.com/ads/library/?"));
    assert!(url.contains("view_all_page_id=42"));
    assert!(url.contains("country=TN"));
}

#[tokio::test]
async fn test_search_ads_uses_keyword_search() {
    let server = MockServer::start().await;
    mount_start(&server).await;
    mount_poll(&server, "SUCCEEDED").await;
    mount_dataset(&server, json!([])).await;

    let ads = test_client(&server)
        .search_ads("shop.com")
        .await
        .expect("scrape should succeed");
    assert!(ads.is_empty());

    let input = start_request_body(&server).await;
    let url = input["urls"][0]["url"].as_str().expect("url should be a string");
    assert!(url.contains("q=shop.com"));
    assert!(url.contains("search_type=keyword_unordered"));
}

#[tokio::test]
async fn test_polls_until_run_finishes() {
    let server = MockServer::start().await;
    mount_start(&server).await;
    Mock::given(method("GET"))
        .and(path("/actor-runs/run-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(run("RUNNING")))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    mount_poll(&server, "SUCCEEDED").await;
    mount_dataset(&server, json!([{"ad_archive_id": "1"}])).await;

    let ads = test_client(&server)
        .get_all_ads_by_page_id("42")
        .await
        .expect("scrape should succeed");
    assert_eq!(ads.len(), 1);
}

#[tokio::test]
async fn test_failed_run_is_an_error() {
    let server = MockServer::start().await;
    mount_start(&server).await;
    mount_poll(&server, "FAILED").await;

    let err = test_client(&server)
        .get_all_ads_by_page_id("42")
        .await
        .expect_err("failed run should be an error");
    match err {
        CollectorError::RunFailed { run_id, status } => {
            assert_eq!(run_id, "run-1");
            assert_eq!(status, "FAILED");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_unauthorized_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/acts/{ACTOR}/runs")))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid token"))
        .expect(1)
        .mount(&server)
        .await;

    let err = test_client(&server)
        .search_ads("shop.com")
        .await
        .expect_err("401 should be an error");
    match err {
        CollectorError::Api { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "invalid token");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limited_start_is_retried() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/acts/{ACTOR}/runs")))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    mount_start(&server).await;
    mount_poll(&server, "SUCCEEDED").await;
    mount_dataset(&server, json!([{"ad_archive_id": "7"}])).await;

    let ads = test_client(&server)
        .search_ads("shop.com")
        .await
        .expect("scrape should succeed after a retry");
    assert_eq!(ads[0].ad_archive_id.as_deref(), Some("7"));
}

#[tokio::test]
async fn test_server_error_on_start_is_not_resent() {
    // A 5xx may come after the run was created; resending could start a second one
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/acts/{ACTOR}/runs")))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let err = test_client(&server)
        .search_ads("shop.com")
        .await
        .expect_err("503 on start should be an error");
    assert!(matches!(err, CollectorError::Api { status: 503, .. }));
}

#[tokio::test]
async fn test_transient_dataset_error_is_retried() {
    let server = MockServer::start().await;
    mount_start(&server).await;
    mount_poll(&server, "SUCCEEDED").await;
    Mock::given(method("GET"))
        .and(path("/datasets/ds-1/items"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    mount_dataset(&server, json!([{"ad_archive_id": "7"}])).await;

    let ads = test_client(&server)
        .search_ads("shop.com")
        .await
        .expect("scrape should succeed after a retry");
    assert_eq!(ads.len(), 1);
}

#[tokio::test]
async fn test_malformed_item_does_not_sink_the_dataset() {
    let server = MockServer::start().await;
    mount_start(&server).await;
    mount_poll(&server, "SUCCEEDED").await;
    mount_dataset(
        &server,
        json!([
            {"ad_archive_id": "1", "snapshot": {"link_url": "https://shop.com"}},
            {"ad_archive_id": "2", "snapshot": {"cards": [null, {"link_url": "https://rival.com"}]}},
            {"ad_archive_id": "3", "snapshot": "not an object"},
            "stray string",
            {"ad_archive_id": "4", "snapshot": {"caption": "https://other.com"}}
        ]),
    )
    .await;

    let ads = test_client(&server)
        .search_ads("shop.com")
        .await
        .expect("scrape should succeed despite a bad item");

    let ids: Vec<&str> = ads.iter().filter_map(|ad| ad.ad_archive_id.as_deref()).collect();
    assert_eq!(ids, vec!["1", "2", "4"]);
    let cards: Vec<&str> = ads[1].card_link_urls().collect();
    assert_eq!(cards, vec!["https://rival.com"]);
}

#[tokio::test]
async fn test_malformed_dataset_is_a_decode_error() {
    let server = MockServer::start().await;
    mount_start(&server).await;
    mount_poll(&server, "SUCCEEDED").await;
    Mock::given(method("GET"))
        .and(path("/datasets/ds-1/items"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .search_ads("shop.com")
        .await
        .expect_err("decode should fail");
    assert!(matches!(err, CollectorError::Decode(_)));
}
