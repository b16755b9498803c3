//! End-to-end tests for the HTTP surface against an in-memory SQLite store.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{Value, json};

use url_shortener::api::routes::app_router;
use url_shortener::application::services::{ShortenerService, StatsService};
use url_shortener::domain::repositories::UrlRepository;
use url_shortener::infrastructure::persistence::SqliteUrlRepository;
use url_shortener::state::AppState;

const BASE_URL: &str = "http://localhost:5000";
const CODE_LENGTH: usize = 6;

async fn test_server() -> TestServer {
    // A single connection keeps every request on the same in-memory database.
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");

    let repository: Arc<dyn UrlRepository> = Arc::new(SqliteUrlRepository::new(pool));
    let shortener = Arc::new(ShortenerService::new(
        repository.clone(),
        BASE_URL.to_string(),
        CODE_LENGTH,
        5,
    ));
    let stats = Arc::new(StatsService::new(repository));

    let state = AppState::new(shortener, stats, PathBuf::from("does-not-exist.html"));
    let app = app_router(state, Duration::from_secs(30));

    TestServer::new(app).expect("test server")
}

async fn shorten(server: &TestServer, url: &str) -> Value {
    let response = server.post("/shorten").json(&json!({ "url": url })).await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()
}

#[tokio::test]
async fn test_shorten_then_redirect_round_trip() {
    let server = test_server().await;

    let body = shorten(&server, "https://www.example.com/some/page?q=1").await;

    let code = body["short_code"].as_str().unwrap();
    assert_eq!(code.len(), CODE_LENGTH);
    assert_eq!(body["short_url"], format!("{BASE_URL}/{code}"));
    assert_eq!(body["long_url"], "https://www.example.com/some/page?q=1");

    let response = server.get(&format!("/{code}")).await;
    response.assert_status(StatusCode::FOUND);
    assert_eq!(
        response.headers().get("location").unwrap(),
        "https://www.example.com/some/page?q=1"
    );
}

#[tokio::test]
async fn test_shorten_missing_url_is_rejected() {
    let server = test_server().await;

    let response = server.post("/shorten").json(&json!({})).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body = response.json::<Value>();
    assert_eq!(body["error"], "URL is required");
}

#[tokio::test]
async fn test_shorten_bad_scheme_does_not_touch_store() {
    let server = test_server().await;

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "ftp://example.com/file" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body = response.json::<Value>();
    assert_eq!(body["error"], "URL must start with http:// or https://");

    // No record was inserted.
    let stats = server.get("/stats").await.json::<Value>();
    assert_eq!(stats["total_shortened_urls"], 0);
}

#[tokio::test]
async fn test_shorten_same_url_twice_yields_distinct_codes() {
    let server = test_server().await;

    let first = shorten(&server, "https://example.com/dup").await;
    let second = shorten(&server, "https://example.com/dup").await;

    assert_ne!(first["short_code"], second["short_code"]);

    let stats = server.get("/stats").await.json::<Value>();
    assert_eq!(stats["total_shortened_urls"], 2);
}

#[tokio::test]
async fn test_redirect_unknown_code_is_404() {
    let server = test_server().await;

    let response = server.get("/nosuch").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let body = response.json::<Value>();
    assert_eq!(body["error"], "Short URL not found");
}

#[tokio::test]
async fn test_health_always_succeeds() {
    let server = test_server().await;

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_stats_counts_inserts() {
    let server = test_server().await;

    for i in 0..3 {
        shorten(&server, &format!("https://example.com/{i}")).await;
    }

    let response = server.get("/stats").await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["total_shortened_urls"], 3);
    assert_eq!(body["service"], "URL Shortener");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_list_caps_at_ten_newest_first() {
    let server = test_server().await;

    let mut last_code = String::new();
    for i in 0..12 {
        let body = shorten(&server, &format!("https://example.com/page/{i}")).await;
        last_code = body["short_code"].as_str().unwrap().to_string();
    }

    let response = server.get("/list").await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    let recent = body["recent_urls"].as_array().unwrap();
    assert_eq!(recent.len(), 10);
    assert_eq!(body["total_count"], 10);

    // Newest first: the last inserted code leads the listing.
    assert_eq!(recent[0]["short_code"], last_code.as_str());
    assert_eq!(recent[0]["long_url"], "https://example.com/page/11");
    assert_eq!(
        recent[0]["short_url"],
        format!("{BASE_URL}/{last_code}")
    );

    let timestamps: Vec<chrono::DateTime<chrono::Utc>> = recent
        .iter()
        .map(|r| r["created_at"].as_str().unwrap().parse().unwrap())
        .collect();
    for pair in timestamps.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
}

#[tokio::test]
async fn test_index_serves_fallback_page() {
    let server = test_server().await;

    let response = server.get("/").await;
    response.assert_status_ok();
    assert!(response.text().contains("URL Shortener API"));
}
