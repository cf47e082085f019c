//! End-to-end assertions over the HTTP surface.

use std::time::{SystemTime, UNIX_EPOCH};

use dbstatus::error::AppError;

mod common;

fn wall_clock_nanos() -> i64 {
    i64::try_from(
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
    )
    .unwrap()
}

#[tokio::test]
async fn test_root_returns_it_works_envelope() {
    let app = common::spawn_app(false).await;

    let body: serde_json::Value = reqwest::get(app.url("/"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["Status"], "success");
    assert_eq!(body["Message"], "It Works!");
    assert!(body["Data"].is_null());

    // Time is within a few seconds of test wall clock.
    let time = body["Time"].as_i64().unwrap();
    let now = wall_clock_nanos();
    assert!((now - time).abs() < 5_000_000_000);
}

#[tokio::test]
async fn test_status_reports_runtime_fields() {
    let app = common::spawn_app(false).await;

    let body: serde_json::Value = reqwest::get(app.url("/status"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["Status"], "success");
    assert_eq!(body["Message"], "System functional");

    let data = &body["Data"];
    assert_eq!(data["debug"], "false");
    assert_eq!(data["version"], dbstatus::VERSION);
    assert!(data["started"].as_str().unwrap().parse::<i64>().is_ok());
    assert!(data["uptime"].as_str().unwrap().parse::<u64>().is_ok());
}

#[tokio::test]
async fn test_status_started_stable_and_uptime_monotonic() {
    let app = common::spawn_app(false).await;

    let first: serde_json::Value = reqwest::get(app.url("/status"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let second: serde_json::Value = reqwest::get(app.url("/status"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // Set exactly once for the process lifetime.
    assert_eq!(first["Data"]["started"], second["Data"]["started"]);

    let uptime_first: u64 = first["Data"]["uptime"].as_str().unwrap().parse().unwrap();
    let uptime_second: u64 = second["Data"]["uptime"].as_str().unwrap().parse().unwrap();
    assert!(uptime_second >= uptime_first);
}

#[tokio::test]
async fn test_debug_flag_reflected_in_status() {
    let app = common::spawn_app(true).await;

    let body: serde_json::Value = reqwest::get(app.url("/status"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["Data"]["debug"], "true");
}

#[tokio::test]
async fn test_tables_failure_is_reported_to_coordinator() {
    let mut app = common::spawn_app(false).await;

    // The backing pool points at an unbound port, so the catalog query
    // fails and must surface as a fatal report, not a success envelope.
    let response = reqwest::get(app.url("/tables")).await.unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::INTERNAL_SERVER_ERROR);

    let reported = app.fatal_rx.recv().await.unwrap();
    assert!(matches!(reported, AppError::QueryFailed(_)));
    assert!(reported.is_fatal());
}

#[tokio::test]
async fn test_shutdown_stops_accepting() {
    let app = common::spawn_app(false).await;

    // Server answers before shutdown.
    assert!(reqwest::get(app.url("/")).await.is_ok());

    app.shutdown.trigger();
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_millis(500))
        .build()
        .unwrap();
    assert!(client.get(app.url("/")).send().await.is_err());
}
