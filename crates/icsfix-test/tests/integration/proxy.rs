//! Tests for fetching upstream feeds and serving them through the proxy.

use salvo::http::StatusCode;
use salvo::test::{ResponseExt, TestClient};
use uuid::Uuid;

use icsfix_test::core::config::UpstreamConfig;
use icsfix_test::core::constants::{ICS_CONTENT_TYPE, PROXY_ROUTE_PREFIX};
use icsfix_test::rfc::rfc::ical::parse;
use icsfix_test::service::fetch_and_modify;
use icsfix_test::service::upstream::{UpstreamClient, UpstreamError};

use super::helpers::{TIMETABLE, create_test_service, serve_once, test_url, unreachable_url};

fn client() -> UpstreamClient {
    UpstreamClient::new(&UpstreamConfig {
        timeout_secs: 5,
        ..UpstreamConfig::default()
    })
    .expect("Failed to build upstream client")
}

// ============================================================================
// fetch_and_modify
// ============================================================================

/// ## Summary
/// A reachable feed is fetched and patched.
#[test_log::test(tokio::test)]
async fn fetch_and_modify_patches_feed() {
    let url = serve_once("200 OK", TIMETABLE).await;

    let output = fetch_and_modify(&client(), &url).await.unwrap();
    let ical = parse(std::str::from_utf8(&output).unwrap()).unwrap();

    let summaries: Vec<_> = ical.events().iter().filter_map(|e| e.summary()).collect();
    assert_eq!(
        summaries,
        vec![
            "Algorithmen und Datenstrukturen",
            "Einführung in die Informatik Tutorium"
        ]
    );
}

/// ## Summary
/// A non-2xx upstream status is an upstream error, not a parse error.
#[test_log::test(tokio::test)]
async fn fetch_and_modify_reports_upstream_status() {
    let url = serve_once("503 Service Unavailable", "maintenance").await;

    let err = fetch_and_modify(&client(), &url).await.unwrap_err();

    assert!(err.is_upstream_error());
    assert!(!err.is_parse_error());
}

/// ## Summary
/// An unreachable upstream is an upstream error.
#[test_log::test(tokio::test)]
async fn fetch_and_modify_reports_unreachable_upstream() {
    let url = unreachable_url().await;

    let err = fetch_and_modify(&client(), &url).await.unwrap_err();

    assert!(err.is_upstream_error());
}

/// ## Summary
/// A successful response that is not a calendar is a parse error.
#[test_log::test(tokio::test)]
async fn fetch_and_modify_reports_invalid_body() {
    let url = serve_once("200 OK", "<!DOCTYPE html><html></html>").await;

    let err = fetch_and_modify(&client(), &url).await.unwrap_err();

    assert!(err.is_parse_error());
    assert!(!err.is_upstream_error());
}

/// ## Summary
/// Unsupported URL schemes are rejected before any request is made.
#[test_log::test(tokio::test)]
async fn fetch_rejects_unsupported_scheme() {
    let err = client().fetch("file:///etc/passwd").await.unwrap_err();
    assert!(matches!(err, UpstreamError::InvalidUrl { .. }));
}

// ============================================================================
// HTTP proxy route
// ============================================================================

/// ## Summary
/// The proxy serves the patched feed as `text/calendar`.
#[test_log::test(tokio::test)]
async fn proxy_serves_patched_feed() {
    let user_id = Uuid::new_v4();
    let url = serve_once("200 OK", TIMETABLE).await;
    let service = create_test_service(vec![(user_id, url)]);

    let mut resp = TestClient::get(test_url(&format!("{PROXY_ROUTE_PREFIX}/{user_id}")))
        .send(&service)
        .await;

    assert_eq!(resp.status_code, Some(StatusCode::OK));
    assert_eq!(
        resp.headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some(ICS_CONTENT_TYPE)
    );

    let body = resp.take_string().await.unwrap();
    assert!(body.starts_with("BEGIN:VCALENDAR\r\n"));
    assert!(body.contains("SUMMARY:Algorithmen und Datenstrukturen\r\n"));
    assert!(body.contains("SUMMARY;LANGUAGE=de:Einführung in die Informatik Tutorium\r\n"));
}

/// ## Summary
/// Malformed user ids are rejected with 400.
#[test_log::test(tokio::test)]
async fn proxy_rejects_malformed_user_id() {
    let service = create_test_service(Vec::new());

    let resp = TestClient::get(test_url(&format!("{PROXY_ROUTE_PREFIX}/12345")))
        .send(&service)
        .await;

    assert_eq!(resp.status_code, Some(StatusCode::BAD_REQUEST));
}

/// ## Summary
/// Users without a configured feed get 404.
#[test_log::test(tokio::test)]
async fn proxy_unknown_user_is_not_found() {
    let service = create_test_service(vec![(
        Uuid::new_v4(),
        "https://campus.example/feed.ics".to_string(),
    )]);

    let resp = TestClient::get(test_url(&format!("{PROXY_ROUTE_PREFIX}/{}", Uuid::new_v4())))
        .send(&service)
        .await;

    assert_eq!(resp.status_code, Some(StatusCode::NOT_FOUND));
}

/// ## Summary
/// Upstream failures surface as 502 without leaking the feed URL.
#[test_log::test(tokio::test)]
async fn proxy_upstream_failure_is_bad_gateway() {
    let user_id = Uuid::new_v4();
    let url = format!("{}?token=secret", unreachable_url().await);
    let service = create_test_service(vec![(user_id, url)]);

    let mut resp = TestClient::get(test_url(&format!("{PROXY_ROUTE_PREFIX}/{user_id}")))
        .send(&service)
        .await;

    assert_eq!(resp.status_code, Some(StatusCode::BAD_GATEWAY));
    assert!(!resp.take_string().await.unwrap().contains("secret"));
}

/// ## Summary
/// The healthcheck route answers without touching any feed.
#[test_log::test(tokio::test)]
async fn healthcheck_is_ok() {
    let service = create_test_service(Vec::new());

    let mut resp = TestClient::get(test_url("/api/v1/app/healthcheck"))
        .send(&service)
        .await;

    assert_eq!(resp.status_code, Some(StatusCode::OK));
    assert_eq!(resp.take_string().await.unwrap(), "OK");
}
