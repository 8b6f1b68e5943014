#![allow(dead_code)]
//! Test helpers for integration tests.
//!
//! Provides:
//! - Calendar feeds resembling real timetable exports
//! - A one-shot local HTTP server standing in for the upstream feed host
//! - Settings and service construction for the proxy

use salvo::prelude::*;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use uuid::Uuid;

use icsfix_test::core::config::{FeedConfig, LoggingConfig, ServerConfig, Settings, UpstreamConfig};

/// Timetable feed with a timezone, a prefixed lecture, the free tutorial,
/// a task that matches the tutorial markers and a nested event.
pub const TIMETABLE: &str = "\
BEGIN:VCALENDAR\r\n\
VERSION:2.0\r\n\
PRODID:-//TUM//campus online//DE\r\n\
X-WR-CALNAME:Stundenplan\r\n\
BEGIN:VTIMEZONE\r\n\
TZID:Europe/Berlin\r\n\
BEGIN:STANDARD\r\n\
TZOFFSETFROM:+0200\r\n\
TZOFFSETTO:+0100\r\n\
TZNAME:CET\r\n\
DTSTART:19701025T030000\r\n\
END:STANDARD\r\n\
END:VTIMEZONE\r\n\
BEGIN:VEVENT\r\n\
UID:lecture@campus.example\r\n\
DTSTART;TZID=Europe/Berlin:20261019T100000\r\n\
SUMMARY:ETI.1.2.3.V.4 Algorithmen und Datenstrukturen\r\n\
LOCATION:Hörsaal 1\\, Gebäude 5602\r\n\
END:VEVENT\r\n\
BEGIN:VEVENT\r\n\
UID:tutorium@campus.example\r\n\
DTSTART;TZID=Europe/Berlin:20261020T140000\r\n\
SUMMARY;LANGUAGE=de:ETI.5.6.7.V.8 Einführung in die Informatik\r\n\
DESCRIPTION:<p>Freies Tutorium</p> &nbsp;Fragen zur Vorlesung\\, alle willko\r\n mmen\r\n\
END:VEVENT\r\n\
BEGIN:VTODO\r\n\
UID:todo@campus.example\r\n\
SUMMARY:ETI.1.2.3.V.4 Einführung in die Informatik\r\n\
DESCRIPTION:<b>Freies Tutorium</b> vorbereiten\r\n\
END:VTODO\r\n\
END:VCALENDAR\r\n";

/// Serves one canned HTTP response on a local port and returns the URL.
pub async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };
        let mut buf = vec![0u8; 8192];
        if socket.read(&mut buf).await.is_err() {
            return;
        }
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: text/calendar\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        if socket.write_all(response.as_bytes()).await.is_ok() {
            socket.shutdown().await.ok();
        }
    });

    format!("http://{addr}/feed.ics")
}

/// Returns a URL on a local port nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");
    drop(listener);
    format!("http://{addr}/feed.ics")
}

/// Settings with a short upstream timeout and the given feeds.
pub fn test_settings(feeds: Vec<(Uuid, String)>) -> Settings {
    Settings {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        logging: LoggingConfig {
            level: "debug".to_string(),
        },
        upstream: UpstreamConfig {
            timeout_secs: 5,
            ..UpstreamConfig::default()
        },
        feeds: feeds
            .into_iter()
            .map(|(user_id, url)| FeedConfig { user_id, url })
            .collect(),
    }
}

/// Builds the full application service for the given feeds.
pub fn create_test_service(feeds: Vec<(Uuid, String)>) -> Service {
    let router = icsfix_test::app::app::router(test_settings(feeds))
        .expect("Failed to build application router");
    Service::new(router)
}

/// Absolute test URL for a route path.
pub fn test_url(path: &str) -> String {
    format!("http://127.0.0.1:5800{path}")
}
