//! Tests for the directory client
//!
//! These tests verify:
//! - Listing decoding and field mapping
//! - One GET against a loopback endpoint, with User-Agent
//! - Non-success statuses and transport failures map to Network
//! - Undecodable bodies map to Parse

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;

use roster::config::Config;
use roster::directory::{parse_listing, DirectoryClient, DirectoryEntry};
use roster::RosterError;

// =============================================================================
// Helper Functions
// =============================================================================

const LISTING: &str = r#"[
  {"login":"mojombo","id":1,"html_url":"https://github.com/mojombo","type":"User","site_admin":false},
  {"login":"github","id":9919,"html_url":"https://github.com/github","type":"Organization","site_admin":false}
]"#;

/// Serve exactly one HTTP response; returns the base URL and the raw request
fn serve_once(status_line: &'static str, body: &'static str) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/users", listener.local_addr().unwrap());
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());

        let mut request = String::new();
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                break;
            }
            request.push_str(&line);
        }

        let mut stream = stream;
        write!(
            stream,
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        )
        .unwrap();
        stream.flush().unwrap();
        tx.send(request).unwrap();
    });

    (url, rx)
}

fn client_for(url: &str) -> DirectoryClient {
    let config = Config::builder()
        .directory_url(url)
        .directory_timeout_ms(5_000)
        .user_agent("roster-tests")
        .use_system_proxy(false)
        .build();
    DirectoryClient::new(&config).unwrap()
}

// =============================================================================
// Decoding Tests
// =============================================================================

#[test]
fn test_parse_listing_maps_fields_in_order() {
    let entries = parse_listing(LISTING.as_bytes()).unwrap();

    assert_eq!(
        entries,
        vec![
            DirectoryEntry {
                handle: "mojombo".to_string(),
                profile_url: "https://github.com/mojombo".to_string(),
                account_type: "User".to_string(),
            },
            DirectoryEntry {
                handle: "github".to_string(),
                profile_url: "https://github.com/github".to_string(),
                account_type: "Organization".to_string(),
            },
        ]
    );
}

#[test]
fn test_parse_listing_empty_array() {
    assert!(parse_listing(b"[]").unwrap().is_empty());
}

#[test]
fn test_parse_listing_rejects_wrong_shape() {
    let bodies: [&[u8]; 3] = [b"{\"message\":\"rate limited\"}", b"[{\"login\":\"x\"}]", b"<html>"];
    for body in bodies {
        assert!(matches!(parse_listing(body), Err(RosterError::Parse(_))));
    }
}

// =============================================================================
// HTTP Tests
// =============================================================================

#[test]
fn test_fetch_success() {
    let (url, request) = serve_once("200 OK", LISTING);
    let client = client_for(&url);

    let entries = client.fetch().unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].handle, "mojombo");
    assert_eq!(entries[1].account_type, "Organization");

    let request = request.recv().unwrap().to_ascii_lowercase();
    assert!(request.starts_with("get /users http/1.1"));
    assert!(request.contains("user-agent: roster-tests"));
}

#[test]
fn test_fetch_non_success_status_is_network_error() {
    let (url, _request) = serve_once("403 Forbidden", r#"{"message":"API rate limit exceeded"}"#);

    let err = client_for(&url).fetch().unwrap_err();

    match err {
        RosterError::Network(message) => assert!(message.contains("403")),
        other => panic!("expected network error, got {:?}", other),
    }
}

#[test]
fn test_fetch_bad_body_is_parse_error() {
    let (url, _request) = serve_once("200 OK", "not json");
    assert!(matches!(client_for(&url).fetch(), Err(RosterError::Parse(_))));
}

#[test]
fn test_fetch_connection_refused_is_network_error() {
    let url = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}/users", listener.local_addr().unwrap())
    };

    let err = client_for(&url).fetch().unwrap_err();

    assert!(matches!(err, RosterError::Network(_)));
    assert!(err.is_recoverable());
}
