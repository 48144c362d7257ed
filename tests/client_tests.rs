//! Integration tests for the ClayClient using mockito for HTTP mocking.

use clay_mcp_server::{ClayApiError, ClayClient};
use clay_mcp_server::Config;
use mockito::{Matcher, Server};
use serde_json::json;
use std::net::TcpListener;
use std::thread;
use std::time::{Duration, Instant};

/// Start a listener that hands every accepted connection to `handle`.
fn spawn_listener(handle: fn(std::net::TcpStream)) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            handle(stream);
        }
    });
    format!("http://{}", address)
}

#[test]
fn test_post_json_sends_body_and_headers() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/search")
        .match_header("authorization", "ApiKey test-api-key")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"query": "founders", "limit": 3})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"contacts":[{"id":1,"name":"Ada Lovelace"}]}"#)
        .create();

    let client = ClayClient::with_base_url(server.url());
    let body = client
        .post_json(
            "/search",
            &json!({"query": "founders", "limit": 3}),
            Some("ApiKey test-api-key"),
        )
        .unwrap();

    mock.assert();
    assert_eq!(body, r#"{"contacts":[{"id":1,"name":"Ada Lovelace"}]}"#);
}

#[test]
fn test_post_json_without_authorization() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/get-groups")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body("[]")
        .create();

    let client = ClayClient::with_base_url(server.url());
    let body = client.post_json("/get-groups", &json!({}), None).unwrap();

    mock.assert();
    assert_eq!(body, "[]");
}

#[test]
fn test_error_status_body_is_returned_verbatim() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/get-contact")
        .with_status(401)
        .with_body(r#"{"error":"Invalid API key"}"#)
        .create();

    let client = ClayClient::with_base_url(server.url());
    let body = client
        .post_json("/get-contact", &json!({"contact_id": 1}), Some("ApiKey bad"))
        .unwrap();

    mock.assert();
    assert_eq!(body, r#"{"error":"Invalid API key"}"#);
    assert_eq!(client.metrics().http_errors_total(), 0);
}

#[test]
fn test_server_error_is_not_retried() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/aggregate")
        .with_status(500)
        .with_body("Internal Server Error")
        .expect(1)
        .create();

    let client = ClayClient::with_base_url(server.url());
    let body = client
        .post_json("/aggregate", &json!({"query": "how many"}), None)
        .unwrap();

    mock.assert();
    assert_eq!(body, "Internal Server Error");
}

#[test]
fn test_nested_path_is_joined_to_base() {
    let mut server = Server::new();

    let mock = server
        .mock("POST", "/tools/moments/notes")
        .with_status(200)
        .with_body(r#"{"notes":[]}"#)
        .create();

    let client = ClayClient::with_base_url(format!("{}/tools", server.url()));
    let body = client
        .post_json(
            "/moments/notes",
            &json!({"start": "now-1w", "end": "now"}),
            Some("ApiKey k"),
        )
        .unwrap();

    mock.assert();
    assert_eq!(body, r#"{"notes":[]}"#);
}

#[test]
fn test_connection_failure_is_an_error() {
    // Nothing listens on port 9 of the loopback interface
    let client = ClayClient::with_base_url("http://127.0.0.1:9".to_string());
    let result = client.post_json("/search", &json!({"query": "x"}), None);

    match result {
        Err(ClayApiError::HttpError(_)) => {}
        other => panic!("Expected connection failure, got: {:?}", other),
    }
    assert_eq!(client.metrics().http_errors_total(), 1);
    assert_eq!(client.metrics().http_requests_total(), 1);
}

#[test]
fn test_dropped_connection_is_not_a_timeout() {
    // Accept, then close without answering
    let base_url = spawn_listener(drop);
    let client = ClayClient::with_base_url(base_url);

    let result = client.post_json("/search", &json!({"query": "x"}), None);

    match result {
        Err(ClayApiError::HttpError(message)) => assert_ne!(message, "Request timeout"),
        other => panic!("Expected a failed call, got: {:?}", other),
    }
    assert_eq!(client.metrics().http_errors_total(), 1);
}

#[test]
fn test_unanswered_request_times_out() {
    // Accept and hold the connection open past the client's deadline
    let base_url = spawn_listener(|stream| {
        thread::spawn(move || {
            thread::sleep(Duration::from_secs(5));
            drop(stream);
        });
    });
    let config = Config {
        clay_api_url: base_url,
        request_timeout: 1,
        ..Config::default()
    };
    let client = ClayClient::new(&config);

    let start = Instant::now();
    let result = client.post_json("/search", &json!({"query": "x"}), None);

    assert!(matches!(result, Err(ClayApiError::Timeout)), "got: {:?}", result);
    assert!(start.elapsed() < Duration::from_secs(5));
}
