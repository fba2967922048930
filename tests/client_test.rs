//! Gateway behavior shared by every operation.

mod common;

use std::num::NonZeroU32;

use common::{setup, ticket_json};
use freshdesk::config::Config;
use freshdesk::error::FreshdeskError;
use freshdesk::rate_limit::RateLimiter;
use freshdesk::FreshdeskClient;
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_transport_failure_short_circuits() {
    // Nothing listens on port 1.
    let config = Config::new("http://127.0.0.1:1", "test-key", "X", 10).unwrap();
    let client = FreshdeskClient::new(&config).unwrap();

    let err = client.tickets().get(1).await.unwrap_err();

    assert!(err.is_transport());
    assert!(err.status().is_none());
}

#[tokio::test]
async fn test_every_call_draws_from_the_limiter() {
    // One token per minute, so nothing refills while the test runs.
    let server = MockServer::start().await;
    let config = Config::new(server.uri(), "test-key", "X", 1).unwrap();
    let client = FreshdeskClient::new(&config).unwrap();

    Mock::given(method("GET"))
        .and(path("/api/v2/tickets/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(ticket_json(1)))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v2/companies/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    client.tickets().get(1).await.unwrap();
    client.companies().delete(1).await.unwrap();

    // 1/min + 100 slack, two tokens spent.
    let limiter = client.rate_limiter();
    for _ in 0..limiter.capacity() - 2 {
        assert!(limiter.try_acquire().is_ok());
    }
    assert!(limiter.try_acquire().is_err());
}

#[tokio::test]
async fn test_clients_can_share_one_limiter() {
    let server = MockServer::start().await;
    let config = Config::new(server.uri(), "test-key", "X", 5).unwrap();
    let limiter = RateLimiter::new(NonZeroU32::new(5).unwrap());

    let first = FreshdeskClient::with_rate_limiter(&config, limiter.clone()).unwrap();
    let second = FreshdeskClient::with_rate_limiter(&config, limiter.clone()).unwrap();

    Mock::given(method("DELETE"))
        .and(path("/api/v2/tickets/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    first.tickets().delete(1).await.unwrap();
    second.tickets().delete(1).await.unwrap();

    for _ in 0..limiter.capacity() - 2 {
        assert!(limiter.try_acquire().is_ok());
    }
    assert!(limiter.try_acquire().is_err());
}

#[tokio::test]
async fn test_connection_ok() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/tickets"))
        .and(query_param("per_page", "1"))
        .and(header("authorization", common::AUTH_HEADER))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([ticket_json(1)])))
        .expect(1)
        .mount(&server)
        .await;

    client.test_connection().await.unwrap();
}

#[tokio::test]
async fn test_connection_bad_credentials() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/tickets"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_string(r#"{"code":"invalid_credentials","message":"You have to be logged in to perform this action."}"#),
        )
        .mount(&server)
        .await;

    let err = client.test_connection().await.unwrap_err();

    assert!(matches!(err, FreshdeskError::ConnectionTest { .. }));
    assert!(err.to_string().contains("FRESHDESK_API_KEY"));
}

#[tokio::test]
async fn test_connection_unreachable() {
    let config = Config::new("http://127.0.0.1:1", "test-key", "X", 10).unwrap();
    let client = FreshdeskClient::new(&config).unwrap();

    let err = client.test_connection().await.unwrap_err();

    assert!(err.to_string().contains("FRESHDESK_BASE_URL"));
}

#[tokio::test]
async fn test_truncated_error_body_is_transport_error() {
    // Announces a 100-byte body, sends 7 bytes, then hangs up.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                return;
            }
            request.extend_from_slice(&buf[..n]);
        }
        socket
            .write_all(b"HTTP/1.1 500 Internal Server Error\r\ncontent-length: 100\r\n\r\npartial")
            .await
            .unwrap();
        socket.shutdown().await.unwrap();
    });

    let config = Config::new(format!("http://{}", addr), "test-key", "X", 10).unwrap();
    let client = FreshdeskClient::new(&config).unwrap();

    let err = client.tickets().get(1).await.unwrap_err();

    assert!(err.is_transport());
    assert!(!matches!(err, FreshdeskError::Api { .. }));
}
