pub mod http_tests;
pub mod mock_tests;

// Test utilities
use crate::config::ClientConfig;
use axum::Router;
use std::time::Duration;

/// Test helper to serve a router on an ephemeral local port.
/// Returns the base URL of the server.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().expect("Failed to read local address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Test server failed");
    });
    format!("http://{addr}")
}

/// Test helper to build a client config pointing at a test server
pub fn test_config(base_url: &str) -> ClientConfig {
    ClientConfig::default()
        .with_base_url(base_url)
        .with_request_timeout(Duration::from_secs(5))
        .with_connect_timeout(Duration::from_secs(2))
}
