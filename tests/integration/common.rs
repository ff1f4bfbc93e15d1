// Common utilities for integration tests

use async_trait::async_trait;
use relayo_client::prelude::*;
use std::net::TcpListener;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Options used against mock servers: no retries, no waiting, full logging
pub fn test_options() -> ClientOptions {
    ClientOptions {
        max_retries: 0,
        retry_delay: 0,
        log_requests: true,
        log_responses: true,
        ..Default::default()
    }
}

/// Creates a reqwest backed client pointing at the mock server
pub fn client_for(server: &mockito::ServerGuard) -> RelayoClient {
    setup_logger();
    RelayoClient::create(&server.url(), test_options()).expect("mock server url is valid")
}

/// Same as [`client_for`] with a token already set
pub fn authenticated_client_for(server: &mockito::ServerGuard) -> RelayoClient {
    let client = client_for(server);
    client.set_token("test-token");
    client
}

/// Returns a local URL nobody listens on
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// Transport that always fails and counts how often it was called
#[derive(Default)]
pub struct FailingSender {
    attempts: AtomicUsize,
}

impl FailingSender {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HttpSend for FailingSender {
    async fn send(&self, _request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(TransportError::new("connection reset by peer"))
    }
}

/// Client over a [`FailingSender`]
pub fn failing_client(max_retries: u32) -> (RelayoClient, Arc<FailingSender>) {
    let sender = Arc::new(FailingSender::default());
    let options = ClientOptions {
        max_retries,
        retry_delay: 0,
        ..Default::default()
    };
    let config = Config::with_options("https://api.example.com", options).expect("valid url");
    (RelayoClient::new(config, sender.clone()), sender)
}
