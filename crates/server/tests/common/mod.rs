//! Common test utilities for keyservice-server integration tests

use keyservice_crypto::{from_base64, OaepHash};
use keyservice_server::{app, AppState};
use tokio::net::TcpListener;

/// A server running on an ephemeral local port
pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
    /// Shared with the running router
    pub state: AppState,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Bind the real router on `127.0.0.1:0` and serve it in the background
pub async fn spawn_server(hash: OaepHash) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("listener has an address");

    let state = AppState::new(hash);
    let router = app(state.clone());
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Server error");
    });

    TestServer {
        base_url: format!("http://{}", addr),
        client: reqwest::Client::new(),
        state,
    }
}

/// Decode a `publicKey` field back into PEM text
pub fn decode_pem(encoded: &str) -> String {
    String::from_utf8(from_base64(encoded).expect("valid base64")).expect("PEM is UTF-8")
}
