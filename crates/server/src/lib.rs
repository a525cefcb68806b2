//! HTTP binding for the keyservice key manager and employee directory
//!
//! ```no_run
//! use keyservice_crypto::OaepHash;
//! use keyservice_server::{app, AppState};
//!
//! # async fn run() -> std::io::Result<()> {
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:5132").await?;
//! axum::serve(listener, app(AppState::new(OaepHash::Sha1))).await
//! # }
//! ```

pub mod config;
pub mod routes;

pub use config::Config;
pub use routes::{app, ApiError, AppState};
