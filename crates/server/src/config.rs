//! Command line and environment configuration

use std::net::SocketAddr;

use clap::Parser;
use keyservice_crypto::OaepHash;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "keyservice-server",
    version,
    about = "In-memory RSA key management and employee directory over HTTP"
)]
pub struct Config {
    /// Bind address for the HTTP listener.
    #[arg(long, env = "KEYSERVICE_BIND", default_value = "0.0.0.0:5132")]
    pub bind: SocketAddr,

    /// OAEP digest used for RSA encryption (`sha1` or `sha256`).
    #[arg(long, env = "KEYSERVICE_OAEP_HASH", default_value_t = OaepHash::Sha1)]
    pub oaep_hash: OaepHash,

    /// Tracing filter directives, e.g. `info` or `keyservice=debug`.
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}
