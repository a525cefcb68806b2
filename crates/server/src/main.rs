use anyhow::Context;
use clap::Parser;
use keyservice_server::{app, AppState, Config};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| "info".into()))
        .init();

    let state = AppState::new(config.oaep_hash);
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    info!(
        addr = %listener.local_addr()?,
        oaep_hash = %config.oaep_hash,
        "keyservice listening"
    );

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutting down"),
        Err(e) => {
            // Without a signal handler the server runs until killed
            error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await
        }
    }
}
