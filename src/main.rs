//! plugin-relay - GitHub repository snapshot relay
//!
//! # Usage
//! ```bash
//! GITHUB_TOKEN=... plugin-relay                 # Serve on port 3000
//! PORT=8080 GITHUB_TOKEN=... plugin-relay       # Serve on port 8080
//! plugin-relay --owner octo --repo widgets      # Snapshot another repository
//! ```

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use plugin_relay::config::{Cli, Config};
use plugin_relay::github::GitHubClient;
use plugin_relay::routes::{self, AppState};

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from(cli);
    if config.token().is_none() {
        warn!("GITHUB_TOKEN is not set; /plugin-files will answer 500 until it is");
    }

    let github = GitHubClient::new(&config).context("Failed to create GitHub client")?;
    let addr = config.bind_addr();
    let port = config.port;

    info!(
        repository = %config.repository,
        branch = %config.repository.branch,
        api_url = %config.api_url,
        "Relaying repository snapshot"
    );

    let app = routes::create_router(AppState::new(config, Arc::new(github)));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Server running on port {}", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
