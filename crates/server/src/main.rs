use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use multisubs_core::{load_config, validate_config, Addon, FeedSource, HttpFeedFetcher};
use multisubs_server::{api::create_router, state::AppState};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Config file is optional; PORT and MULTISUBS_* variables apply either way
    let config_path = std::env::var("MULTISUBS_CONFIG").ok().map(PathBuf::from);
    match &config_path {
        Some(path) => info!("Loading configuration from {:?}", path),
        None => info!("No MULTISUBS_CONFIG set, using defaults and environment"),
    }

    let config = load_config(config_path.as_deref())
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!("Feed URL: {}", config.feed.url);
    info!(
        "Feed timeout: {}s, link fallback: {}",
        config.feed.timeout_secs, config.resolver.link_fallback
    );

    let fetcher: Arc<dyn FeedSource> = Arc::new(
        HttpFeedFetcher::new(config.feed.clone()).context("Failed to create feed fetcher")?,
    );
    let addon = Addon::new(fetcher, config.resolver.clone());
    info!("Using feed source: {}", addon.source_name());

    let addr = SocketAddr::new(config.server.host, config.server.port);
    let state = Arc::new(AppState::new(addon));

    // Create router
    let app = create_router(state);

    // Start server
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
