//! Canary: a minimal HTTP service for exercising process supervisors.
//!
//! This is the application entry point. It initializes tracing, loads
//! configuration from a TOML file (with environment overrides), wires up the
//! Axum router, spawns the exit supervisor that acts on admin kill requests,
//! and starts the HTTP server.

use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use canary::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER, LOG_FORMAT_JSON};
use canary::routes::create_router;
use canary::shutdown::{spawn_exit_supervisor, ShutdownHandle};
use canary::state::AppState;

/// Canary: a self-destructing HTTP service for supervisor testing
#[derive(Parser, Debug)]
#[command(name = "canary", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "canary=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));

    // Load configuration (TOML file + ADMIN_API_KEY env override)
    let config = AppConfig::load(&args.config)?;

    if config.logging.format == LOG_FORMAT_JSON {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(
        admin_enabled = config.admin.api_key.is_some(),
        "Loaded configuration"
    );
    if config.admin.api_key.is_none() {
        tracing::warn!("ADMIN_API_KEY not configured, kill endpoint is disabled");
    }

    // Terminate-request channel: the admin handler sends, the supervisor
    // task receives and performs the actual process exit.
    let (shutdown, shutdown_rx) = ShutdownHandle::new();
    spawn_exit_supervisor(shutdown_rx);

    // Create application state and router
    let state = AppState::new(config.clone(), shutdown);
    let app = create_router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.http.host, config.http.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server is running on port {}", addr.port());

    axum::serve(listener, app).await?;

    Ok(())
}
