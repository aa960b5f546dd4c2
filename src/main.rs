//! Autotriage - Vehicle Diagnostic Triage Service
//!
//! HTTP service that ingests customer vehicle complaints and produces
//! structured diagnostic cases through a five-stage agent pipeline.
//!
//! # Usage
//!
//! ```bash
//! # Run with defaults (binds 0.0.0.0:8080)
//! cargo run --release
//!
//! # Override the bind address
//! cargo run --release -- --addr 127.0.0.1:9090
//! ```
//!
//! # Environment Variables
//!
//! - `AUTOTRIAGE_SERVER_ADDR`: HTTP bind address (default: "0.0.0.0:8080")
//! - `AUTOTRIAGE_CONFIG`: path to a triage_config.toml
//! - `AUTOTRIAGE_CORS_ORIGINS`: comma-separated allowed CORS origins
//! - `RUST_LOG`: logging level (default: info)

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::info;

use autotriage::api::{create_app, ServiceState};
use autotriage::config;
use autotriage::repository::InMemoryRepository;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "autotriage")]
#[command(about = "Vehicle Diagnostic Triage Service")]
#[command(version)]
struct CliArgs {
    /// Override the server address (default: "0.0.0.0:8080")
    #[arg(short, long)]
    addr: Option<String>,
}

// ============================================================================
// Configuration
// ============================================================================

/// Application configuration
#[derive(Debug, Clone)]
struct AppConfig {
    /// HTTP server bind address
    server_addr: String,
}

impl AppConfig {
    fn from_env() -> Self {
        Self {
            server_addr: std::env::var("AUTOTRIAGE_SERVER_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
        }
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    // Load triage configuration
    let triage_config = config::TriageConfig::load();
    info!(
        defect_batches = triage_config.defect_batches.len(),
        stage_timeout_ms = triage_config.timeouts.stage_ms,
        "Triage configuration loaded"
    );
    config::init(triage_config);

    let app_config = AppConfig::from_env();
    let server_addr = args.addr.unwrap_or(app_config.server_addr);

    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!("  Autotriage - Vehicle Diagnostic Triage Service");
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let repo = Arc::new(InMemoryRepository::seeded());
    info!("✓ Reference data loaded (vehicle directory, service history)");

    let state = ServiceState::new(repo);
    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(server_addr.as_str())
        .await
        .with_context(|| format!("Failed to bind to {server_addr}"))?;
    info!("✓ HTTP server listening on {}", server_addr);

    // Graceful shutdown via Ctrl+C
    let cancel_token = CancellationToken::new();
    let shutdown_token = cancel_token.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("🛑 Received Ctrl+C, initiating shutdown...");
        shutdown_token.cancel();
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            cancel_token.cancelled().await;
            info!("HTTP server shutting down");
        })
        .await
        .context("HTTP server error")?;

    info!("Shutdown complete");
    Ok(())
}
