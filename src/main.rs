//! Bold App Bootstrap — Entry Point
//!
//! Validates the environment into a typed record, initializes logging,
//! and serves the operational endpoints until SIGINT/SIGTERM. Nothing
//! else is allowed to initialize before the environment record exists:
//! a missing or malformed variable aborts startup with an error naming
//! the offending field.
//!
//! Wiring sequence:
//! 1. Build the typed environment record (fail fast on any invalid var)
//! 2. Init tracing (JSON structured logging)
//! 3. Log startup summary + every validated contract address
//! 4. Spawn the /live, /ready, /version endpoint server
//! 5. Wait for SIGINT → flip readiness → graceful shutdown

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::signal;
use tokio::sync::{broadcast, watch};
use tracing::{error, info};

mod config;
mod domain;
mod health;

use config::AppEnv;
use health::HealthServer;

/// Bind port for the operational endpoints.
const HEALTH_PORT: u16 = 8080;

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1. Validate the environment before anything else ────
    let env = Arc::new(
        AppEnv::from_env().context("Failed to load environment configuration")?,
    );

    // ── 2. Initialize structured JSON logging ───────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .json()
        .init();

    info!(
        version = env.version(),
        commit = env.commit_hash(),
        chain_id = env.chain_id(),
        chain = env.chain_name(),
        currency = %env.currency().symbol,
        rpc = %env.rpc_url(),
        "Environment validated"
    );

    for (role, address) in env.contracts.iter() {
        info!(contract = %role, address = %address, "Contract address loaded");
    }

    // ── 3. Shutdown signal channels ─────────────────────────
    let (shutdown_tx, _shutdown_rx) = broadcast::channel::<()>(1);
    let (ready_tx, ready_rx) = watch::channel(true);

    // ── 4. Spawn the operational endpoint server ────────────
    let server = HealthServer::new(Arc::clone(&env), ready_rx, HEALTH_PORT);
    let server_shutdown = shutdown_tx.subscribe();
    let server_handle = tokio::spawn(async move {
        if let Err(e) = server.run(server_shutdown).await {
            error!(error = %e, "Endpoint server failed");
        }
    });

    info!("Startup complete — serving operational endpoints");

    // ── 5. Wait for SIGINT ──────────────────────────────────
    signal::ctrl_c()
        .await
        .context("Failed to listen for shutdown signal")?;
    info!("SIGINT received, initiating graceful shutdown");

    // Readiness probe → 503 while draining
    let _ = ready_tx.send(false);
    let _ = shutdown_tx.send(());

    // Wait for the server to drain (up to 5s)
    let _ = tokio::time::timeout(Duration::from_secs(5), server_handle).await;

    info!("Shutdown complete");
    Ok(())
}
