//! Operational Endpoints - Liveness, Readiness and Build Identity
//!
//! Exposes /live, /ready and /version via axum 0.7 for container
//! health checks and deploy tooling. Readiness flips to 503 while
//! the process drains during graceful shutdown.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tokio::sync::{broadcast, watch};
use tracing::{info, instrument};

use crate::config::AppEnv;

/// State shared with the endpoint handlers.
#[derive(Clone)]
struct EndpointState {
    /// Validated environment, source of the /version payload.
    env: Arc<AppEnv>,
    /// Readiness flag, flipped to false during shutdown.
    ready: watch::Receiver<bool>,
}

/// Axum-based operational endpoint server.
///
/// Serves liveness (/live), readiness (/ready) and build/chain
/// identity (/version) for orchestrator probes. The server only
/// starts after the environment record has been validated, so the
/// /version payload is always well-formed.
pub struct HealthServer {
    /// Validated environment shared with handlers.
    env: Arc<AppEnv>,
    /// Readiness channel owned by the bootstrap.
    ready_rx: watch::Receiver<bool>,
    /// Bind port.
    port: u16,
}

impl HealthServer {
    /// Create a new server for the given validated environment.
    pub fn new(env: Arc<AppEnv>, ready_rx: watch::Receiver<bool>, port: u16) -> Self {
        Self { env, ready_rx, port }
    }

    /// Serve until the shutdown signal arrives.
    #[instrument(skip(self, shutdown_rx))]
    pub async fn run(
        self,
        mut shutdown_rx: broadcast::Receiver<()>,
    ) -> anyhow::Result<()> {
        let state = EndpointState {
            env: Arc::clone(&self.env),
            ready: self.ready_rx.clone(),
        };

        let app = Router::new()
            .route("/live", get(Self::liveness))
            .route("/ready", get(Self::readiness))
            .route("/version", get(Self::version))
            .with_state(state);

        let addr = format!("0.0.0.0:{}", self.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!(address = %addr, "Operational endpoint server started");

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.recv().await;
            })
            .await?;

        Ok(())
    }

    /// Liveness probe: always returns 200 if the process is running.
    async fn liveness() -> impl IntoResponse {
        (StatusCode::OK, "OK")
    }

    /// Readiness probe: 200 until shutdown begins, then 503.
    async fn readiness(State(state): State<EndpointState>) -> impl IntoResponse {
        if *state.ready.borrow() {
            (StatusCode::OK, "READY")
        } else {
            (StatusCode::SERVICE_UNAVAILABLE, "NOT READY")
        }
    }

    /// Build and chain identity from the validated environment.
    async fn version(State(state): State<EndpointState>) -> impl IntoResponse {
        Json(serde_json::json!({
            "version": state.env.version(),
            "commit": state.env.commit_hash(),
            "chain_id": state.env.chain_id(),
            "chain_name": state.env.chain_name(),
        }))
    }
}
