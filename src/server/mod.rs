//! Mock medal API and HTML standings page.
//!
//! ```text
//! GET /api/medals   JSON array of {code, gold, silver, bronze}, or 500 {error}
//! GET /?sort=&theme= server-rendered standings table
//! ```
//!
//! The data file is read fresh for every request. The API route adds an
//! artificial delay and fails at random so clients can exercise their
//! loading and retry paths.

mod api;
mod page;
pub mod store;

pub use api::ApiError;
pub use store::{MedalStore, StoreError};

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use rand::Rng;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerSettings;

/// Artificial latency and failure applied to the API route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaultInjection {
    min_latency: Duration,
    max_latency: Duration,
    failure_rate: f64,
}

impl FaultInjection {
    pub fn new(min_latency: Duration, max_latency: Duration, failure_rate: f64) -> Self {
        let (min_latency, max_latency) = if min_latency <= max_latency {
            (min_latency, max_latency)
        } else {
            (max_latency, min_latency)
        };
        Self {
            min_latency,
            max_latency,
            failure_rate: failure_rate.clamp(0.0, 1.0),
        }
    }

    /// No delay, never fails.
    pub fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO, 0.0)
    }

    pub fn from_settings(settings: &ServerSettings) -> Self {
        Self::new(
            Duration::from_millis(settings.min_latency_ms),
            Duration::from_millis(settings.max_latency_ms),
            settings.failure_rate,
        )
    }

    /// Delay for one request, uniform in `[min, max]`.
    pub fn latency(&self) -> Duration {
        if self.min_latency == self.max_latency {
            return self.min_latency;
        }
        let millis = rand::thread_rng()
            .gen_range(self.min_latency.as_millis() as u64..=self.max_latency.as_millis() as u64);
        Duration::from_millis(millis)
    }

    /// Whether this request should fail.
    pub fn should_fail(&self) -> bool {
        self.failure_rate > 0.0 && rand::thread_rng().gen_bool(self.failure_rate)
    }
}

/// Shared state for all routes.
#[derive(Debug, Clone)]
pub struct ServerState {
    store: Arc<MedalStore>,
    faults: FaultInjection,
}

impl ServerState {
    pub fn new(store: MedalStore, faults: FaultInjection) -> Self {
        Self {
            store: Arc::new(store),
            faults,
        }
    }
}

/// Build the router for the API and the standings page.
pub fn build_router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(page::standings))
        .route("/api/medals", get(api::get_medals))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until Ctrl-C.
pub async fn serve(settings: &ServerSettings) -> Result<()> {
    let store = MedalStore::new(&settings.data_file);
    info!(path = %store.path().display(), "serving medal data");

    let state = ServerState::new(store, FaultInjection::from_settings(settings));
    let listener = TcpListener::bind((settings.host.as_str(), settings.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", settings.host, settings.port))?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
    }
}
