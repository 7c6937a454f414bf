// ABOUTME: HTTP server assembly and lifecycle for the workout log API
// ABOUTME: Composes routes, static frontend and middleware layers, then serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workout Log Contributors

//! Server wiring
//!
//! Layer order, outermost first: request id, HTTP trace, CORS.

use crate::config::environment::{FrontendConfig, ServerConfig};
use crate::constants::frontend;
use crate::middleware::{request_id_middleware, setup_cors};
use crate::resources::ServerResources;
use crate::routes::{HealthRoutes, WorkoutRoutes};
use anyhow::{Context, Result};
use axum::{middleware, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// The workout log HTTP server
pub struct WorkoutServer {
    config: ServerConfig,
    resources: Arc<ServerResources>,
}

impl WorkoutServer {
    /// Create a server over already-initialized resources
    #[must_use]
    pub const fn new(config: ServerConfig, resources: Arc<ServerResources>) -> Self {
        Self { config, resources }
    }

    /// Build the complete router with all routes and layers
    #[must_use]
    pub fn router(&self) -> Router {
        let api = Router::new()
            .merge(WorkoutRoutes::routes(Arc::clone(&self.resources)))
            .merge(HealthRoutes::routes(Arc::clone(&self.resources)));

        with_frontend(api, &self.config.frontend)
            .layer(setup_cors(&self.config.cors))
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn(request_id_middleware))
    }

    /// Bind the listener and serve until Ctrl-C or SIGTERM
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be bound or the server fails
    pub async fn run(self) -> Result<()> {
        let addr = self.config.bind_addr();
        let router = self.router();

        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind HTTP listener on {addr}"))?;
        info!(addr = %addr, "Workout Log HTTP server listening");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server error")?;

        info!("HTTP server shutdown complete");
        Ok(())
    }
}

/// Serve the static frontend at `/` and `/frontend/*` when its directory exists
fn with_frontend(router: Router, config: &FrontendConfig) -> Router {
    if !config.is_available() {
        warn!(
            dir = %config.directory.display(),
            "Frontend directory not found, static frontend disabled"
        );
        return router;
    }

    let index = config.directory.join(frontend::INDEX_FILE);
    info!(dir = %config.directory.display(), "Serving static frontend");
    router
        .route_service("/", ServeFile::new(index))
        .nest_service(frontend::FRONTEND_PREFIX, ServeDir::new(&config.directory))
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown"),
        () = terminate => info!("Received SIGTERM, initiating graceful shutdown"),
    }
}
