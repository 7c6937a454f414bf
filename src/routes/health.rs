// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Liveness always answers; readiness round-trips to the workout store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workout Log Contributors

//! Health check routes for load balancers and process supervisors

use crate::errors::AppError;
use crate::resources::ServerResources;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tracing::warn;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
            .with_state(resources)
    }

    async fn handle_health() -> Json<serde_json::Value> {
        Json(serde_json::json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    async fn handle_ready(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let backend = resources.database.backend_name();
        if let Err(e) = resources.database.health_check().await {
            warn!(backend, error = %e, "Readiness check failed");
            return Err(
                AppError::unavailable(format!("{backend} store is not ready")).with_source(e),
            );
        }

        Ok((
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "ready",
                "backend": backend,
                "timestamp": chrono::Utc::now().to_rfc3339()
            })),
        )
            .into_response())
    }
}
