// ABOUTME: Route handlers for the workout log REST API
// ABOUTME: Translates HTTP requests into store calls and store outcomes into envelopes and status codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workout Log Contributors

//! Workout routes
//!
//! Handlers are stateless. They decode the path date and JSON body, call the
//! store once, and wrap the result in [`ApiResponse`]. Structural decoding
//! failures are 400; everything else is decided by the store's error kind.

use crate::{
    constants::routes,
    errors::{AppError, DatabaseError, ErrorCode},
    models::{ApiResponse, WorkoutRecord},
    resources::ServerResources,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Date format accepted in paths and bodies
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Body of `POST /addworkout`
pub type AddWorkoutBody = WorkoutRecord;

/// Body of `PATCH /updateworkout/:date`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateWorkoutBody {
    /// Replacement exercise data
    #[serde(alias = "Data")]
    pub data: String,
}

/// Workout routes implementation
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create all workout routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(routes::ALL_WORKOUTS, get(Self::handle_list_workouts))
            .route(routes::WORKOUT, get(Self::handle_get_workout))
            .route(routes::ADD_WORKOUT, post(Self::handle_add_workout))
            .route(routes::UPDATE_WORKOUT, patch(Self::handle_update_workout))
            .route(routes::REMOVE_WORKOUT, delete(Self::handle_remove_workout))
            .with_state(resources)
    }

    async fn handle_list_workouts(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let workouts = resources.database.list_workouts().await?;
        Ok((StatusCode::OK, Json(ApiResponse::success(workouts))).into_response())
    }

    async fn handle_get_workout(
        State(resources): State<Arc<ServerResources>>,
        Path(date): Path<String>,
    ) -> Result<Response, AppError> {
        let date = parse_date(&date)?;
        let workout = resources.database.get_workout(date).await?;
        Ok((StatusCode::OK, Json(ApiResponse::success(workout))).into_response())
    }

    async fn handle_add_workout(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<AddWorkoutBody>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(workout) = body.map_err(malformed_body)?;
        let date = resources.database.create_workout(&workout).await?;
        Ok((StatusCode::CREATED, Json(ApiResponse::success(date))).into_response())
    }

    async fn handle_update_workout(
        State(resources): State<Arc<ServerResources>>,
        Path(date): Path<String>,
        body: Result<Json<UpdateWorkoutBody>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let date = parse_date(&date)?;
        let Json(body) = body.map_err(malformed_body)?;
        let workout = resources
            .database
            .update_workout(date, &body.data)
            .await
            .map_err(update_failure)?;
        Ok((StatusCode::OK, Json(ApiResponse::success(workout))).into_response())
    }

    async fn handle_remove_workout(
        State(resources): State<Arc<ServerResources>>,
        Path(date): Path<String>,
    ) -> Result<Response, AppError> {
        let date = parse_date(&date)?;
        let removed = resources.database.delete_workout(date).await?;
        Ok((StatusCode::OK, Json(ApiResponse::success(removed))).into_response())
    }
}

/// Parse a `YYYY-MM-DD` path segment
fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| {
        AppError::invalid_format(format!("Invalid date '{raw}', expected YYYY-MM-DD: {e}"))
            .with_source(e)
    })
}

fn malformed_body(rejection: JsonRejection) -> AppError {
    AppError::invalid_format(rejection.body_text())
}

/// Update failures other than invalid input are reported as internal errors,
/// including a missing date.
fn update_failure(error: DatabaseError) -> AppError {
    match error {
        DatabaseError::InvalidInput { .. } => error.into(),
        other => AppError::new(ErrorCode::InternalError, other.to_string()).with_source(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-05-26").ok(),
            NaiveDate::from_ymd_opt(2025, 5, 26)
        );
        assert!(parse_date("26-05-2025").is_err());
        assert!(parse_date("2025-02-30").is_err());
    }

    #[test]
    fn test_update_not_found_is_internal() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 26).unwrap_or_default();
        let error = update_failure(DatabaseError::NotFound { date });
        assert_eq!(error.code, ErrorCode::InternalError);
        assert_eq!(error.http_status(), 500);

        let invalid = update_failure(DatabaseError::InvalidInput {
            field: "data",
            reason: "must not be empty".to_owned(),
        });
        assert_eq!(invalid.http_status(), 400);
    }
}
