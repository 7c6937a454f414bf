// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides store construction, a failing store double and HTTP request helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workout Log Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `workout_log`

use anyhow::Result;
use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Once};
use tower::ServiceExt;
use workout_log::{
    config::{
        database::{DatabaseConfig, DatabaseUrl, PoolConfig},
        environment::{CorsConfig, FrontendConfig, ServerConfig},
    },
    database_plugins::{factory::Database, memory::MemoryDatabase, DatabaseProvider},
    errors::{DatabaseError, DatabaseResult},
    models::WorkoutRecord,
    resources::ServerResources,
    server::WorkoutServer,
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// In-memory `SQLite` configuration
pub fn memory_database_config() -> DatabaseConfig {
    DatabaseConfig {
        url: DatabaseUrl::Memory,
        pool: PoolConfig::default(),
    }
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Arc<Database>> {
    init_test_logging();
    let database = Arc::new(Database::new(&memory_database_config()).await?);
    Ok(database)
}

/// Every backend the store contract is checked against
pub async fn all_test_stores() -> Result<Vec<Arc<dyn DatabaseProvider>>> {
    let sqlite: Arc<dyn DatabaseProvider> = create_test_database().await?;
    let memory: Arc<dyn DatabaseProvider> = MemoryDatabase::new_shared();
    Ok(vec![sqlite, memory])
}

/// Configuration for a router under test; no frontend is served
pub fn test_server_config() -> ServerConfig {
    ServerConfig {
        http_host: "127.0.0.1".to_owned(),
        http_port: 0,
        database: memory_database_config(),
        cors: CorsConfig::default(),
        frontend: FrontendConfig {
            directory: PathBuf::from("./does-not-exist-frontend"),
        },
    }
}

/// Full application router over the given store
pub fn test_router(database: Arc<dyn DatabaseProvider>) -> Router {
    init_test_logging();
    let resources = Arc::new(ServerResources::new(database));
    WorkoutServer::new(test_server_config(), resources).router()
}

/// Full application router that also serves the static frontend from `frontend_dir`
pub fn test_router_with_frontend(
    database: Arc<dyn DatabaseProvider>,
    frontend_dir: &Path,
) -> Router {
    init_test_logging();
    let config = ServerConfig {
        frontend: FrontendConfig {
            directory: frontend_dir.to_path_buf(),
        },
        ..test_server_config()
    };
    WorkoutServer::new(config, Arc::new(ServerResources::new(database))).router()
}

/// Parse a `YYYY-MM-DD` literal
pub fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap_or_default()
}

/// Sample push-day record
pub fn sample_workout(raw_date: &str) -> WorkoutRecord {
    WorkoutRecord::new(
        date(raw_date),
        "horiz_push_pull",
        r#"{"bench":[{"reps":8,"kg":60}],"row":[{"reps":10,"kg":50}]}"#,
    )
}

/// Response captured for assertions
pub struct TestResponse {
    /// Status code
    pub status: StatusCode,
    /// `x-request-id` header, when present
    pub request_id: Option<String>,
    /// Decoded JSON body (`Null` when the body is not JSON)
    pub body: Value,
}

/// Send one request through `router` and decode the envelope
pub async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> Result<TestResponse> {
    let mut builder = Request::builder().method(method).uri(uri);
    let request = if let Some(json) = body {
        builder = builder.header("content-type", "application/json");
        builder.body(Body::from(json.to_owned()))?
    } else {
        builder.body(Body::empty())?
    };

    let response = router.clone().oneshot(request).await?;
    let status = response.status();
    let request_id = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    Ok(TestResponse {
        status,
        request_id,
        body,
    })
}

/// Store double whose every operation fails with an internal error
pub struct FailingDatabase;

impl FailingDatabase {
    fn failure() -> DatabaseError {
        DatabaseError::internal("Storage offline", "connection refused")
    }
}

#[async_trait]
impl DatabaseProvider for FailingDatabase {
    fn backend_name(&self) -> &'static str {
        "Failing"
    }

    async fn migrate(&self) -> DatabaseResult<()> {
        Err(Self::failure())
    }

    async fn health_check(&self) -> DatabaseResult<()> {
        Err(Self::failure())
    }

    async fn create_workout(&self, _workout: &WorkoutRecord) -> DatabaseResult<NaiveDate> {
        Err(Self::failure())
    }

    async fn get_workout(&self, _date: NaiveDate) -> DatabaseResult<WorkoutRecord> {
        Err(Self::failure())
    }

    async fn list_workouts(&self) -> DatabaseResult<Vec<WorkoutRecord>> {
        Err(Self::failure())
    }

    async fn update_workout(
        &self,
        _date: NaiveDate,
        _exercise_data: &str,
    ) -> DatabaseResult<WorkoutRecord> {
        Err(Self::failure())
    }

    async fn delete_workout(&self, _date: NaiveDate) -> DatabaseResult<NaiveDate> {
        Err(Self::failure())
    }
}
