// ABOUTME: Database factory selecting the workout store backend from the connection string
// ABOUTME: Wraps SQLite and PostgreSQL behind one enum that delegates every store operation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workout Log Contributors

//! Database factory
//!
//! Backend selection happens once at startup; afterwards the server only
//! sees `Arc<dyn DatabaseProvider>`.

use super::sqlite::SqliteDatabase;
use super::DatabaseProvider;
use crate::config::database::{DatabaseConfig, DatabaseUrl};
use crate::errors::DatabaseResult;
use crate::models::WorkoutRecord;
use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{debug, info};

#[cfg(feature = "postgresql")]
use super::postgres::PostgresDatabase;
#[cfg(not(feature = "postgresql"))]
use crate::errors::DatabaseError;

/// Supported database types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseType {
    /// Embedded file or in-memory database
    SQLite,
    /// Client-server database
    PostgreSQL,
}

/// Database instance wrapper that delegates to the appropriate implementation
#[derive(Clone)]
pub enum Database {
    /// `SQLite` backend
    SQLite(SqliteDatabase),
    /// `PostgreSQL` backend
    #[cfg(feature = "postgresql")]
    PostgreSQL(PostgresDatabase),
}

impl Database {
    /// Connect to the configured backend and create the schema
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A `PostgreSQL` URL is given without the `postgresql` feature
    /// - The connection cannot be established
    /// - Schema setup fails
    pub async fn new(config: &DatabaseConfig) -> DatabaseResult<Self> {
        debug!("Detecting database type from URL: {}", config.url);
        let db_type = database_type_of(&config.url)?;
        info!("Detected database type: {:?}", db_type);

        match db_type {
            DatabaseType::SQLite => {
                let db = SqliteDatabase::new(&config.url, &config.pool).await?;
                info!("SQLite database initialized successfully");
                Ok(Self::SQLite(db))
            }
            #[cfg(feature = "postgresql")]
            DatabaseType::PostgreSQL => {
                let db = PostgresDatabase::new(&config.url, &config.pool).await?;
                info!("PostgreSQL database initialized successfully");
                Ok(Self::PostgreSQL(db))
            }
            #[cfg(not(feature = "postgresql"))]
            DatabaseType::PostgreSQL => Err(postgres_disabled()),
        }
    }

    /// Get a descriptive string for the current database backend
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::SQLite(_) => "SQLite (Local Development)",
            #[cfg(feature = "postgresql")]
            Self::PostgreSQL(_) => "PostgreSQL (Cloud-Ready)",
        }
    }
}

fn database_type_of(url: &DatabaseUrl) -> DatabaseResult<DatabaseType> {
    if url.is_postgresql() {
        #[cfg(feature = "postgresql")]
        return Ok(DatabaseType::PostgreSQL);

        #[cfg(not(feature = "postgresql"))]
        return Err(postgres_disabled());
    }
    Ok(DatabaseType::SQLite)
}

#[cfg(not(feature = "postgresql"))]
fn postgres_disabled() -> DatabaseError {
    DatabaseError::internal(
        "Unsupported database",
        "PostgreSQL connection string detected, but the 'postgresql' feature is not enabled",
    )
}

#[async_trait]
impl DatabaseProvider for Database {
    fn backend_name(&self) -> &'static str {
        match self {
            Self::SQLite(db) => db.backend_name(),
            #[cfg(feature = "postgresql")]
            Self::PostgreSQL(db) => db.backend_name(),
        }
    }

    async fn migrate(&self) -> DatabaseResult<()> {
        match self {
            Self::SQLite(db) => db.migrate().await,
            #[cfg(feature = "postgresql")]
            Self::PostgreSQL(db) => db.migrate().await,
        }
    }

    async fn health_check(&self) -> DatabaseResult<()> {
        match self {
            Self::SQLite(db) => db.health_check().await,
            #[cfg(feature = "postgresql")]
            Self::PostgreSQL(db) => db.health_check().await,
        }
    }

    async fn create_workout(&self, workout: &WorkoutRecord) -> DatabaseResult<NaiveDate> {
        match self {
            Self::SQLite(db) => db.create_workout(workout).await,
            #[cfg(feature = "postgresql")]
            Self::PostgreSQL(db) => db.create_workout(workout).await,
        }
    }

    async fn get_workout(&self, date: NaiveDate) -> DatabaseResult<WorkoutRecord> {
        match self {
            Self::SQLite(db) => db.get_workout(date).await,
            #[cfg(feature = "postgresql")]
            Self::PostgreSQL(db) => db.get_workout(date).await,
        }
    }

    async fn list_workouts(&self) -> DatabaseResult<Vec<WorkoutRecord>> {
        match self {
            Self::SQLite(db) => db.list_workouts().await,
            #[cfg(feature = "postgresql")]
            Self::PostgreSQL(db) => db.list_workouts().await,
        }
    }

    async fn update_workout(
        &self,
        date: NaiveDate,
        exercise_data: &str,
    ) -> DatabaseResult<WorkoutRecord> {
        match self {
            Self::SQLite(db) => db.update_workout(date, exercise_data).await,
            #[cfg(feature = "postgresql")]
            Self::PostgreSQL(db) => db.update_workout(date, exercise_data).await,
        }
    }

    async fn delete_workout(&self, date: NaiveDate) -> DatabaseResult<NaiveDate> {
        match self {
            Self::SQLite(db) => db.delete_workout(date).await,
            #[cfg(feature = "postgresql")]
            Self::PostgreSQL(db) => db.delete_workout(date).await,
        }
    }

    async fn count_workouts(&self) -> DatabaseResult<u64> {
        match self {
            Self::SQLite(db) => db.count_workouts().await,
            #[cfg(feature = "postgresql")]
            Self::PostgreSQL(db) => db.count_workouts().await,
        }
    }
}
