// ABOUTME: SQLite implementation of the workout store
// ABOUTME: Single-table storage with the date as primary key, backed by an sqlx pool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workout Log Contributors

//! `SQLite` workout store
//!
//! `exercise_data` is kept as `TEXT`; the text is returned byte for byte.

use super::{ensure_row_affected, validate_exercise_data, validate_new_workout, DatabaseProvider};
use crate::config::database::{DatabaseUrl, PoolConfig};
use crate::errors::{DatabaseError, DatabaseResult};
use crate::models::WorkoutRecord;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info, warn};

/// `SQLite` database implementation
#[derive(Clone)]
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Open (creating if needed) the database at `url` and set up the schema
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or the
    /// schema cannot be created
    pub async fn new(url: &DatabaseUrl, pool_config: &PoolConfig) -> DatabaseResult<Self> {
        let connection_string = url.to_connection_string();
        let options = SqliteConnectOptions::from_str(&connection_string)
            .map_err(|e| DatabaseError::internal("Invalid SQLite connection string", e))?
            .create_if_missing(true);

        let acquire_timeout = Duration::from_secs(pool_config.acquire_timeout_secs);

        // Each in-memory connection is its own database, so pin one for the pool's lifetime
        let pool_options = if url.is_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(pool_config.max_connections)
        };

        let pool = pool_options
            .acquire_timeout(acquire_timeout)
            .connect_with(options)
            .await
            .map_err(|e| DatabaseError::internal("Failed to connect to SQLite", e))?;

        let db = Self { pool };
        db.migrate().await?;
        Ok(db)
    }
}

fn row_to_workout(row: &sqlx::sqlite::SqliteRow) -> DatabaseResult<WorkoutRecord> {
    let read = |e: sqlx::Error| DatabaseError::internal("Failed to decode workout row", e);
    Ok(WorkoutRecord {
        date: row.try_get("date").map_err(read)?,
        workout_type: row.try_get("workout_type").map_err(read)?,
        exercise_data: row.try_get("exercise_data").map_err(read)?,
    })
}

#[async_trait]
impl DatabaseProvider for SqliteDatabase {
    fn backend_name(&self) -> &'static str {
        "SQLite"
    }

    async fn migrate(&self) -> DatabaseResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workouts (
                date DATE PRIMARY KEY,
                workout_type TEXT NOT NULL,
                exercise_data TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::internal("Failed to create workouts table", e))?;

        debug!("SQLite workouts schema ready");
        Ok(())
    }

    async fn health_check(&self) -> DatabaseResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::internal("SQLite health check failed", e))?;
        Ok(())
    }

    async fn create_workout(&self, workout: &WorkoutRecord) -> DatabaseResult<NaiveDate> {
        validate_new_workout(workout)?;

        sqlx::query(
            "INSERT INTO workouts (date, workout_type, exercise_data) VALUES ($1, $2, $3)",
        )
        .bind(workout.date)
        .bind(&workout.workout_type)
        .bind(&workout.exercise_data)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let error = DatabaseError::from_insert(workout.date, &e);
            if matches!(error, DatabaseError::AlreadyExists { .. }) {
                warn!(date = %workout.date, "Workout already exists");
            }
            error
        })?;

        info!(date = %workout.date, workout_type = %workout.workout_type, "Workout added");
        Ok(workout.date)
    }

    async fn get_workout(&self, date: NaiveDate) -> DatabaseResult<WorkoutRecord> {
        debug!(%date, "Fetching workout");
        let row = sqlx::query(
            "SELECT date, workout_type, exercise_data FROM workouts WHERE date = $1",
        )
        .bind(date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DatabaseError::from_fetch(date, &e))?;

        row_to_workout(&row)
    }

    async fn list_workouts(&self) -> DatabaseResult<Vec<WorkoutRecord>> {
        let rows = sqlx::query(
            "SELECT date, workout_type, exercise_data FROM workouts ORDER BY date ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DatabaseError::internal("Failed to list workouts", e))?;

        debug!(count = rows.len(), "Listed workouts");
        rows.iter().map(row_to_workout).collect()
    }

    async fn update_workout(
        &self,
        date: NaiveDate,
        exercise_data: &str,
    ) -> DatabaseResult<WorkoutRecord> {
        validate_exercise_data(exercise_data)?;

        let result = sqlx::query("UPDATE workouts SET exercise_data = $1 WHERE date = $2")
            .bind(exercise_data)
            .bind(date)
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::internal("Failed to update workout", e))?;

        if let Err(e) = ensure_row_affected(result.rows_affected(), date) {
            warn!(%date, "Update matched no workout");
            return Err(e);
        }

        info!(%date, "Workout updated");
        self.get_workout(date).await
    }

    async fn delete_workout(&self, date: NaiveDate) -> DatabaseResult<NaiveDate> {
        let result = sqlx::query("DELETE FROM workouts WHERE date = $1")
            .bind(date)
            .execute(&self.pool)
            .await
            .map_err(|e| DatabaseError::internal("Failed to remove workout", e))?;

        if let Err(e) = ensure_row_affected(result.rows_affected(), date) {
            warn!(%date, "Delete matched no workout");
            return Err(e);
        }

        info!(%date, "Workout removed");
        Ok(date)
    }

    async fn count_workouts(&self) -> DatabaseResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM workouts")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DatabaseError::internal("Failed to count workouts", e))?;
        Ok(u64::try_from(count).unwrap_or(0))
    }
}
