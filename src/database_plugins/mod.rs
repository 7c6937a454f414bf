// ABOUTME: Storage abstraction for workout records keyed by date
// ABOUTME: Plugin architecture with SQLite, PostgreSQL and in-memory backends behind one trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workout Log Contributors

//! Workout store
//!
//! Handlers only see [`DatabaseProvider`]. Every backend enforces the same
//! contract: one record per date, updates touch only the exercise data, and
//! an operation that matches zero rows is [`DatabaseError::NotFound`].

use crate::errors::{DatabaseError, DatabaseResult};
use crate::models::WorkoutRecord;
use async_trait::async_trait;
use chrono::NaiveDate;

pub mod factory;
pub mod memory;
pub mod sqlite;

#[cfg(feature = "postgresql")]
pub mod postgres;

/// Core storage abstraction trait
///
/// Implementations must be safe to share across request tasks; the server
/// holds one instance behind an `Arc<dyn DatabaseProvider>`.
#[async_trait]
pub trait DatabaseProvider: Send + Sync {
    /// Short backend label for logs and health output
    fn backend_name(&self) -> &'static str;

    /// Create the workouts relation if it does not exist
    async fn migrate(&self) -> DatabaseResult<()>;

    /// Round-trip to the backend to prove it is reachable
    async fn health_check(&self) -> DatabaseResult<()>;

    /// Insert a new record and return its date
    ///
    /// Fails with `AlreadyExists` when the date is taken.
    async fn create_workout(&self, workout: &WorkoutRecord) -> DatabaseResult<NaiveDate>;

    /// Fetch the record for `date`
    async fn get_workout(&self, date: NaiveDate) -> DatabaseResult<WorkoutRecord>;

    /// Every stored record, ordered by date ascending
    async fn list_workouts(&self) -> DatabaseResult<Vec<WorkoutRecord>>;

    /// Replace the exercise data for `date`, leaving the workout type as is
    async fn update_workout(
        &self,
        date: NaiveDate,
        exercise_data: &str,
    ) -> DatabaseResult<WorkoutRecord>;

    /// Delete the record for `date` and return the date
    async fn delete_workout(&self, date: NaiveDate) -> DatabaseResult<NaiveDate>;

    /// Number of stored records
    async fn count_workouts(&self) -> DatabaseResult<u64> {
        Ok(self.list_workouts().await?.len() as u64)
    }
}

/// Reject records with an empty type or empty exercise data
///
/// # Errors
///
/// Returns `InvalidInput` naming the first empty field
pub fn validate_new_workout(workout: &WorkoutRecord) -> DatabaseResult<()> {
    if workout.workout_type.trim().is_empty() {
        return Err(DatabaseError::InvalidInput {
            field: "wtype",
            reason: "must not be empty".to_owned(),
        });
    }
    validate_exercise_data(&workout.exercise_data)
}

/// Reject empty exercise data
///
/// # Errors
///
/// Returns `InvalidInput` when `exercise_data` is blank
pub fn validate_exercise_data(exercise_data: &str) -> DatabaseResult<()> {
    if exercise_data.trim().is_empty() {
        return Err(DatabaseError::InvalidInput {
            field: "data",
            reason: "must not be empty".to_owned(),
        });
    }
    Ok(())
}

/// Map a zero-row write to `NotFound`
pub(crate) fn ensure_row_affected(rows_affected: u64, date: NaiveDate) -> DatabaseResult<()> {
    if rows_affected == 0 {
        return Err(DatabaseError::NotFound { date });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 26).unwrap_or_default()
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let blank_type = WorkoutRecord::new(date(), "  ", "{}");
        assert!(matches!(
            validate_new_workout(&blank_type),
            Err(DatabaseError::InvalidInput { field: "wtype", .. })
        ));

        let blank_data = WorkoutRecord::new(date(), "legs", "");
        assert!(matches!(
            validate_new_workout(&blank_data),
            Err(DatabaseError::InvalidInput { field: "data", .. })
        ));

        assert!(validate_new_workout(&WorkoutRecord::new(date(), "legs", "{}")).is_ok());
    }

    #[test]
    fn test_zero_rows_is_not_found() {
        assert!(ensure_row_affected(0, date()).is_err_and(|e| e.is_not_found()));
        assert!(ensure_row_affected(1, date()).is_ok());
    }
}
