// ABOUTME: In-memory implementation of the workout store
// ABOUTME: DashMap-backed store with the same contract as the SQL backends, used in tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workout Log Contributors

//! In-memory workout store
//!
//! Uniqueness relies on the `DashMap` entry API, so a concurrent create for
//! the same date cannot slip between a check and an insert.

use super::{validate_exercise_data, validate_new_workout, DatabaseProvider};
use crate::errors::{DatabaseError, DatabaseResult};
use crate::models::WorkoutRecord;
use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// In-memory database implementation
#[derive(Debug, Default)]
pub struct MemoryDatabase {
    workouts: DashMap<NaiveDate, WorkoutRecord>,
}

impl MemoryDatabase {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store wrapped in `Arc`
    #[must_use]
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

#[async_trait]
impl DatabaseProvider for MemoryDatabase {
    fn backend_name(&self) -> &'static str {
        "Memory"
    }

    async fn migrate(&self) -> DatabaseResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> DatabaseResult<()> {
        Ok(())
    }

    async fn create_workout(&self, workout: &WorkoutRecord) -> DatabaseResult<NaiveDate> {
        validate_new_workout(workout)?;

        match self.workouts.entry(workout.date) {
            Entry::Occupied(_) => {
                warn!(date = %workout.date, "Workout already exists");
                Err(DatabaseError::AlreadyExists { date: workout.date })
            }
            Entry::Vacant(entry) => {
                entry.insert(workout.clone());
                info!(date = %workout.date, workout_type = %workout.workout_type, "Workout added");
                Ok(workout.date)
            }
        }
    }

    async fn get_workout(&self, date: NaiveDate) -> DatabaseResult<WorkoutRecord> {
        debug!(%date, "Fetching workout");
        self.workouts
            .get(&date)
            .map(|w| w.value().clone())
            .ok_or(DatabaseError::NotFound { date })
    }

    async fn list_workouts(&self) -> DatabaseResult<Vec<WorkoutRecord>> {
        let mut workouts: Vec<WorkoutRecord> =
            self.workouts.iter().map(|w| w.value().clone()).collect();
        workouts.sort_by_key(|w| w.date);
        Ok(workouts)
    }

    async fn update_workout(
        &self,
        date: NaiveDate,
        exercise_data: &str,
    ) -> DatabaseResult<WorkoutRecord> {
        validate_exercise_data(exercise_data)?;

        let Some(mut workout) = self.workouts.get_mut(&date) else {
            warn!(%date, "Update matched no workout");
            return Err(DatabaseError::NotFound { date });
        };
        exercise_data.clone_into(&mut workout.exercise_data);
        info!(%date, "Workout updated");
        Ok(workout.clone())
    }

    async fn delete_workout(&self, date: NaiveDate) -> DatabaseResult<NaiveDate> {
        if self.workouts.remove(&date).is_none() {
            warn!(%date, "Delete matched no workout");
            return Err(DatabaseError::NotFound { date });
        }
        info!(%date, "Workout removed");
        Ok(date)
    }

    async fn count_workouts(&self) -> DatabaseResult<u64> {
        Ok(self.workouts.len() as u64)
    }
}
