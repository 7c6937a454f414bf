// ABOUTME: Workout record model keyed by calendar date
// ABOUTME: Carries the workout type label and an opaque exercise-data document
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workout Log Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One workout session, unique per date
///
/// `exercise_data` is structured text (usually a JSON document) that is
/// stored and returned verbatim. Nothing in this crate parses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Session date, the natural primary key
    #[serde(alias = "Date")]
    pub date: NaiveDate,
    /// Short category label such as `push` or `legs`
    #[serde(rename = "wtype", alias = "Wtype")]
    pub workout_type: String,
    /// Opaque exercise payload
    #[serde(rename = "data", alias = "Data")]
    pub exercise_data: String,
}

impl WorkoutRecord {
    /// Create a new workout record
    pub fn new(
        date: NaiveDate,
        workout_type: impl Into<String>,
        exercise_data: impl Into<String>,
    ) -> Self {
        Self {
            date,
            workout_type: workout_type.into(),
            exercise_data: exercise_data.into(),
        }
    }
}
