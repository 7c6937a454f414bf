// ABOUTME: Data models exchanged with clients and stored by the workout store
// ABOUTME: Re-exports the workout record and response envelope from workout-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workout Log Contributors

pub use workout_core::models::{ApiResponse, WorkoutRecord};
