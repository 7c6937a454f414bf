// ABOUTME: Core data models shared by the store and the HTTP layer
// ABOUTME: Re-exports the workout record and the uniform response envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workout Log Contributors

mod envelope;
mod workout;

pub use envelope::ApiResponse;
pub use workout::WorkoutRecord;
