// ABOUTME: Error types for the workout log server
// ABOUTME: Re-exports the shared error taxonomy from workout-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workout Log Contributors

//! Error handling
//!
//! The definitions live in `workout_core::errors` so that the model crate
//! and the server share one taxonomy.

pub use workout_core::errors::*;
