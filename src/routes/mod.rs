// ABOUTME: Route module organization for the workout log HTTP endpoints
// ABOUTME: Groups the workout CRUD routes and the health endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workout Log Contributors

//! HTTP routes
//!
//! Each module exposes a `*Routes::routes(resources)` constructor returning a
//! stateless `Router` that the server merges.

/// Health check and readiness routes
pub mod health;
/// Workout CRUD routes
pub mod workouts;

pub use health::HealthRoutes;
pub use workouts::WorkoutRoutes;
