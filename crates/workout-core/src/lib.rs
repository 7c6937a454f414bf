// ABOUTME: Core types for the workout log API
// ABOUTME: Foundation crate with error handling, the workout model and the response envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workout Log Contributors

#![deny(unsafe_code)]

//! # Workout Core
//!
//! Foundation crate providing shared types for the workout log API. It holds
//! everything that the storage layer and the HTTP layer agree on, so both can
//! depend on it without depending on each other.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the storage-level `DatabaseError`
//! - **models**: `WorkoutRecord` and the `ApiResponse` envelope

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Core data models (workout record, response envelope)
pub mod models;
