// ABOUTME: HTTP middleware for cross-origin access and request correlation
// ABOUTME: Provides the CORS layer and request ID generation used by the server router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workout Log Contributors

/// Cross-origin configuration
pub mod cors;
/// Request correlation ids
pub mod request_id;

pub use cors::setup_cors;
pub use request_id::{request_id_middleware, RequestId};
