// ABOUTME: System-wide constants and configuration defaults for the workout log API
// ABOUTME: Contains route paths, environment variable names, and server defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workout Log Contributors

//! # Constants Module
//!
//! Hardcoded defaults and the names of the environment variables that can
//! override them.

/// Service names
pub mod service_names {
    /// Workout log server service name
    pub const WORKOUT_LOG_SERVER: &str = "workout_log";
}

/// Network defaults
pub mod network {
    /// Default bind host
    pub const DEFAULT_HTTP_HOST: &str = "localhost";
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 6942;
    /// Response header carrying the request correlation id
    pub const REQUEST_ID_HEADER: &str = "x-request-id";
}

/// Database defaults
pub mod database {
    /// Default maximum pool size (matches the `SQLx` default)
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    /// Default time to wait for a pooled connection, in seconds
    pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;
}

/// Environment variable names
pub mod env_vars {
    /// Primary storage connection string
    pub const CONN_STR: &str = "CONN_STR";
    /// Fallback storage connection string
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Bind host override
    pub const HTTP_HOST: &str = "HTTP_HOST";
    /// Bind port override
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Pool size override
    pub const DB_MAX_CONNECTIONS: &str = "DB_MAX_CONNECTIONS";
    /// Pool acquire timeout override
    pub const DB_ACQUIRE_TIMEOUT_SECS: &str = "DB_ACQUIRE_TIMEOUT_SECS";
    /// Comma-separated CORS origins, or `*`
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Static frontend directory
    pub const FRONTEND_DIR: &str = "FRONTEND_DIR";
}

/// Static frontend defaults
pub mod frontend {
    /// Default directory holding the static frontend
    pub const DEFAULT_FRONTEND_DIR: &str = "./frontend";
    /// URL prefix the frontend assets are served under
    pub const FRONTEND_PREFIX: &str = "/frontend";
    /// Entry page served at `/`
    pub const INDEX_FILE: &str = "index.html";
}

/// Workout API route paths
pub mod routes {
    /// List every workout
    pub const ALL_WORKOUTS: &str = "/allworkouts";
    /// Fetch one workout by date
    pub const WORKOUT: &str = "/workout/:date";
    /// Create a workout
    pub const ADD_WORKOUT: &str = "/addworkout";
    /// Replace a workout's exercise data
    pub const UPDATE_WORKOUT: &str = "/updateworkout/:date";
    /// Delete a workout
    pub const REMOVE_WORKOUT: &str = "/removeworkout/:date";
}
