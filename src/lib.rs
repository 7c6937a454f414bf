// ABOUTME: Main library entry point for the workout log API
// ABOUTME: Exposes the date-keyed workout store and its HTTP surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workout Log Contributors

#![deny(unsafe_code)]

//! # Workout Log
//!
//! A small HTTP backend for logging workouts. Each record is keyed by its
//! calendar date and carries a workout type and an opaque exercise-data
//! document.
//!
//! ## Architecture
//!
//! - **Store** (`database_plugins`): one trait, with `SQLite`, `PostgreSQL`
//!   and in-memory backends
//! - **Routes** (`routes`): stateless handlers translating HTTP to store calls
//! - **Server** (`server`): router assembly, middleware and lifecycle
//! - **Config** (`config`): environment-driven settings
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use workout_log::config::environment::ServerConfig;
//! use workout_log::database_plugins::factory::Database;
//! use workout_log::resources::ServerResources;
//! use workout_log::server::WorkoutServer;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let database = Database::new(&config.database).await?;
//!     let resources = Arc::new(ServerResources::new(Arc::new(database)));
//!     WorkoutServer::new(config, resources).run().await
//! }
//! ```

/// Configuration management
pub mod config;

/// Application constants and defaults
pub mod constants;

/// Workout store abstraction and backends
pub mod database_plugins;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Workout record and response envelope models
pub mod models;

/// Shared server resources
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Server assembly and lifecycle
pub mod server;
