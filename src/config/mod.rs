// ABOUTME: Configuration management module for server settings
// ABOUTME: Groups environment loading and database connection configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workout Log Contributors

//! Configuration module
//!
//! - **environment**: bind address, CORS and frontend settings, `.env` loading
//! - **database**: connection string parsing and pool sizing

/// Database connection configuration
pub mod database;
/// Environment and server configuration
pub mod environment;
