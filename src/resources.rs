// ABOUTME: Shared server resources handed to every route group as axum state
// ABOUTME: Holds the workout store behind a trait object so tests can substitute it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workout Log Contributors

use crate::database_plugins::DatabaseProvider;
use std::sync::Arc;

/// Resources created once at startup and shared by all requests
#[derive(Clone)]
pub struct ServerResources {
    /// Workout store
    pub database: Arc<dyn DatabaseProvider>,
}

impl ServerResources {
    /// Wrap a store for sharing across handlers
    #[must_use]
    pub fn new(database: Arc<dyn DatabaseProvider>) -> Self {
        Self { database }
    }
}
