// ABOUTME: Environment-based server configuration loaded once at startup
// ABOUTME: Reads bind address, storage connection string, CORS and frontend settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workout Log Contributors

//! Server configuration from environment variables
//!
//! Configuration is environment-only. The server binary loads a `.env` file
//! into the environment before calling [`ServerConfig::from_env`]; real
//! environment variables win over it.

use super::database::DatabaseConfig;
use crate::constants::{env_vars, frontend, network};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use tracing::info;

/// Cross-origin settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// `*` or a comma-separated list of origins
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_owned(),
        }
    }
}

/// Static frontend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontendConfig {
    /// Directory holding `index.html` and its assets
    pub directory: PathBuf,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(frontend::DEFAULT_FRONTEND_DIR),
        }
    }
}

impl FrontendConfig {
    /// Whether the configured directory exists and can be served
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.directory.is_dir()
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind the HTTP listener on
    pub http_host: String,
    /// Port to bind the HTTP listener on
    pub http_port: u16,
    /// Storage connection settings
    pub database: DatabaseConfig,
    /// Cross-origin settings
    pub cors: CorsConfig,
    /// Static frontend settings
    pub frontend: FrontendConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if the storage connection string is missing or a
    /// numeric value cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        Ok(Self {
            http_host: env_var_or(env_vars::HTTP_HOST, network::DEFAULT_HTTP_HOST),
            http_port: parse_port()?,
            database: DatabaseConfig::from_env()?,
            cors: CorsConfig {
                allowed_origins: env_var_or(env_vars::CORS_ALLOWED_ORIGINS, "*"),
            },
            frontend: FrontendConfig {
                directory: PathBuf::from(env_var_or(
                    env_vars::FRONTEND_DIR,
                    frontend::DEFAULT_FRONTEND_DIR,
                )),
            },
        })
    }

    /// `host:port` the listener binds to
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    /// Loggable summary with credentials redacted
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Workout Log configuration:\n  \
             - Listen: {}\n  \
             - Database: {}\n  \
             - Pool: max {} connections, {}s acquire timeout\n  \
             - CORS origins: {}\n  \
             - Frontend: {} ({})",
            self.bind_addr(),
            self.database.url,
            self.database.pool.max_connections,
            self.database.pool.acquire_timeout_secs,
            self.cors.allowed_origins,
            self.frontend.directory.display(),
            if self.frontend.is_available() {
                "served"
            } else {
                "not found, skipped"
            }
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_port() -> AppResult<u16> {
    match env::var(env_vars::HTTP_PORT) {
        Ok(raw) => raw.trim().parse().map_err(|e| {
            AppError::config_invalid(format!("Invalid {} value '{raw}': {e}", env_vars::HTTP_PORT))
        }),
        Err(_) => Ok(network::DEFAULT_HTTP_PORT),
    }
}
