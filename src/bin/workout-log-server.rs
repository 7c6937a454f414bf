// ABOUTME: Server binary for the workout log API
// ABOUTME: Loads configuration, connects the workout store and serves HTTP until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workout Log Contributors

//! # Workout Log Server Binary
//!
//! Startup failures (configuration, store connection, schema setup) end the
//! process with an error.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info, warn};
use workout_log::{
    config::environment::ServerConfig,
    database_plugins::{factory::Database, DatabaseProvider},
    logging,
    resources::ServerResources,
    server::WorkoutServer,
};

/// Command-line overrides for the environment configuration
#[derive(Parser)]
#[command(name = "workout-log-server")]
#[command(about = "Workout Log API - date-keyed workout storage over HTTP")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind host
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Loaded before logging so RUST_LOG and LOG_FORMAT may come from .env
    let dotenv = dotenvy::dotenv();
    logging::init_from_env()?;
    if let Err(e) = dotenv {
        warn!("No .env file found or failed to load: {e}");
    }

    let mut config = ServerConfig::from_env().context("Failed to load configuration")?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.http_host = host;
    }

    info!("Starting Workout Log API");
    info!("{}", config.summary());

    let database = Database::new(&config.database)
        .await
        .context("Failed to initialize workout store")?;
    info!("Database backend: {}", database.backend_info());

    match database.count_workouts().await {
        Ok(count) => info!("Workout store holds {count} workouts"),
        Err(e) => error!("Failed to count workouts: {e}"),
    }

    let resources = Arc::new(ServerResources::new(Arc::new(database)));
    WorkoutServer::new(config, resources).run().await
}
