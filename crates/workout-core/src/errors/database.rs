// ABOUTME: Structured error types for workout store operations
// ABOUTME: Distinguishes not-found, conflict, invalid input and storage faults without string matching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workout Log Contributors

use chrono::NaiveDate;
use thiserror::Error;

/// Outcome of a failed store operation
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Zero rows matched the date
    #[error("No workout found for {date}")]
    NotFound {
        /// Date that was looked up
        date: NaiveDate,
    },

    /// The storage engine rejected a second record for the same date
    #[error("Workout for {date} already exists")]
    AlreadyExists {
        /// Date that is already taken
        date: NaiveDate,
    },

    /// A required field was empty
    #[error("Invalid {field}: {reason}")]
    InvalidInput {
        /// Wire name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// Any other storage or I/O fault
    #[error("{context}: {message}")]
    Internal {
        /// What the store was doing
        context: String,
        /// Driver message
        message: String,
    },
}

impl DatabaseError {
    /// Build an internal error from any displayable cause
    pub fn internal(context: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Self::Internal {
            context: context.into(),
            message: cause.to_string(),
        }
    }

    /// Whether this error means the date has no record
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(feature = "database-errors")]
impl DatabaseError {
    /// Classify a failed insert: a uniqueness violation becomes `AlreadyExists`
    #[must_use]
    pub fn from_insert(date: NaiveDate, error: &sqlx::Error) -> Self {
        match error {
            sqlx::Error::Database(db_error) if db_error.is_unique_violation() => {
                Self::AlreadyExists { date }
            }
            other => Self::internal("Failed to add workout", other),
        }
    }

    /// Classify a failed single-row read: no row becomes `NotFound`
    #[must_use]
    pub fn from_fetch(date: NaiveDate, error: &sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => Self::NotFound { date },
            other => Self::internal("Failed to get workout", other),
        }
    }
}

/// Result type for store operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
