// ABOUTME: Structured error types for database operations
// ABOUTME: Provides domain-specific errors with context and conversions into AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Errors raised by the persistence layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A query or statement failed to execute
    #[error("Database query failed: {context}")]
    QueryError {
        /// What the query was doing
        context: String,
    },

    /// Beginning, committing, or rolling back a transaction failed
    #[error("Transaction failed: {context}")]
    TransactionError {
        /// Which step failed
        context: String,
    },

    /// A row could not be decoded into its domain type
    #[error("Invalid data in {table}.{column}: {reason}")]
    InvalidData {
        /// Source table
        table: &'static str,
        /// Offending column
        column: &'static str,
        /// Why decoding failed
        reason: String,
    },

    /// A foreign key or unique constraint rejected the write
    #[error("Constraint violation: {context}")]
    ConstraintViolation {
        /// Constraint description
        context: String,
    },

    /// Connection or migration failure
    #[error("Database connection failed: {context}")]
    ConnectionError {
        /// Underlying failure
        context: String,
    },
}

impl DatabaseError {
    /// Build a query error with context
    pub fn query(context: impl Into<String>) -> Self {
        Self::QueryError {
            context: context.into(),
        }
    }
}

#[cfg(feature = "database-errors")]
impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        match &error {
            sqlx::Error::Database(db_error)
                if db_error.is_foreign_key_violation() || db_error.is_unique_violation() =>
            {
                Self::ConstraintViolation {
                    context: db_error.message().to_owned(),
                }
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                Self::ConnectionError {
                    context: error.to_string(),
                }
            }
            _ => Self::QueryError {
                context: error.to_string(),
            },
        }
    }
}

impl From<DatabaseError> for AppError {
    fn from(error: DatabaseError) -> Self {
        let code = match &error {
            DatabaseError::ConstraintViolation { .. } => ErrorCode::InvalidInput,
            DatabaseError::InvalidData { .. } => ErrorCode::StorageError,
            DatabaseError::QueryError { .. }
            | DatabaseError::TransactionError { .. }
            | DatabaseError::ConnectionError { .. } => ErrorCode::DatabaseError,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_violation_maps_to_client_error() {
        let error: AppError = DatabaseError::ConstraintViolation {
            context: "FOREIGN KEY constraint failed".into(),
        }
        .into();

        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert_eq!(error.http_status(), 400);
    }

    #[test]
    fn test_query_error_maps_to_server_error() {
        let error: AppError = DatabaseError::query("select staff").into();

        assert_eq!(error.code, ErrorCode::DatabaseError);
        assert!(error.message.contains("select staff"));
    }
}
