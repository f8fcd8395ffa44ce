// ABOUTME: RAII transaction guard for multi-statement replace operations
// ABOUTME: Rolls back automatically on drop unless explicitly committed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Booking Admin Server Contributors

//! Transaction management with an RAII guard
//!
//! ```text
//! let mut guard = TransactionGuard::begin(&pool).await?;
//! sqlx::query("DELETE FROM staff_schedule ...").execute(guard.executor()?).await?;
//! sqlx::query("INSERT INTO staff_schedule ...").execute(guard.executor()?).await?;
//! guard.commit().await?;
//! ```
//!
//! If the guard is dropped before `commit()` (an early `?` return or a
//! cancelled request future), the transaction is rolled back.

use crate::errors::DatabaseError;
use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};
use tracing::{debug, warn};

/// RAII guard for `SQLite` transactions ensuring rollback on drop
pub struct TransactionGuard<'c> {
    transaction: Option<Transaction<'c, Sqlite>>,
    committed: bool,
}

impl TransactionGuard<'static> {
    /// Begin a transaction on the pool
    ///
    /// # Errors
    ///
    /// Returns an error if no connection is available or `BEGIN` fails
    pub async fn begin(pool: &SqlitePool) -> Result<Self, DatabaseError> {
        let transaction = pool
            .begin()
            .await
            .map_err(|e| DatabaseError::TransactionError {
                context: format!("Failed to begin transaction: {e}"),
            })?;
        Ok(Self::new(transaction))
    }
}

impl<'c> TransactionGuard<'c> {
    /// Wrap an existing transaction
    #[must_use]
    pub fn new(transaction: Transaction<'c, Sqlite>) -> Self {
        debug!("TransactionGuard created - transaction will auto-rollback if not committed");
        Self {
            transaction: Some(transaction),
            committed: false,
        }
    }

    /// Commit the transaction and consume the guard
    ///
    /// # Errors
    ///
    /// Returns an error if the guard was already consumed or `COMMIT` fails
    pub async fn commit(mut self) -> Result<(), DatabaseError> {
        let Some(tx) = self.transaction.take() else {
            return Err(DatabaseError::TransactionError {
                context: "Transaction already consumed - cannot commit".to_owned(),
            });
        };

        tx.commit()
            .await
            .map_err(|e| DatabaseError::TransactionError {
                context: format!("Transaction commit failed: {e}"),
            })?;
        self.committed = true;
        debug!("TransactionGuard committed successfully");
        Ok(())
    }

    /// Roll back explicitly and consume the guard
    ///
    /// # Errors
    ///
    /// Returns an error if the guard was already consumed or `ROLLBACK` fails
    pub async fn rollback(mut self) -> Result<(), DatabaseError> {
        let Some(tx) = self.transaction.take() else {
            return Err(DatabaseError::TransactionError {
                context: "Transaction already consumed - cannot rollback".to_owned(),
            });
        };

        tx.rollback()
            .await
            .map_err(|e| DatabaseError::TransactionError {
                context: format!("Transaction rollback failed: {e}"),
            })?;
        debug!("TransactionGuard rolled back explicitly");
        Ok(())
    }

    /// Connection to run statements inside the transaction
    ///
    /// # Errors
    ///
    /// Returns an error if the guard is used after commit
    pub fn executor(&mut self) -> Result<&mut SqliteConnection, DatabaseError> {
        self.transaction
            .as_deref_mut()
            .ok_or_else(|| DatabaseError::TransactionError {
                context: "Transaction already consumed - guard used after commit".to_owned(),
            })
    }
}

impl Drop for TransactionGuard<'_> {
    fn drop(&mut self) {
        if self.transaction.is_some() && !self.committed {
            warn!("TransactionGuard dropped without commit - transaction will be rolled back");
        }
    }
}
