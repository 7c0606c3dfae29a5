//! Unit of Work Pattern Implementation
//!
//! Provides transactional boundaries for database operations.
//! Ensures all operations within a business transaction succeed or fail together.

use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};

use crate::shared::error::AppError;

/// Transaction context that wraps a SQLx transaction.
///
/// Dropping the context without calling [`commit`](Self::commit) rolls the
/// transaction back.
pub struct TransactionContext {
    tx: Transaction<'static, Sqlite>,
}

impl TransactionContext {
    /// Create a new transaction context.
    pub fn new(tx: Transaction<'static, Sqlite>) -> Self {
        Self { tx }
    }

    /// Connection to run queries on inside the transaction.
    pub fn conn(&mut self) -> &mut SqliteConnection {
        &mut self.tx
    }

    /// Commit the transaction.
    pub async fn commit(self) -> Result<(), AppError> {
        self.tx.commit().await.map_err(AppError::Database)
    }

    /// Rollback the transaction.
    pub async fn rollback(self) -> Result<(), AppError> {
        self.tx.rollback().await.map_err(AppError::Database)
    }
}

/// Execute a closure within a transaction.
///
/// The closure receives the transaction and hands it back with its result;
/// the transaction is committed on success. On error the context is dropped,
/// which rolls every pending change back, and the error is returned as is.
///
/// # Example
/// ```ignore
/// let deleted = with_transaction(&pool, |mut tx| async move {
///     sqlx::query("DELETE FROM messages WHERE user_id = ?")
///         .bind(&id)
///         .execute(tx.conn())
///         .await?;
///     Ok::<_, AppError>((true, tx))
/// }).await?;
/// ```
pub async fn with_transaction<F, Fut, T>(pool: &SqlitePool, f: F) -> Result<T, AppError>
where
    F: FnOnce(TransactionContext) -> Fut,
    Fut: std::future::Future<Output = Result<(T, TransactionContext), AppError>>,
{
    let tx = pool.begin().await.map_err(AppError::Database)?;
    let ctx = TransactionContext::new(tx);

    match f(ctx).await {
        Ok((result, ctx)) => {
            ctx.commit().await?;
            Ok(result)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Transaction rolled back");
            Err(e)
        }
    }
}
