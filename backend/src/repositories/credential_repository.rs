//! Database repository for credential records.
//!
//! Sqlite-backed implementation of the [`CredentialStore`] collaborator.

use crate::database::models::{CredentialRecord, NewCredential};
use crate::repositories::CredentialStore;
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

/// Repository for credential store operations.
pub struct SqliteCredentialStore {
    /// Shared SQLite connection pool
    pool: SqlitePool,
}

impl SqliteCredentialStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for SqliteCredentialStore {
    async fn find_by_identity(&self, identity: &str) -> Result<Option<CredentialRecord>> {
        let record = sqlx::query_as::<_, CredentialRecord>(
            r#"
            SELECT email, password_hash, role, is_verified, created_at
            FROM users WHERE email = ?
            "#,
        )
        .bind(identity)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn create(&self, credential: NewCredential) -> Result<bool> {
        // INSERT OR IGNORE keeps duplicate detection race-free under the
        // primary key instead of a check-then-insert.
        let result = sqlx::query(
            r#"
            INSERT OR IGNORE INTO users (email, password_hash, role, is_verified, created_at)
            VALUES (?, ?, ?, 0, ?)
            "#,
        )
        .bind(&credential.email)
        .bind(&credential.password_hash)
        .bind(&credential.role)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, identity: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE email = ?")
            .bind(identity)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
