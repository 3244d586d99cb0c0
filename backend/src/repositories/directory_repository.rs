//! Database repository for the identity directory view.
//!
//! Sqlite-backed implementation of the [`IdentityDirectory`] collaborator.
//! Enumeration is keyset-paginated by email; the cursor is the last email of
//! the previous page.

use crate::database::models::{Principal, PrincipalPage};
use crate::repositories::IdentityDirectory;
use anyhow::Result;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteIdentityDirectory {
    /// Shared SQLite connection pool
    pool: SqlitePool,
}

impl SqliteIdentityDirectory {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityDirectory for SqliteIdentityDirectory {
    async fn list_principals(
        &self,
        page_size: u32,
        cursor: Option<String>,
    ) -> Result<PrincipalPage> {
        let after = cursor.unwrap_or_default();
        let principals = sqlx::query_as::<_, Principal>(
            r#"
            SELECT email AS identity, is_verified AS verified, created_at
            FROM users
            WHERE email > ?
            ORDER BY email
            LIMIT ?
            "#,
        )
        .bind(&after)
        .bind(i64::from(page_size))
        .fetch_all(&self.pool)
        .await?;

        // A short page means the enumeration is exhausted.
        let next_cursor = if principals.len() == page_size as usize {
            principals.last().map(|p| p.identity.clone())
        } else {
            None
        };

        Ok(PrincipalPage {
            principals,
            next_cursor,
        })
    }

    async fn delete_by_identity(&self, identity: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM users WHERE email = ?")
            .bind(identity)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
