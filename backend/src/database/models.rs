//! Row models for the credential store and identity directory collaborators.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// A stored credential record, keyed by identity (email).
///
/// Created on registration, read on login, deleted by the administrative
/// delete operation. Never mutated by the core.
#[derive(Debug, Clone, FromRow)]
pub struct CredentialRecord {
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new credential record.
#[derive(Debug, Clone)]
pub struct NewCredential {
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

/// A principal as exposed by the identity directory.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Principal {
    pub identity: String,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

/// One page of a directory enumeration.
#[derive(Debug, Clone)]
pub struct PrincipalPage {
    pub principals: Vec<Principal>,
    /// Cursor for the next page; `None` when the enumeration is exhausted.
    pub next_cursor: Option<String>,
}
