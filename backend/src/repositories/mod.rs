//! Collaborator interfaces and their database-backed implementations.
//!
//! The core consumes the credential store and identity directory through
//! object-safe traits so handlers and services receive them as injected
//! dependencies rather than reaching for shared globals.

use crate::database::models::{CredentialRecord, NewCredential, PrincipalPage};
use anyhow::Result;
use async_trait::async_trait;

pub mod credential_repository;
pub mod directory_repository;

/// The credential store collaborator: user records keyed by identity (email).
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Looks up a credential record by identity.
    async fn find_by_identity(&self, identity: &str) -> Result<Option<CredentialRecord>>;

    /// Creates a new credential record.
    ///
    /// Returns `false` when a record for the identity already exists; the
    /// existing record is left untouched.
    async fn create(&self, credential: NewCredential) -> Result<bool>;

    /// Deletes the record for an identity. Returns `false` when absent.
    async fn delete(&self, identity: &str) -> Result<bool>;
}

/// The managed identity directory collaborator.
///
/// Exposes verification status and creation time per principal, enumerated by
/// pagination cursor.
#[async_trait]
pub trait IdentityDirectory: Send + Sync {
    /// Returns one page of principals, starting after `cursor`.
    async fn list_principals(
        &self,
        page_size: u32,
        cursor: Option<String>,
    ) -> Result<PrincipalPage>;

    /// Removes a directory entry. Returns `false` when the entry was already
    /// absent; callers treat that as success.
    async fn delete_by_identity(&self, identity: &str) -> Result<bool>;
}
