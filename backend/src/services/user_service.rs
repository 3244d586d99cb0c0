//! User administration business logic.

use crate::errors::{AuthError, AuthResult};
use crate::repositories::{CredentialStore, IdentityDirectory};

pub struct UserService<'a> {
    credentials: &'a dyn CredentialStore,
    directory: &'a dyn IdentityDirectory,
}

impl<'a> UserService<'a> {
    pub fn new(credentials: &'a dyn CredentialStore, directory: &'a dyn IdentityDirectory) -> Self {
        Self {
            credentials,
            directory,
        }
    }

    /// Deletes a user by identity.
    ///
    /// The credential store delete is authoritative. The directory delete that
    /// follows is best-effort: a failure there is logged and swallowed, and an
    /// already-absent entry counts as done.
    pub async fn delete_user(&self, identity: &str) -> AuthResult<()> {
        let deleted = self.credentials.delete(identity).await?;
        if !deleted {
            return Err(AuthError::not_found("User", identity));
        }

        if let Err(err) = self.directory.delete_by_identity(identity).await {
            tracing::warn!("Directory delete for '{identity}' failed: {err:#}");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::{CredentialRecord, NewCredential, PrincipalPage};
    use anyhow::{Result, anyhow};
    use async_trait::async_trait;

    struct StoreFake {
        present: bool,
    }

    #[async_trait]
    impl CredentialStore for StoreFake {
        async fn find_by_identity(&self, _identity: &str) -> Result<Option<CredentialRecord>> {
            Ok(None)
        }

        async fn create(&self, _credential: NewCredential) -> Result<bool> {
            Ok(true)
        }

        async fn delete(&self, _identity: &str) -> Result<bool> {
            Ok(self.present)
        }
    }

    struct FailingDirectory;

    #[async_trait]
    impl IdentityDirectory for FailingDirectory {
        async fn list_principals(
            &self,
            _page_size: u32,
            _cursor: Option<String>,
        ) -> Result<PrincipalPage> {
            Err(anyhow!("directory down"))
        }

        async fn delete_by_identity(&self, _identity: &str) -> Result<bool> {
            Err(anyhow!("directory down"))
        }
    }

    #[tokio::test]
    async fn directory_failure_does_not_fail_the_delete() {
        let service = UserService::new(&StoreFake { present: true }, &FailingDirectory);
        assert!(service.delete_user("a@x.com").await.is_ok());
    }

    #[tokio::test]
    async fn missing_user_is_not_found() {
        let service = UserService::new(&StoreFake { present: false }, &FailingDirectory);
        assert!(matches!(
            service.delete_user("a@x.com").await,
            Err(AuthError::NotFound { .. })
        ));
    }
}
