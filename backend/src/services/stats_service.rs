//! Aggregate statistics over the identity directory.
//!
//! Walks the directory's pagination cursor to completion and reduces the
//! principals into verification counts and signup-age buckets. A reporting
//! convenience, deliberately kept out of the token/session core.

use crate::database::models::Principal;
use crate::errors::AuthResult;
use crate::repositories::IdentityDirectory;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

const DIRECTORY_PAGE_SIZE: u32 = 100;

/// Principal counts for `GET /stats`.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_users: u64,
    pub verified_users: u64,
    pub unverified_users: u64,
}

/// Signup counts bucketed by account age for `GET /user-stats`.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserStatsResponse {
    pub total_users: u64,
    pub last_24h: u64,
    pub last_7d: u64,
    pub last_30d: u64,
    pub older: u64,
}

pub struct StatsService<'a> {
    directory: &'a dyn IdentityDirectory,
}

impl<'a> StatsService<'a> {
    pub fn new(directory: &'a dyn IdentityDirectory) -> Self {
        Self { directory }
    }

    /// Total and verified principal counts.
    pub async fn user_counts(&self) -> AuthResult<StatsResponse> {
        let principals = self.collect_principals().await?;

        let total_users = principals.len() as u64;
        let verified_users = principals.iter().filter(|p| p.verified).count() as u64;

        Ok(StatsResponse {
            total_users,
            verified_users,
            unverified_users: total_users - verified_users,
        })
    }

    /// Signups bucketed by how long ago the account was created.
    pub async fn signup_buckets(&self, now: DateTime<Utc>) -> AuthResult<UserStatsResponse> {
        let principals = self.collect_principals().await?;

        let mut stats = UserStatsResponse {
            total_users: principals.len() as u64,
            last_24h: 0,
            last_7d: 0,
            last_30d: 0,
            older: 0,
        };

        for principal in &principals {
            let age = now - principal.created_at;
            if age <= Duration::hours(24) {
                stats.last_24h += 1;
            } else if age <= Duration::days(7) {
                stats.last_7d += 1;
            } else if age <= Duration::days(30) {
                stats.last_30d += 1;
            } else {
                stats.older += 1;
            }
        }

        Ok(stats)
    }

    /// Drains the directory enumeration across all pages.
    async fn collect_principals(&self) -> AuthResult<Vec<Principal>> {
        let mut principals = Vec::new();
        let mut cursor = None;

        loop {
            let page = self
                .directory
                .list_principals(DIRECTORY_PAGE_SIZE, cursor)
                .await?;
            principals.extend(page.principals);

            match page.next_cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        Ok(principals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::models::PrincipalPage;
    use anyhow::Result;
    use async_trait::async_trait;

    /// Directory fake serving fixed principals in pages of three.
    struct PagedDirectory {
        principals: Vec<Principal>,
    }

    #[async_trait]
    impl IdentityDirectory for PagedDirectory {
        async fn list_principals(
            &self,
            _page_size: u32,
            cursor: Option<String>,
        ) -> Result<PrincipalPage> {
            let start = cursor.map(|c| c.parse::<usize>().unwrap()).unwrap_or(0);
            let end = (start + 3).min(self.principals.len());
            let principals = self.principals[start..end].to_vec();
            let next_cursor = (end < self.principals.len()).then(|| end.to_string());
            Ok(PrincipalPage {
                principals,
                next_cursor,
            })
        }

        async fn delete_by_identity(&self, _identity: &str) -> Result<bool> {
            Ok(false)
        }
    }

    fn principal(identity: &str, verified: bool, age: Duration) -> Principal {
        Principal {
            identity: identity.to_string(),
            verified,
            created_at: Utc::now() - age,
        }
    }

    #[tokio::test]
    async fn counts_span_every_page() {
        let directory = PagedDirectory {
            principals: (0..7)
                .map(|i| principal(&format!("u{i}@x.com"), i % 2 == 0, Duration::hours(1)))
                .collect(),
        };

        let stats = StatsService::new(&directory).user_counts().await.unwrap();
        assert_eq!(stats.total_users, 7);
        assert_eq!(stats.verified_users, 4);
        assert_eq!(stats.unverified_users, 3);
    }

    #[tokio::test]
    async fn signups_land_in_their_age_buckets() {
        let directory = PagedDirectory {
            principals: vec![
                principal("a@x.com", true, Duration::hours(2)),
                principal("b@x.com", true, Duration::days(3)),
                principal("c@x.com", false, Duration::days(20)),
                principal("d@x.com", false, Duration::days(90)),
            ],
        };

        let now = Utc::now();
        let stats = StatsService::new(&directory)
            .signup_buckets(now)
            .await
            .unwrap();
        assert_eq!(stats.total_users, 4);
        assert_eq!(stats.last_24h, 1);
        assert_eq!(stats.last_7d, 1);
        assert_eq!(stats.last_30d, 1);
        assert_eq!(stats.older, 1);
    }
}
