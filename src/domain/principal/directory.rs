//! Principal directory trait

use async_trait::async_trait;

use crate::domain::error::DomainError;

#[cfg(test)]
use mockall::automock;

/// Lookup of principals that may still authenticate
///
/// Tokens cannot be revoked, so the gate asks the directory whether the
/// principal named by a valid token still exists.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PrincipalDirectory: Send + Sync {
    /// Check if a principal exists
    async fn exists(&self, uid: i64) -> Result<bool, DomainError>;
}
