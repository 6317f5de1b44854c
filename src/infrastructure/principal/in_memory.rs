//! In-memory principal directory

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::RwLock;

use crate::domain::{DomainError, PrincipalDirectory};

/// In-memory implementation of PrincipalDirectory
#[derive(Debug)]
pub struct InMemoryPrincipalDirectory {
    principals: RwLock<HashSet<i64>>,
}

impl InMemoryPrincipalDirectory {
    /// Creates a directory holding the given principals
    pub fn with_principals(uids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            principals: RwLock::new(uids.into_iter().collect()),
        }
    }
}

#[async_trait]
impl PrincipalDirectory for InMemoryPrincipalDirectory {
    async fn exists(&self, uid: i64) -> Result<bool, DomainError> {
        let principals = self
            .principals
            .read()
            .map_err(|_| DomainError::internal("Failed to acquire lock"))?;

        Ok(principals.contains(&uid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_directory() {
        let directory = InMemoryPrincipalDirectory::with_principals(Vec::new());

        assert!(!directory.exists(1).await.unwrap());
    }

    #[tokio::test]
    async fn test_with_principals() {
        let directory = InMemoryPrincipalDirectory::with_principals([1, 2, 3]);

        assert!(directory.exists(2).await.unwrap());
        assert!(!directory.exists(4).await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_principals() {
        let directory = InMemoryPrincipalDirectory::with_principals([7, 7]);

        assert!(directory.exists(7).await.unwrap());
    }
}
