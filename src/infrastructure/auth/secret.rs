//! Process-lifetime signing secret

use std::fmt::Debug;
use std::sync::Arc;

use rand::RngCore;

use crate::domain::DomainError;

/// HMAC signing secret
///
/// Held only in memory. Cloning shares the same bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(Arc<[u8]>);

impl Secret {
    /// Number of random bytes drawn by `generate`
    pub const GENERATED_LEN: usize = 32;

    /// Draw a fresh random secret
    pub fn generate() -> Self {
        let mut bytes = vec![0u8; Self::GENERATED_LEN];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(bytes.into())
    }

    /// Use explicit secret bytes
    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Result<Self, DomainError> {
        let bytes = bytes.as_ref();

        if bytes.is_empty() {
            return Err(DomainError::configuration("Token secret must not be empty"));
        }

        Ok(Self(bytes.into()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for Secret {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Secret").field(&"[hidden]").finish()
    }
}
