//! Process-scoped token issuance and validation

use std::fmt::Debug;

use super::codec;
use super::secret::Secret;
use crate::domain::token::{Claims, TokenError};

/// Default token lifetime, two hours
pub const DEFAULT_EXPIRES_IN_SECS: u64 = 7200;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Token lifetime in seconds
    pub expires_in_secs: u64,
}

impl TokenConfig {
    /// Create new token configuration
    pub fn new(expires_in_secs: u64) -> Self {
        Self { expires_in_secs }
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            expires_in_secs: DEFAULT_EXPIRES_IN_SECS,
        }
    }
}

/// An issued token and the expiry it carries
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    /// Expiry in unix seconds
    pub expires_at: f64,
}

/// Trait for token operations
pub trait TokenService: Send + Sync + Debug {
    /// Issue a token for a principal, expiring after the configured lifetime
    fn issue(&self, uid: i64) -> IssuedToken;

    /// Validate a token and return its claims
    fn validate(&self, token: &str) -> Result<Claims, TokenError>;

    /// Get the token lifetime in seconds
    fn expires_in_secs(&self) -> u64;
}

/// Token service signing with HMAC-SHA256 under a single secret
#[derive(Clone)]
pub struct HmacTokenService {
    config: TokenConfig,
    secret: Secret,
}

impl Debug for HmacTokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacTokenService")
            .field("config", &self.config)
            .field("secret", &"[hidden]")
            .finish()
    }
}

impl HmacTokenService {
    /// Create a new token service with the given configuration and secret
    pub fn new(config: TokenConfig, secret: Secret) -> Self {
        Self { config, secret }
    }

    /// Create a token service with a freshly generated secret
    pub fn with_random_secret(config: TokenConfig) -> Self {
        Self::new(config, Secret::generate())
    }
}

impl TokenService for HmacTokenService {
    fn issue(&self, uid: i64) -> IssuedToken {
        let expiry = codec::expiry_from_now(self.config.expires_in_secs);
        let token = codec::issue(expiry, uid, self.secret.as_bytes());

        IssuedToken {
            token,
            expires_at: expiry.as_secs_f64(),
        }
    }

    fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        let (_, claims) = codec::decode(token, self.secret.as_bytes())?;
        Ok(claims)
    }

    fn expires_in_secs(&self) -> u64 {
        self.config.expires_in_secs
    }
}
