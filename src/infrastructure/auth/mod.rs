//! Authentication infrastructure module
//!
//! This module provides HMAC-SHA256 signed bearer tokens: the unpadded
//! base64url codec, token issuance and verification, the signing secret and
//! the process-scoped token service.

pub mod base64url;
mod codec;
mod secret;
mod service;

pub use base64url::DecodeError;
pub use codec::{decode, decode_at, expiry_from_now, issue, unix_now};
pub use secret::Secret;
pub use service::{
    HmacTokenService, IssuedToken, TokenConfig, TokenService, DEFAULT_EXPIRES_IN_SECS,
};
