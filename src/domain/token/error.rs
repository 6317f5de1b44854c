use thiserror::Error;

/// Token verification failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Malformed, tampered, or not produced by this system
    #[error("Invalid token: {0}")]
    Invalid(InvalidReason),

    /// Well-formed and correctly signed, but past its expiry
    #[error("Token has expired")]
    Expired,
}

/// The check an invalid token failed
///
/// Kept for logging and tests only; callers at the HTTP boundary must not
/// expose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidReason {
    #[error("expected three dot-separated segments")]
    Structure,

    #[error("segment is not valid base64url")]
    Encoding,

    #[error("header is not a JSON object")]
    MalformedHeader,

    #[error("payload is not a valid claims object")]
    MalformedPayload,

    #[error("header is missing alg or typ")]
    MissingHeaderField,

    #[error("unsupported algorithm")]
    UnsupportedAlgorithm,

    #[error("unsupported token type")]
    UnsupportedType,

    #[error("signature mismatch")]
    SignatureMismatch,
}

impl TokenError {
    pub fn is_expired(&self) -> bool {
        matches!(self, Self::Expired)
    }

}

impl From<InvalidReason> for TokenError {
    fn from(reason: InvalidReason) -> Self {
        Self::Invalid(reason)
    }
}
