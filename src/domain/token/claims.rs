//! Token header and payload records

use serde::{Deserialize, Serialize};

/// Signing algorithm carried by every token this crate issues
pub const ALGORITHM: &str = "HS256";

/// Token type carried by every token this crate issues
pub const TOKEN_TYPE: &str = "JWT";

/// Token header
///
/// Fields are declared in lexicographic order so the serialized form is
/// canonical: `{"alg":"HS256","typ":"JWT"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub alg: String,
    pub typ: String,
}

impl Header {
    /// The only header accepted by the verifier
    pub fn hs256() -> Self {
        Self {
            alg: ALGORITHM.to_string(),
            typ: TOKEN_TYPE.to_string(),
        }
    }
}

/// Expiry instant in unix seconds
///
/// Integral and fractional timestamps stay distinct so that a decoded
/// payload re-serializes to the bytes it was decoded from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Expiry {
    Seconds(i64),
    Fractional(f64),
}

impl Expiry {
    /// Whole-second expiry
    pub fn from_secs(secs: i64) -> Self {
        Self::Seconds(secs)
    }

    /// Fractional expiry, `None` for NaN or infinite values
    pub fn from_secs_f64(secs: f64) -> Option<Self> {
        secs.is_finite().then_some(Self::Fractional(secs))
    }

    pub fn as_secs_f64(&self) -> f64 {
        match *self {
            Self::Seconds(secs) => secs as f64,
            Self::Fractional(secs) => secs,
        }
    }

    /// True when the expiry lies strictly before `now`
    pub fn is_before(&self, now: f64) -> bool {
        self.as_secs_f64() < now
    }
}

impl From<i64> for Expiry {
    fn from(secs: i64) -> Self {
        Self::Seconds(secs)
    }
}

/// Token payload: expiry and authenticated principal
///
/// Fields are declared in lexicographic order (`exp`, `uid`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Expiration timestamp (Unix epoch seconds)
    pub exp: Expiry,
    /// Principal identifier
    pub uid: i64,
}

impl Claims {
    pub fn new(exp: impl Into<Expiry>, uid: i64) -> Self {
        Self {
            exp: exp.into(),
            uid,
        }
    }

    pub fn is_expired_at(&self, now: f64) -> bool {
        self.exp.is_before(now)
    }

    pub fn user_id(&self) -> i64 {
        self.uid
    }
}
