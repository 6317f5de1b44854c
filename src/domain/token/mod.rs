//! Token domain
//!
//! Header and payload records of a signed bearer token, and the ways
//! verifying one can fail.

mod claims;
mod error;

pub use claims::{Claims, Expiry, Header, ALGORITHM, TOKEN_TYPE};
pub use error::{InvalidReason, TokenError};
