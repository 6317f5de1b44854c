//! Domain layer - token records, principals and errors

pub mod error;
pub mod principal;
pub mod token;

pub use error::DomainError;
pub use principal::PrincipalDirectory;
pub use token::{Claims, Expiry, Header, InvalidReason, TokenError};
