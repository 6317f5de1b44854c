//! API middleware components

pub mod principal_auth;

pub use principal_auth::{extract_bearer_token, RequirePrincipal};
