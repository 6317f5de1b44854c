//! Infrastructure layer - token signing, principal lookup and logging

pub mod auth;
pub mod logging;
pub mod principal;
