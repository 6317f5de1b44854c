//! Bearer Auth
//!
//! Self-contained bearer token authentication:
//! - HMAC-SHA256 signed tokens with canonical JSON header and payload
//! - Strict verification (structure, header, signature, then expiry)
//! - An axum extractor that guards routes with `Authorization: Bearer`

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::DomainError;
use infrastructure::{
    auth::{HmacTokenService, TokenService},
    principal::InMemoryPrincipalDirectory,
};
use tracing::info;

/// Create the application state from configuration
///
/// The token secret is created here, once per process, unless the
/// configuration pins one.
pub fn create_app_state(config: &AppConfig) -> Result<AppState, DomainError> {
    let secret = config.auth.resolve_secret()?;
    let token_service: Arc<dyn TokenService> =
        Arc::new(HmacTokenService::new(config.auth.token_config(), secret));

    let mut state = AppState::new(token_service);

    if !config.auth.principals.is_empty() {
        info!(
            count = config.auth.principals.len(),
            "Confirming principals against the in-memory directory"
        );

        let directory =
            InMemoryPrincipalDirectory::with_principals(config.auth.principals.iter().copied());
        state = state.with_principals(Arc::new(directory));
    }

    Ok(state)
}
