//! Application state for shared services

use std::sync::Arc;

use crate::domain::PrincipalDirectory;
use crate::infrastructure::auth::TokenService;

/// Application state shared by every request
#[derive(Clone)]
pub struct AppState {
    pub token_service: Arc<dyn TokenService>,
    /// When unset, a valid token is enough to authenticate
    pub principals: Option<Arc<dyn PrincipalDirectory>>,
}

impl AppState {
    pub fn new(token_service: Arc<dyn TokenService>) -> Self {
        Self {
            token_service,
            principals: None,
        }
    }

    /// Confirm principals against a directory after their token validates
    pub fn with_principals(mut self, principals: Arc<dyn PrincipalDirectory>) -> Self {
        self.principals = Some(principals);
        self
    }
}
