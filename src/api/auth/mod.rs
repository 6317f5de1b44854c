//! Authentication API endpoints

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::debug;

use crate::api::middleware::RequirePrincipal;
use crate::api::state::AppState;
use crate::infrastructure::auth::IssuedToken;

/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/whoami", get(whoami))
        .route("/refresh", post(refresh))
}

/// Authenticated principal response
#[derive(Debug, Serialize)]
pub struct WhoAmIResponse {
    pub uid: i64,
}

/// Freshly issued token
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Expiry in unix seconds
    pub expiration: f64,
}

impl From<IssuedToken> for TokenResponse {
    fn from(issued: IssuedToken) -> Self {
        Self {
            access_token: issued.token,
            expiration: issued.expires_at,
        }
    }
}

/// Get the authenticated principal
///
/// GET /auth/whoami
pub async fn whoami(RequirePrincipal(uid): RequirePrincipal) -> Json<WhoAmIResponse> {
    Json(WhoAmIResponse { uid })
}

/// Exchange a valid token for a new one with a full lifetime
///
/// POST /auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    RequirePrincipal(uid): RequirePrincipal,
) -> Json<TokenResponse> {
    let issued = state.token_service.issue(uid);
    debug!(uid, expiration = issued.expires_at, "Refreshed token");

    Json(issued.into())
}
