//! Authentication gate using bearer tokens

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;

/// Message returned for every rejected credential
///
/// Missing, malformed, forged and expired tokens are indistinguishable to
/// the client.
pub const UNAUTHORIZED_MESSAGE: &str =
    "Authentication required. Provide a valid token via 'Authorization: Bearer <token>' header";

/// Extractor that requires a valid bearer token
///
/// Yields the authenticated principal's `uid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequirePrincipal(pub i64);

impl FromRequestParts<AppState> for RequirePrincipal {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(&parts.headers)?;

        let claims = state.token_service.validate(token).map_err(|e| {
            debug!(error = %e, expired = e.is_expired(), "Rejected bearer token");
            ApiError::unauthorized(UNAUTHORIZED_MESSAGE)
        })?;

        let uid = claims.user_id();

        if let Some(principals) = &state.principals {
            if !principals.exists(uid).await? {
                debug!(uid, "Rejected token for unknown principal");
                return Err(ApiError::unauthorized(UNAUTHORIZED_MESSAGE));
            }
        }

        Ok(RequirePrincipal(uid))
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header
///
/// The scheme is matched case-insensitively.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split_once(' '))
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("Bearer"))
        .map(|(_, token)| token.trim())
        .filter(|token| !token.is_empty());

    token.ok_or_else(|| {
        debug!("Missing or malformed Authorization header");
        ApiError::unauthorized(UNAUTHORIZED_MESSAGE)
    })
}
