use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use super::auth;
use super::health;
use super::state::AppState;

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoints (no auth required)
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        // Endpoints guarded by bearer tokens
        .nest("/auth", auth::create_auth_router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use tower::ServiceExt;

    use crate::infrastructure::auth::{HmacTokenService, Secret, TokenConfig, TokenService};
    use crate::infrastructure::principal::InMemoryPrincipalDirectory;

    fn service() -> Arc<HmacTokenService> {
        Arc::new(HmacTokenService::new(
            TokenConfig::default(),
            Secret::from_bytes("router-test-secret").unwrap(),
        ))
    }

    async fn send(app: Router, uri: &str, token: Option<&str>) -> (StatusCode, serde_json::Value) {
        send_with(app, Method::GET, uri, token).await
    }

    async fn send_with(
        app: Router,
        method: Method,
        uri: &str,
        token: Option<&str>,
    ) -> (StatusCode, serde_json::Value) {
        let mut request = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let response = app
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);

        (status, json)
    }

    #[tokio::test]
    async fn test_health_is_public() {
        let app = create_router_with_state(AppState::new(service()));

        let (status, body) = send(app, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_whoami_without_token() {
        let app = create_router_with_state(AppState::new(service()));

        let (status, body) = send(app, "/auth/whoami", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["type"], "authentication_error");
    }

    #[tokio::test]
    async fn test_whoami_with_token() {
        let service = service();
        let issued = service.issue(1);
        let app = create_router_with_state(AppState::new(service));

        let (status, body) = send(app, "/auth/whoami", Some(&issued.token)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["uid"], 1);
    }

    #[tokio::test]
    async fn test_whoami_with_foreign_token() {
        let foreign = HmacTokenService::with_random_secret(TokenConfig::default()).issue(1);
        let app = create_router_with_state(AppState::new(service()));

        let (status, _) = send(app, "/auth/whoami", Some(&foreign.token)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_whoami_checks_directory() {
        let service = service();
        let known = service.issue(1);
        let unknown = service.issue(2);

        let directory = Arc::new(InMemoryPrincipalDirectory::with_principals([1]));
        let state = AppState::new(service).with_principals(directory);

        let app = create_router_with_state(state.clone());
        let (status, _) = send(app, "/auth/whoami", Some(&known.token)).await;
        assert_eq!(status, StatusCode::OK);

        let app = create_router_with_state(state);
        let (status, _) = send(app, "/auth/whoami", Some(&unknown.token)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_refresh_issues_accepted_token() {
        let service = service();
        let issued = service.issue(4);
        let state = AppState::new(service.clone());

        let app = create_router_with_state(state.clone());
        let (status, body) =
            send_with(app, Method::POST, "/auth/refresh", Some(&issued.token)).await;
        assert_eq!(status, StatusCode::OK);

        let refreshed = body["access_token"].as_str().unwrap();
        let claims = service.validate(refreshed).unwrap();
        assert_eq!(claims.uid, 4);
        assert_eq!(body["expiration"].as_f64().unwrap(), claims.exp.as_secs_f64());

        let app = create_router_with_state(state);
        let (status, body) = send(app, "/auth/whoami", Some(refreshed)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["uid"], 4);
    }

    #[tokio::test]
    async fn test_refresh_requires_token() {
        let app = create_router_with_state(AppState::new(service()));

        let (status, body) = send_with(app, Method::POST, "/auth/refresh", None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.get("access_token").is_none());
    }
}
