//! Bearer authentication for the HTTP surface.
//!
//! `auth_middleware` runs on every route. It resolves a bearer token into an
//! `AuthenticatedUser` request extension; handlers that need a caller take
//! the `RequireAuth` extractor. Requests with no token pass through, so the
//! public question bank and health routes sit behind the same layer.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::{bearer_token, SessionValidator};

pub type AuthState = Arc<dyn SessionValidator>;

fn auth_failure(status: StatusCode, code: &'static str, message: &str) -> Response {
    (status, Json(json!({ "error": message, "code": code }))).into_response()
}

pub async fn auth_middleware(
    State(validator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(bearer_token)
        .map(str::to_owned)
    else {
        return next.run(request).await;
    };

    match validator.validate(&token).await {
        Ok(user) => {
            tracing::debug!(user_id = %user.id, "request authenticated");
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(err) if err.requires_reauthentication() => {
            tracing::debug!(error = %err, "bearer token rejected");
            auth_failure(StatusCode::UNAUTHORIZED, "AUTH_ERROR", &err.to_string())
        }
        Err(err) => {
            tracing::error!(error = %err, "session validator unavailable");
            auth_failure(
                StatusCode::SERVICE_UNAVAILABLE,
                "AUTH_ERROR",
                "Authentication service unavailable",
            )
        }
    }
}

/// The authenticated caller. Rejects with 401 when the request carried no
/// accepted token.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(RequireAuth)
            .ok_or(AuthRejection::Unauthenticated)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRejection {
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            AuthRejection::Unauthenticated => auth_failure(
                StatusCode::UNAUTHORIZED,
                "UNAUTHENTICATED",
                "Authentication required",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockSessionValidator;
    use crate::domain::foundation::UserId;
    use axum::{body::Body, middleware, routing::get, Router};
    use tower::ServiceExt;

    fn known_user() -> AuthenticatedUser {
        AuthenticatedUser::new(
            UserId::new("user-123").unwrap(),
            Some("test@example.com".to_string()),
            None,
        )
    }

    async fn whoami(RequireAuth(user): RequireAuth) -> String {
        user.id.to_string()
    }

    fn app(validator: MockSessionValidator) -> Router {
        let state: AuthState = Arc::new(validator);
        Router::new()
            .route("/whoami", get(whoami))
            .route("/public", get(|| async { "ok" }))
            .layer(middleware::from_fn_with_state(state, auth_middleware))
    }

    async fn status_of(app: Router, uri: &str, authorization: Option<&str>) -> StatusCode {
        let mut builder = axum::http::Request::builder().uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        app.oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn accepted_token_reaches_protected_route() {
        let app = app(MockSessionValidator::new().with_user("good", known_user()));
        assert_eq!(status_of(app, "/whoami", Some("Bearer good")).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn lowercase_scheme_is_accepted() {
        let app = app(MockSessionValidator::new().with_user("good", known_user()));
        assert_eq!(status_of(app, "/whoami", Some("bearer good")).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn anonymous_requests_reach_public_routes_only() {
        let validator = MockSessionValidator::new();
        assert_eq!(status_of(app(validator.clone()), "/public", None).await, StatusCode::OK);
        assert_eq!(
            status_of(app(validator), "/whoami", None).await,
            StatusCode::UNAUTHORIZED
        );
    }

    #[tokio::test]
    async fn non_bearer_scheme_is_treated_as_anonymous() {
        let app = app(MockSessionValidator::new());
        assert_eq!(
            status_of(app, "/public", Some("Basic dXNlcjpwYXNz")).await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn rejected_token_fails_even_on_public_route() {
        let app = app(MockSessionValidator::new());
        assert_eq!(
            status_of(app, "/public", Some("Bearer forged")).await,
            StatusCode::UNAUTHORIZED
        );
    }

    #[tokio::test]
    async fn validator_outage_is_503() {
        let app = app(
            MockSessionValidator::new()
                .with_error(AuthError::ServiceUnavailable("keys offline".to_string())),
        );
        assert_eq!(
            status_of(app, "/whoami", Some("Bearer any")).await,
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[tokio::test]
    async fn extractor_reads_user_from_extensions() {
        let mut request = axum::http::Request::builder().uri("/").body(()).unwrap();
        request.extensions_mut().insert(known_user());
        let (mut parts, _) = request.into_parts();

        let RequireAuth(user) = RequireAuth::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(user.email.as_deref(), Some("test@example.com"));

        let (mut bare, _) = axum::http::Request::builder()
            .uri("/")
            .body(())
            .unwrap()
            .into_parts();
        assert_eq!(
            RequireAuth::from_request_parts(&mut bare, &()).await.unwrap_err(),
            AuthRejection::Unauthenticated
        );
    }
}
