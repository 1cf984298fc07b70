//! Top-level router: assessment API, health check and cross-cutting layers.

use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::get,
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::assessment::{assessment_routes, companion_routes, AssessmentAppState, HealthResponse};
use super::middleware::{auth_middleware, AuthState};

/// Layer settings taken from the server configuration.
#[derive(Debug, Clone)]
pub struct RouterSettings {
    pub request_timeout: Duration,
    /// Empty means any origin.
    pub cors_origins: Vec<String>,
    pub companion_context: bool,
    pub trace_requests: bool,
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            cors_origins: Vec::new(),
            companion_context: true,
            trace_requests: true,
        }
    }
}

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Create the application router.
///
/// # Routes
/// - `GET /health` - Liveness check, no auth
/// - `/api/assessment/*` - See [`assessment_routes`] and [`companion_routes`]
pub fn api_router(
    state: AssessmentAppState,
    auth_state: AuthState,
    settings: &RouterSettings,
) -> Router {
    let mut assessment = assessment_routes();
    if settings.companion_context {
        assessment = assessment.merge(companion_routes());
    }

    let api = Router::new()
        .nest("/assessment", assessment)
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware))
        .with_state(state);

    let router = Router::new()
        .route("/health", get(health_check))
        .nest("/api", api)
        .layer(cors_layer(&settings.cors_origins))
        .layer(TimeoutLayer::new(settings.request_timeout));

    if settings.trace_requests {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    cors.allow_origin(allowed)
}
