use axum::http::{HeaderValue, Method, StatusCode};
use axum::routing::get;
use axum::{Json, Router, middleware};
use serde_json::json;
use tower_governor::GovernorLayer;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::metrics::metrics_middleware;
use crate::middleware::role::{require_admin, require_parent};
use crate::modules::admin::router::init_admin_router;
use crate::modules::auth::router::init_auth_router;
use crate::modules::parents::router::init_parents_router;
use crate::modules::staff::router::init_staff_router;
use crate::modules::students::router::init_students_router;
use crate::state::AppState;

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub fn init_router(state: AppState) -> Router {
    // Credential endpoints get a stricter limiter than the rest of the API.
    let mut auth_routes = init_auth_router();
    if state.rate_limit_config.enabled {
        auth_routes = auth_routes.layer(GovernorLayer::new(
            state.rate_limit_config.auth_governor_config(),
        ));
    }

    let mut api = Router::new()
        .nest("/auth", auth_routes)
        .nest("/students", init_students_router(state.clone()))
        .nest("/staff", init_staff_router())
        .nest(
            "/admin",
            init_admin_router()
                .route_layer(middleware::from_fn_with_state(state.clone(), require_admin)),
        )
        .nest(
            "/parents",
            init_parents_router().route_layer(middleware::from_fn_with_state(
                state.clone(),
                require_parent,
            )),
        )
        .route("/health", get(health));

    if state.rate_limit_config.enabled {
        api = api.layer(GovernorLayer::new(
            state.rate_limit_config.general_governor_config(),
        ));
    }

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest("/api", api)
        .fallback(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Not found" })),
            )
        })
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
