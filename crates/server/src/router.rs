use super::{handlers, state::AppState};
use axum::{
    http::{header::HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowHeaders, CorsLayer},
    trace::TraceLayer,
};

/// Creates the Axum router with all the application routes.
///
/// Paths keep their trailing slashes; they are part of the public surface.
pub fn create_router(app_state: AppState) -> Router {
    let cors = cors_layer(&app_state.config.cors_origin);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/add_document/", post(handlers::add_document))
        .route("/query/", get(handlers::query_documents))
        .route("/register_agent/", post(handlers::register_agent))
        .route("/assign_task/", post(handlers::assign_task))
        .route("/group_by/", get(handlers::group_by))
        .route("/summarize/", get(handlers::summarize))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// CORS for the single configured front-end origin: all methods, request
/// headers mirrored back, credentials allowed.
fn cors_layer(origin: &str) -> CorsLayer {
    let origin: HeaderValue = origin
        .parse()
        .unwrap_or_else(|_| HeaderValue::from_static("http://localhost:5173"));

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
