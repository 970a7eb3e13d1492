// ABOUTME: Route definitions for the grocerd HTTP API.
// ABOUTME: Assembles the list endpoints into a single axum Router, optionally wrapped in Basic auth.

use axum::Router;
use axum::routing::get;
use grocerd_core::Credentials;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::app_state::SharedState;
use crate::auth::BasicAuthLayer;

/// Build the axum router with the list routes and shared state. When
/// `credentials` is Some, every route except /health requires Basic auth.
pub fn create_router(state: SharedState, credentials: Option<Credentials>) -> Router {
    let router = Router::new()
        .route(
            "/",
            get(api::items::list_items).post(api::items::replace_items),
        )
        .route("/health", get(health))
        .with_state(state);

    let router = match credentials {
        Some(expected) => router.layer(BasicAuthLayer::new(expected)),
        None => router,
    };

    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Health check handler. Returns 200 OK with a simple JSON body.
async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}
