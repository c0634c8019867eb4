use axum::{
    extract::State, http::StatusCode, middleware::from_fn_with_state, response::IntoResponse,
    routing::get, Json, Router,
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod validation;

pub use state::AppState;

/// Build the service router over shared state. Tests drive this in-process;
/// `main` serves it over TCP.
pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/health", get(health))
        // Public token acquisition
        .route("/generate_token", get(handlers::generate_token))
        // Protected product CRUD
        .merge(product_routes(state.clone()))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn product_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(handlers::product_list).post(handlers::product_create),
        )
        .route(
            "/products/:id",
            get(handlers::product_get)
                .put(handlers::product_update)
                .delete(handlers::product_delete),
        )
        .layer(from_fn_with_state(state, middleware::bearer_auth_middleware))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    match database::health_check(state.store.pool()).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({ "status": "ok", "database": "ok" })),
        ),
        Err(e) => {
            tracing::error!("health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "degraded", "error": "database unavailable" })),
            )
        }
    }
}
