use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;

/// Build the main application router
pub fn app_router() -> Router<AppState> {
    // Resource subrouters live under /api/v1
    let api_v1 = Router::new()
        .nest("/employees", crate::api::routes::employee_routes::employee_routes())
        .nest("/shift-models", crate::api::routes::shift_model_routes::shift_model_routes())
        .nest("/shifts", crate::api::routes::shift_routes::shift_routes())
        .nest("/settings", crate::api::routes::setting_routes::setting_routes())
        .nest("/system", crate::api::routes::system_routes::system_routes());

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", api_v1)
        .fallback(handler_404)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}

async fn root() -> &'static str {
    "Server is running!"
}

async fn health_check() -> &'static str {
    "OK"
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
