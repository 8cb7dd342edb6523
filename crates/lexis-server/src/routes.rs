//! API route definitions

use axum::{
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{health, strings},
    state::AppState,
};

/// API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Natural-language filtering (static segment wins over :string_value)
        .route(
            "/strings/filter-by-natural-language",
            get(strings::filter_by_natural_language),
        )
        // String resources
        .route(
            "/strings",
            get(strings::list_strings).post(strings::create_string),
        )
        .route(
            "/strings/:string_value",
            get(strings::get_string).delete(strings::delete_string),
        )
}

/// Build the full application with state and request tracing.
pub fn app(state: AppState) -> Router {
    api_routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
