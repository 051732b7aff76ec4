use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::welcome))
        .route("/translate", post(handlers::translate))
        .route("/languages", get(handlers::languages))
}

/// Full application: routes, middleware and state.
pub fn build_app(state: AppState) -> Router {
    let request_timeout = state.config.server.request_timeout;

    let mut app = create_routes()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Dropping the handler on expiry also cancels the outbound completion call.
    if !request_timeout.is_zero() {
        app = app.layer(TimeoutLayer::new(request_timeout));
    }

    app.with_state(state)
}
