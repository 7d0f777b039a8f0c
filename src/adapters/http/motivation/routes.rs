//! HTTP routes for the motivation endpoint.

use axum::{routing::get, Router};

use super::handlers::{daily_motivation, MotivationHandlers};

/// Creates the messages router.
pub fn motivation_routes(handlers: MotivationHandlers) -> Router {
    Router::new()
        .route("/daily-motivation", get(daily_motivation))
        .with_state(handlers)
}
