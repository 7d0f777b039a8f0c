//! HTTP routes for application record endpoints.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use super::handlers::{
    application_stats, create_application, delete_application, get_application,
    list_applications, update_application, ApplicationHandlers,
};

/// Creates the applications router with all endpoints.
///
/// `/stats` is registered before `/:id` so it is matched as a literal
/// segment rather than captured as an id.
pub fn application_routes(handlers: ApplicationHandlers) -> Router {
    Router::new()
        .route("/", get(list_applications))
        .route("/", post(create_application))
        .route("/stats", get(application_stats))
        .route("/:id", get(get_application))
        .route("/:id", patch(update_application))
        .route("/:id", delete(delete_application))
        .with_state(handlers)
}
