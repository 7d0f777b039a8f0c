//! HTTP adapters - REST API implementations.
//!
//! Each area has its own router; `api_router` mounts them under `/api`
//! and layers the Bearer-token auth middleware over the whole surface.

pub mod applications;
pub mod middleware;
pub mod motivation;

use axum::{middleware::from_fn_with_state, Router};
use tower_http::trace::TraceLayer;

pub use applications::{application_routes, ApplicationHandlers};
pub use motivation::{motivation_routes, MotivationHandlers};

use middleware::{auth_middleware, AuthState};

/// Assembles the full API router.
pub fn api_router(
    application_handlers: ApplicationHandlers,
    motivation_handlers: MotivationHandlers,
    validator: AuthState,
) -> Router {
    Router::new()
        .nest("/api/applications", application_routes(application_handlers))
        .nest("/api/messages", motivation_routes(motivation_handlers))
        .layer(from_fn_with_state(validator, auth_middleware))
        .layer(TraceLayer::new_for_http())
}
