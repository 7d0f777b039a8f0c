//! HTTP adapter for the daily motivational message endpoint.

mod dto;
mod handlers;
mod routes;

pub use dto::DailyMessageResponse;
pub use handlers::MotivationHandlers;
pub use routes::motivation_routes;
