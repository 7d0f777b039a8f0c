//! HTTP adapter for application record endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ApplicationListResponse, ApplicationResponse, CreateApplicationRequest, ErrorResponse,
    ListApplicationsParams, PaginationMeta, StatsResponse, UpdateApplicationRequest,
};
pub use handlers::ApplicationHandlers;
pub use routes::application_routes;
