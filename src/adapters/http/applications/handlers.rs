//! HTTP handlers for application record endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::applications::{
    ApplicationError, ApplicationStatsHandler, ApplicationStatsQuery, CreateApplicationCommand,
    CreateApplicationHandler, DeleteApplicationCommand, DeleteApplicationHandler,
    GetApplicationHandler, GetApplicationQuery, ListApplicationsHandler, ListApplicationsQuery,
    UpdateApplicationCommand, UpdateApplicationHandler,
};
use crate::domain::applications::ApplicationStatus;
use crate::domain::foundation::ApplicationId;

use super::dto::{
    ApplicationListResponse, ApplicationResponse, CreateApplicationRequest, ErrorResponse,
    ListApplicationsParams, StatsResponse, UpdateApplicationRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ApplicationHandlers {
    list_handler: Arc<ListApplicationsHandler>,
    get_handler: Arc<GetApplicationHandler>,
    create_handler: Arc<CreateApplicationHandler>,
    update_handler: Arc<UpdateApplicationHandler>,
    delete_handler: Arc<DeleteApplicationHandler>,
    stats_handler: Arc<ApplicationStatsHandler>,
}

impl ApplicationHandlers {
    pub fn new(
        list_handler: Arc<ListApplicationsHandler>,
        get_handler: Arc<GetApplicationHandler>,
        create_handler: Arc<CreateApplicationHandler>,
        update_handler: Arc<UpdateApplicationHandler>,
        delete_handler: Arc<DeleteApplicationHandler>,
        stats_handler: Arc<ApplicationStatsHandler>,
    ) -> Self {
        Self {
            list_handler,
            get_handler,
            create_handler,
            update_handler,
            delete_handler,
            stats_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/applications - List the caller's applications
pub async fn list_applications(
    State(handlers): State<ApplicationHandlers>,
    RequireAuth(user): RequireAuth,
    Query(params): Query<ListApplicationsParams>,
) -> Response {
    let status = match params.status.as_deref() {
        None => None,
        Some(raw) => match raw.parse::<ApplicationStatus>() {
            Ok(status) => Some(status),
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::bad_request(e.to_string())),
                )
                    .into_response()
            }
        },
    };

    let query = ListApplicationsQuery {
        owner: user.id,
        status,
        page: params.page,
        limit: params.limit,
    };

    match handlers.list_handler.handle(query).await {
        Ok(list) => {
            let response: ApplicationListResponse = list.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_application_error(e),
    }
}

/// POST /api/applications - Create a new application
pub async fn create_application(
    State(handlers): State<ApplicationHandlers>,
    RequireAuth(user): RequireAuth,
    payload: Result<Json<CreateApplicationRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => return handle_body_rejection(rejection),
    };

    let cmd = CreateApplicationCommand {
        owner: user.id,
        company_name: req.company_name,
        position_name: req.position_name,
        application_date: req.application_date,
        status: req.status,
        link: req.link,
        notes: req.notes,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(record) => {
            let response: ApplicationResponse = record.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_application_error(e),
    }
}

/// GET /api/applications/:id - Get one application
pub async fn get_application(
    State(handlers): State<ApplicationHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_application_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = GetApplicationQuery { owner: user.id, id };

    match handlers.get_handler.handle(query).await {
        Ok(record) => {
            let response: ApplicationResponse = record.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_application_error(e),
    }
}

/// PATCH /api/applications/:id - Partially update an application
pub async fn update_application(
    State(handlers): State<ApplicationHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
    payload: Result<Json<UpdateApplicationRequest>, JsonRejection>,
) -> Response {
    let id = match parse_application_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => return handle_body_rejection(rejection),
    };

    let cmd = UpdateApplicationCommand {
        owner: user.id,
        id,
        patch: req.into(),
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(record) => {
            let response: ApplicationResponse = record.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_application_error(e),
    }
}

/// DELETE /api/applications/:id - Delete an application
pub async fn delete_application(
    State(handlers): State<ApplicationHandlers>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<String>,
) -> Response {
    let id = match parse_application_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = DeleteApplicationCommand { owner: user.id, id };

    match handlers.delete_handler.handle(cmd).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_application_error(e),
    }
}

/// GET /api/applications/stats - Per-status counts for the caller
pub async fn application_stats(
    State(handlers): State<ApplicationHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = ApplicationStatsQuery { owner: user.id };

    match handlers.stats_handler.handle(query).await {
        Ok(counts) => {
            let response: StatsResponse = counts.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_application_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

/// Body rejections (malformed JSON, fields that fail to deserialize) use
/// the same structured 400 shape as every other client error.
fn handle_body_rejection(rejection: JsonRejection) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request(rejection.body_text())),
    )
        .into_response()
}

fn parse_application_id(raw: &str) -> Result<ApplicationId, Response> {
    raw.parse::<ApplicationId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid application ID")),
        )
            .into_response()
    })
}

fn handle_application_error(error: ApplicationError) -> Response {
    match error {
        ApplicationError::Validation(e) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(e.to_string())),
        )
            .into_response(),
        ApplicationError::NotFound => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Application not found")),
        )
            .into_response(),
        ApplicationError::Infrastructure(msg) => {
            tracing::error!("application endpoint failed: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Internal server error")),
            )
                .into_response()
        }
    }
}
