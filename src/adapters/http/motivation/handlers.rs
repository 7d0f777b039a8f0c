//! HTTP handlers for the motivation endpoint.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::applications::ErrorResponse;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::motivation::{
    DailyMessageHandler, DailyMessageQuery, MotivationError,
};

use super::dto::DailyMessageResponse;

#[derive(Clone)]
pub struct MotivationHandlers {
    daily_handler: Arc<DailyMessageHandler>,
}

impl MotivationHandlers {
    pub fn new(daily_handler: Arc<DailyMessageHandler>) -> Self {
        Self { daily_handler }
    }
}

/// GET /api/messages/daily-motivation - Today's message for the caller
pub async fn daily_motivation(
    State(handlers): State<MotivationHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    let query = DailyMessageQuery { owner: user.id };

    match handlers.daily_handler.handle(query).await {
        Ok(message) => (StatusCode::OK, Json(DailyMessageResponse { message })).into_response(),
        Err(e) => handle_motivation_error(e),
    }
}

fn handle_motivation_error(error: MotivationError) -> Response {
    // Generation and store failures alike surface as a generic 500; the
    // specific cause is only logged.
    tracing::error!("daily motivation endpoint failed: {}", error);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::internal("Internal server error")),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::GeneratorError;

    #[test]
    fn generation_failure_maps_to_500() {
        let error = MotivationError::Generation(GeneratorError::RateLimited);
        let response = handle_motivation_error(error);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn infrastructure_failure_maps_to_500() {
        let error = MotivationError::Infrastructure("connection refused".to_string());
        let response = handle_motivation_error(error);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
