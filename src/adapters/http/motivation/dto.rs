//! HTTP DTOs for the motivation endpoint.

use serde::Serialize;

/// Response carrying today's motivational message.
#[derive(Debug, Clone, Serialize)]
pub struct DailyMessageResponse {
    pub message: String,
}
