//! HTTP DTOs for application record endpoints.
//!
//! These types decouple the HTTP API from domain types. Responses never
//! carry the owner id; ownership is implied by the authenticated session.

use serde::{Deserialize, Serialize};

use chrono::NaiveDate;

use crate::application::handlers::applications::ApplicationList;
use crate::domain::applications::{
    ApplicationPatch, ApplicationRecord, ApplicationStatus, StatusCounts,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a new application record.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateApplicationRequest {
    pub company_name: String,
    pub position_name: String,
    pub application_date: NaiveDate,
    #[serde(default)]
    pub status: Option<ApplicationStatus>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Request to partially update an application record.
///
/// Omitted fields retain prior values. For `link` and `notes` an explicit
/// JSON `null` clears the stored value, while absence leaves it untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateApplicationRequest {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub position_name: Option<String>,
    #[serde(default)]
    pub application_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<ApplicationStatus>,
    #[serde(default, with = "double_option")]
    pub link: Option<Option<String>>,
    #[serde(default, with = "double_option")]
    pub notes: Option<Option<String>>,
}

/// Serde helper distinguishing an absent field from an explicit null.
mod double_option {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

impl From<UpdateApplicationRequest> for ApplicationPatch {
    fn from(req: UpdateApplicationRequest) -> Self {
        Self {
            company_name: req.company_name,
            position_name: req.position_name,
            application_date: req.application_date,
            status: req.status,
            link: req.link,
            notes: req.notes,
        }
    }
}

/// Query parameters for listing applications.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListApplicationsParams {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One application record for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationResponse {
    pub id: String,
    pub company_name: String,
    pub position_name: String,
    pub application_date: NaiveDate,
    pub status: ApplicationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ApplicationRecord> for ApplicationResponse {
    fn from(record: ApplicationRecord) -> Self {
        Self {
            id: record.id.to_string(),
            company_name: record.company_name,
            position_name: record.position_name,
            application_date: record.application_date,
            status: record.status,
            link: record.link,
            notes: record.notes,
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}

/// Pagination metadata for list responses.
#[derive(Debug, Clone, Serialize)]
pub struct PaginationMeta {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

/// Paginated list of applications.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationListResponse {
    pub applications: Vec<ApplicationResponse>,
    pub pagination: PaginationMeta,
}

impl From<ApplicationList> for ApplicationListResponse {
    fn from(list: ApplicationList) -> Self {
        Self {
            applications: list.records.into_iter().map(Into::into).collect(),
            pagination: PaginationMeta {
                total: list.total,
                page: list.page,
                limit: list.limit,
            },
        }
    }
}

/// Per-status statistics response.
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub stats: std::collections::BTreeMap<&'static str, u64>,
    pub total: u64,
}

impl From<StatusCounts> for StatsResponse {
    fn from(counts: StatusCounts) -> Self {
        Self {
            stats: counts.iter().collect(),
            total: counts.total(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{ApplicationId, UserId};
    use chrono::Utc;

    #[test]
    fn create_request_deserializes_with_defaults() {
        let json = r#"{
            "company_name": "Acme",
            "position_name": "Engineer",
            "application_date": "2025-01-15"
        }"#;
        let req: CreateApplicationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.company_name, "Acme");
        assert!(req.status.is_none());
        assert!(req.link.is_none());
    }

    #[test]
    fn update_request_distinguishes_null_from_absent() {
        let req: UpdateApplicationRequest = serde_json::from_str(r#"{"link": null}"#).unwrap();
        assert_eq!(req.link, Some(None));
        assert_eq!(req.notes, None);

        let req: UpdateApplicationRequest =
            serde_json::from_str(r#"{"notes": "follow up"}"#).unwrap();
        assert_eq!(req.notes, Some(Some("follow up".to_string())));
        assert_eq!(req.link, None);
    }

    #[test]
    fn application_response_hides_owner() {
        let record = ApplicationRecord {
            id: ApplicationId::new(),
            owner: UserId::new("user-1").unwrap(),
            company_name: "Acme".to_string(),
            position_name: "Engineer".to_string(),
            application_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            status: ApplicationStatus::Planned,
            link: None,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let response: ApplicationResponse = record.into();
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("owner").is_none());
        assert!(json.get("user_id").is_none());
        assert_eq!(json["company_name"], "Acme");
    }

    #[test]
    fn stats_response_lists_all_six_statuses() {
        let counts = StatusCounts::from_rows(vec![("sent".to_string(), 3i64)]);
        let response: StatsResponse = counts.into();

        assert_eq!(response.stats.len(), 6);
        assert_eq!(response.stats["sent"], 3);
        assert_eq!(response.stats["offer"], 0);
        assert_eq!(response.total, 3);
    }
}
