//! The application status catalog.
//!
//! A closed enumeration of the six allowed statuses. Transitions between
//! any two statuses are unrestricted; there is no state-machine guard.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Status of a job application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Planned,
    Sent,
    InProgress,
    Interview,
    Rejected,
    Offer,
}

impl ApplicationStatus {
    /// All six statuses, in the order the UI presents them.
    pub const ALL: [ApplicationStatus; 6] = [
        ApplicationStatus::Planned,
        ApplicationStatus::Sent,
        ApplicationStatus::InProgress,
        ApplicationStatus::Interview,
        ApplicationStatus::Rejected,
        ApplicationStatus::Offer,
    ];

    /// Default status for records created through the API.
    pub const DEFAULT: ApplicationStatus = ApplicationStatus::Planned;

    /// Wire representation (matches the database enum values).
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Planned => "planned",
            ApplicationStatus::Sent => "sent",
            ApplicationStatus::InProgress => "in_progress",
            ApplicationStatus::Interview => "interview",
            ApplicationStatus::Rejected => "rejected",
            ApplicationStatus::Offer => "offer",
        }
    }

    /// Human-readable label shown in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Planned => "Zaplanowane do wysłania",
            ApplicationStatus::Sent => "Wysłane",
            ApplicationStatus::InProgress => "W trakcie",
            ApplicationStatus::Interview => "Rozmowa",
            ApplicationStatus::Rejected => "Odrzucone",
            ApplicationStatus::Offer => "Oferta",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planned" => Ok(ApplicationStatus::Planned),
            "sent" => Ok(ApplicationStatus::Sent),
            "in_progress" => Ok(ApplicationStatus::InProgress),
            "interview" => Ok(ApplicationStatus::Interview),
            "rejected" => Ok(ApplicationStatus::Rejected),
            "offer" => Ok(ApplicationStatus::Offer),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown status '{}'", other),
            )),
        }
    }
}
