//! Application record entity and its create/update commands.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ApplicationId, UserId, ValidationError};

use super::ApplicationStatus;

const MAX_NAME_LEN: usize = 255;
const MAX_LINK_LEN: usize = 2048;
const MAX_NOTES_LEN: usize = 10_000;

/// One job application owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub id: ApplicationId,
    pub owner: UserId,
    pub company_name: String,
    pub position_name: String,
    pub application_date: NaiveDate,
    pub status: ApplicationStatus,
    pub link: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated command to create a new application record.
///
/// Status defaults to [`ApplicationStatus::DEFAULT`] when omitted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewApplication {
    pub company_name: String,
    pub position_name: String,
    pub application_date: NaiveDate,
    pub status: ApplicationStatus,
    pub link: Option<String>,
    pub notes: Option<String>,
}

impl NewApplication {
    /// Validates the required and optional fields of a create request.
    pub fn new(
        company_name: impl Into<String>,
        position_name: impl Into<String>,
        application_date: NaiveDate,
        status: Option<ApplicationStatus>,
        link: Option<String>,
        notes: Option<String>,
    ) -> Result<Self, ValidationError> {
        let company_name = validate_name("company_name", company_name.into())?;
        let position_name = validate_name("position_name", position_name.into())?;
        let link = validate_link(link)?;
        let notes = validate_notes(notes)?;

        Ok(Self {
            company_name,
            position_name,
            application_date,
            status: status.unwrap_or(ApplicationStatus::DEFAULT),
            link,
            notes,
        })
    }
}

/// Partial update of an application record.
///
/// Only supplied fields are changed; omitted fields retain prior values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationPatch {
    pub company_name: Option<String>,
    pub position_name: Option<String>,
    pub application_date: Option<NaiveDate>,
    pub status: Option<ApplicationStatus>,
    /// `Some(None)` clears the link, `Some(Some(..))` replaces it.
    pub link: Option<Option<String>>,
    /// `Some(None)` clears the notes.
    pub notes: Option<Option<String>>,
}

impl ApplicationPatch {
    /// A patch that only changes the status.
    pub fn status(status: ApplicationStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Returns true if no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.company_name.is_none()
            && self.position_name.is_none()
            && self.application_date.is_none()
            && self.status.is_none()
            && self.link.is_none()
            && self.notes.is_none()
    }

    /// Validates every supplied field, leaving omitted fields untouched.
    pub fn validate(self) -> Result<Self, ValidationError> {
        let company_name = self
            .company_name
            .map(|v| validate_name("company_name", v))
            .transpose()?;
        let position_name = self
            .position_name
            .map(|v| validate_name("position_name", v))
            .transpose()?;
        let link = self.link.map(validate_link).transpose()?;
        let notes = self.notes.map(validate_notes).transpose()?;

        Ok(Self {
            company_name,
            position_name,
            application_date: self.application_date,
            status: self.status,
            link,
            notes,
        })
    }
}

fn validate_name(field: &'static str, value: String) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::too_long(field, MAX_NAME_LEN));
    }
    Ok(trimmed.to_string())
}

fn validate_link(link: Option<String>) -> Result<Option<String>, ValidationError> {
    match link {
        None => Ok(None),
        Some(value) => {
            let trimmed = value.trim();
            // An empty link is treated as absent, matching the form behavior.
            if trimmed.is_empty() {
                return Ok(None);
            }
            if trimmed.chars().count() > MAX_LINK_LEN {
                return Err(ValidationError::too_long("link", MAX_LINK_LEN));
            }
            if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
                return Err(ValidationError::invalid_format(
                    "link",
                    "must be an http(s) URL",
                ));
            }
            Ok(Some(trimmed.to_string()))
        }
    }
}

fn validate_notes(notes: Option<String>) -> Result<Option<String>, ValidationError> {
    match notes {
        None => Ok(None),
        Some(value) => {
            if value.chars().count() > MAX_NOTES_LEN {
                return Err(ValidationError::too_long("notes", MAX_NOTES_LEN));
            }
            Ok(Some(value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn new_application_defaults_status_to_planned() {
        let app = NewApplication::new("Acme", "Engineer", date(), None, None, None).unwrap();
        assert_eq!(app.status, ApplicationStatus::Planned);
    }

    #[test]
    fn new_application_keeps_explicit_status() {
        let app = NewApplication::new(
            "Acme",
            "Engineer",
            date(),
            Some(ApplicationStatus::Sent),
            None,
            None,
        )
        .unwrap();
        assert_eq!(app.status, ApplicationStatus::Sent);
    }

    #[test]
    fn new_application_rejects_empty_company() {
        let result = NewApplication::new("   ", "Engineer", date(), None, None, None);
        match result {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "company_name"),
            other => panic!("Expected EmptyField, got {:?}", other),
        }
    }

    #[test]
    fn new_application_rejects_overlong_position() {
        let long = "x".repeat(256);
        let result = NewApplication::new("Acme", long, date(), None, None, None);
        match result {
            Err(ValidationError::TooLong { field, max }) => {
                assert_eq!(field, "position_name");
                assert_eq!(max, 255);
            }
            other => panic!("Expected TooLong, got {:?}", other),
        }
    }

    #[test]
    fn new_application_rejects_overlong_notes() {
        let long = "n".repeat(10_001);
        let result = NewApplication::new("Acme", "Engineer", date(), None, None, Some(long));
        assert!(matches!(result, Err(ValidationError::TooLong { .. })));
    }

    #[test]
    fn new_application_treats_blank_link_as_absent() {
        let app =
            NewApplication::new("Acme", "Engineer", date(), None, Some("  ".to_string()), None)
                .unwrap();
        assert_eq!(app.link, None);
    }

    #[test]
    fn new_application_rejects_non_http_link() {
        let result = NewApplication::new(
            "Acme",
            "Engineer",
            date(),
            None,
            Some("ftp://example.com".to_string()),
            None,
        );
        match result {
            Err(ValidationError::InvalidFormat { field, .. }) => assert_eq!(field, "link"),
            other => panic!("Expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn patch_validates_supplied_fields_only() {
        let patch = ApplicationPatch {
            company_name: Some("  Initech  ".to_string()),
            ..ApplicationPatch::default()
        };
        let patch = patch.validate().unwrap();
        assert_eq!(patch.company_name, Some("Initech".to_string()));
        assert!(patch.position_name.is_none());
    }

    #[test]
    fn patch_rejects_empty_supplied_company() {
        let patch = ApplicationPatch {
            company_name: Some(String::new()),
            ..ApplicationPatch::default()
        };
        assert!(matches!(
            patch.validate(),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn patch_supports_clearing_link() {
        let patch = ApplicationPatch {
            link: Some(None),
            ..ApplicationPatch::default()
        };
        let patch = patch.validate().unwrap();
        assert_eq!(patch.link, Some(None));
    }

    #[test]
    fn status_patch_is_not_empty() {
        assert!(ApplicationPatch::default().is_empty());
        assert!(!ApplicationPatch::status(ApplicationStatus::Interview).is_empty());
    }
}
