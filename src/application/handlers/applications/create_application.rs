//! CreateApplicationHandler - validate and persist a new record.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::domain::applications::{ApplicationRecord, ApplicationStatus, NewApplication};
use crate::domain::foundation::UserId;
use crate::ports::ApplicationRepository;

use super::ApplicationError;

/// Command to create an application.
#[derive(Debug, Clone)]
pub struct CreateApplicationCommand {
    pub owner: UserId,
    pub company_name: String,
    pub position_name: String,
    pub application_date: NaiveDate,
    pub status: Option<ApplicationStatus>,
    pub link: Option<String>,
    pub notes: Option<String>,
}

/// Handler for creating applications.
pub struct CreateApplicationHandler {
    repository: Arc<dyn ApplicationRepository>,
}

impl CreateApplicationHandler {
    pub fn new(repository: Arc<dyn ApplicationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: CreateApplicationCommand,
    ) -> Result<ApplicationRecord, ApplicationError> {
        let application = NewApplication::new(
            cmd.company_name,
            cmd.position_name,
            cmd.application_date,
            cmd.status,
            cmd.link,
            cmd.notes,
        )?;

        let record = self.repository.insert(&cmd.owner, &application).await?;

        tracing::info!(
            application_id = %record.id,
            status = %record.status,
            "application created"
        );

        Ok(record)
    }
}
