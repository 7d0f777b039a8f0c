//! UpdateApplicationHandler - partial update of an owned record.

use std::sync::Arc;

use crate::domain::applications::{ApplicationPatch, ApplicationRecord};
use crate::domain::foundation::{ApplicationId, UserId};
use crate::ports::ApplicationRepository;

use super::ApplicationError;

/// Command to update a subset of an application's fields.
#[derive(Debug, Clone)]
pub struct UpdateApplicationCommand {
    pub owner: UserId,
    pub id: ApplicationId,
    pub patch: ApplicationPatch,
}

/// Handler for partial updates.
pub struct UpdateApplicationHandler {
    repository: Arc<dyn ApplicationRepository>,
}

impl UpdateApplicationHandler {
    pub fn new(repository: Arc<dyn ApplicationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: UpdateApplicationCommand,
    ) -> Result<ApplicationRecord, ApplicationError> {
        let patch = cmd.patch.validate()?;
        let record = self.repository.update(&cmd.owner, &cmd.id, &patch).await?;

        tracing::info!(application_id = %record.id, "application updated");

        Ok(record)
    }
}
