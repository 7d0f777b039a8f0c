//! DeleteApplicationHandler - remove an owned record.

use std::sync::Arc;

use crate::domain::foundation::{ApplicationId, UserId};
use crate::ports::ApplicationRepository;

use super::ApplicationError;

/// Command to delete an application.
#[derive(Debug, Clone)]
pub struct DeleteApplicationCommand {
    pub owner: UserId,
    pub id: ApplicationId,
}

/// Handler for deleting applications.
pub struct DeleteApplicationHandler {
    repository: Arc<dyn ApplicationRepository>,
}

impl DeleteApplicationHandler {
    pub fn new(repository: Arc<dyn ApplicationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteApplicationCommand) -> Result<(), ApplicationError> {
        self.repository.delete(&cmd.owner, &cmd.id).await?;

        tracing::info!(application_id = %cmd.id, "application deleted");

        Ok(())
    }
}
