//! GetApplicationHandler - fetch one record by id, owner-scoped.

use std::sync::Arc;

use crate::domain::applications::ApplicationRecord;
use crate::domain::foundation::{ApplicationId, UserId};
use crate::ports::ApplicationRepository;

use super::ApplicationError;

/// Query for a single application.
#[derive(Debug, Clone)]
pub struct GetApplicationQuery {
    pub owner: UserId,
    pub id: ApplicationId,
}

/// Handler for fetching one application.
pub struct GetApplicationHandler {
    repository: Arc<dyn ApplicationRepository>,
}

impl GetApplicationHandler {
    pub fn new(repository: Arc<dyn ApplicationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetApplicationQuery,
    ) -> Result<ApplicationRecord, ApplicationError> {
        let record = self
            .repository
            .find_by_id(&query.owner, &query.id)
            .await?;
        Ok(record)
    }
}
