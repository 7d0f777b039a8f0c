//! ListApplicationsHandler - paginated, filtered list of the owner's records.

use std::sync::Arc;

use crate::domain::applications::{ApplicationRecord, ApplicationStatus};
use crate::domain::foundation::{UserId, ValidationError};
use crate::ports::{ApplicationRepository, ListFilter};

use super::ApplicationError;

const DEFAULT_LIMIT: u32 = 20;
const MAX_LIMIT: u32 = 100;

/// Query to list an owner's applications.
#[derive(Debug, Clone)]
pub struct ListApplicationsQuery {
    pub owner: UserId,
    pub status: Option<ApplicationStatus>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ListApplicationsQuery {
    /// First page with defaults and no status filter.
    pub fn first_page(owner: UserId) -> Self {
        Self {
            owner,
            status: None,
            page: None,
            limit: None,
        }
    }

    fn to_filter(&self) -> Result<ListFilter, ValidationError> {
        let page = self.page.unwrap_or(1);
        if page < 1 {
            return Err(ValidationError::invalid_format("page", "must be at least 1"));
        }

        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);
        if limit < 1 || limit > MAX_LIMIT {
            return Err(ValidationError::invalid_format(
                "limit",
                format!("must be between 1 and {}", MAX_LIMIT),
            ));
        }

        Ok(ListFilter {
            status: self.status,
            page,
            limit,
        })
    }
}

/// One page of results with the pagination metadata the UI needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationList {
    pub records: Vec<ApplicationRecord>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

/// Handler for listing applications.
pub struct ListApplicationsHandler {
    repository: Arc<dyn ApplicationRepository>,
}

impl ListApplicationsHandler {
    pub fn new(repository: Arc<dyn ApplicationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ListApplicationsQuery,
    ) -> Result<ApplicationList, ApplicationError> {
        let filter = query.to_filter()?;
        let page = self.repository.list(&query.owner, &filter).await?;

        Ok(ApplicationList {
            records: page.records,
            total: page.total,
            page: filter.page,
            limit: filter.limit,
        })
    }
}
