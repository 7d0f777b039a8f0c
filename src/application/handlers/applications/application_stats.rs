//! ApplicationStatsHandler - counts per status for the owner's records.

use std::sync::Arc;

use crate::domain::applications::StatusCounts;
use crate::domain::foundation::UserId;
use crate::ports::ApplicationRepository;

use super::ApplicationError;

/// Query for an owner's statistics.
#[derive(Debug, Clone)]
pub struct ApplicationStatsQuery {
    pub owner: UserId,
}

/// Handler for the stats aggregate.
pub struct ApplicationStatsHandler {
    repository: Arc<dyn ApplicationRepository>,
}

impl ApplicationStatsHandler {
    pub fn new(repository: Arc<dyn ApplicationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ApplicationStatsQuery,
    ) -> Result<StatusCounts, ApplicationError> {
        let rows = self.repository.status_counts(&query.owner).await?;
        Ok(StatusCounts::from_rows(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::InMemoryRepository;
    use super::*;
    use crate::domain::applications::{ApplicationStatus, NewApplication};
    use chrono::NaiveDate;

    fn owner() -> UserId {
        UserId::new("owner-a").unwrap()
    }

    async fn seed(repo: &InMemoryRepository, who: &UserId, status: ApplicationStatus) {
        let new = NewApplication::new(
            "Acme",
            "Engineer",
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            Some(status),
            None,
            None,
        )
        .unwrap();
        repo.insert(who, &new).await.unwrap();
    }

    #[tokio::test]
    async fn empty_owner_gets_six_zero_buckets() {
        let repo = Arc::new(InMemoryRepository::new());
        let handler = ApplicationStatsHandler::new(repo);

        let counts = handler
            .handle(ApplicationStatsQuery { owner: owner() })
            .await
            .unwrap();

        for status in ApplicationStatus::ALL {
            assert_eq!(counts.get(status), 0);
        }
        assert_eq!(counts.total(), 0);
    }

    #[tokio::test]
    async fn counts_are_scoped_to_the_owner() {
        let repo = Arc::new(InMemoryRepository::new());
        seed(&repo, &owner(), ApplicationStatus::Planned).await;
        seed(&repo, &owner(), ApplicationStatus::Planned).await;
        seed(&repo, &owner(), ApplicationStatus::Offer).await;
        seed(&repo, &UserId::new("owner-b").unwrap(), ApplicationStatus::Offer).await;

        let handler = ApplicationStatsHandler::new(repo);
        let counts = handler
            .handle(ApplicationStatsQuery { owner: owner() })
            .await
            .unwrap();

        assert_eq!(counts.get(ApplicationStatus::Planned), 2);
        assert_eq!(counts.get(ApplicationStatus::Offer), 1);
        assert_eq!(counts.total(), 3);
    }

    #[tokio::test]
    async fn store_failure_maps_to_infrastructure_error() {
        let repo = Arc::new(InMemoryRepository::new());
        *repo.fail_with.lock().unwrap() = Some("timeout".to_string());
        let handler = ApplicationStatsHandler::new(repo);

        let result = handler.handle(ApplicationStatsQuery { owner: owner() }).await;
        assert!(matches!(result, Err(ApplicationError::Infrastructure(_))));
    }
}
