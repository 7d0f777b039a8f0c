//! DailyMessageHandler - exactly one motivational message per user per day.
//!
//! The read path is idempotent: once a message exists for (owner, today)
//! it is returned unchanged for the rest of the UTC day. The insert path
//! relies on the store's uniqueness constraint for correctness under
//! concurrent first-requests; losing that race is handled by re-reading
//! the winning row, never by surfacing an error.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::UserId;
use crate::domain::motivation::{today_utc, DailyMessage};
use crate::ports::{GeneratorError, MessageGenerator, MessageStore, MessageStoreError};

/// Query for today's message.
#[derive(Debug, Clone)]
pub struct DailyMessageQuery {
    pub owner: UserId,
}

/// Errors surfaced by the daily message operation.
#[derive(Debug, Error)]
pub enum MotivationError {
    /// The generation strategy failed.
    #[error("message generation failed: {0}")]
    Generation(#[from] GeneratorError),

    /// Store query or insert failure other than the uniqueness violation.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

/// Handler producing the idempotent daily message.
pub struct DailyMessageHandler {
    store: Arc<dyn MessageStore>,
    generator: Arc<dyn MessageGenerator>,
}

impl DailyMessageHandler {
    pub fn new(store: Arc<dyn MessageStore>, generator: Arc<dyn MessageGenerator>) -> Self {
        Self { store, generator }
    }

    pub async fn handle(&self, query: DailyMessageQuery) -> Result<String, MotivationError> {
        let today = today_utc();

        if let Some(existing) = self
            .store
            .find_for_day(&query.owner, today)
            .await
            .map_err(store_error)?
        {
            return Ok(existing.text);
        }

        let text = self.generator.generate().await?;
        let message = DailyMessage::new(query.owner.clone(), today, text);

        match self.store.insert(&message).await {
            Ok(()) => Ok(message.text),
            Err(MessageStoreError::DuplicateDay) => {
                // Lost the race to a concurrent request; the winner's row
                // is authoritative.
                tracing::debug!(owner = %query.owner, "daily message insert lost race, re-reading");
                let winner = self
                    .store
                    .find_for_day(&query.owner, today)
                    .await
                    .map_err(store_error)?
                    .ok_or_else(|| {
                        MotivationError::Infrastructure(
                            "duplicate reported but no row found for today".to_string(),
                        )
                    })?;
                Ok(winner.text)
            }
            Err(other) => Err(store_error(other)),
        }
    }
}

fn store_error(err: MessageStoreError) -> MotivationError {
    MotivationError::Infrastructure(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
    use std::sync::Mutex;

    struct InMemoryMessageStore {
        rows: Mutex<Vec<DailyMessage>>,
        /// When set, the next insert reports DuplicateDay after racing a
        /// winner row into the store.
        race_winner: Mutex<Option<String>>,
        fail_reads: AtomicBool,
    }

    impl InMemoryMessageStore {
        fn new() -> Self {
            Self {
                rows: Mutex::new(Vec::new()),
                race_winner: Mutex::new(None),
                fail_reads: AtomicBool::new(false),
            }
        }

        fn row_count(&self) -> usize {
            self.rows.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl MessageStore for InMemoryMessageStore {
        async fn find_for_day(
            &self,
            owner: &UserId,
            date: NaiveDate,
        ) -> Result<Option<DailyMessage>, MessageStoreError> {
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(MessageStoreError::store("connection refused"));
            }
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .find(|m| &m.owner == owner && m.display_date == date)
                .cloned())
        }

        async fn insert(&self, message: &DailyMessage) -> Result<(), MessageStoreError> {
            if let Some(winner_text) = self.race_winner.lock().unwrap().take() {
                self.rows.lock().unwrap().push(DailyMessage::new(
                    message.owner.clone(),
                    message.display_date,
                    winner_text,
                ));
                return Err(MessageStoreError::DuplicateDay);
            }

            let mut rows = self.rows.lock().unwrap();
            if rows
                .iter()
                .any(|m| m.owner == message.owner && m.display_date == message.display_date)
            {
                return Err(MessageStoreError::DuplicateDay);
            }
            rows.push(message.clone());
            Ok(())
        }
    }

    struct CountingGenerator {
        calls: AtomicU32,
        text: String,
    }

    impl CountingGenerator {
        fn new(text: &str) -> Self {
            Self {
                calls: AtomicU32::new(0),
                text: text.to_string(),
            }
        }
    }

    #[async_trait]
    impl MessageGenerator for CountingGenerator {
        async fn generate(&self) -> Result<String, GeneratorError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.text.clone())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl MessageGenerator for FailingGenerator {
        async fn generate(&self) -> Result<String, GeneratorError> {
            Err(GeneratorError::Timeout { timeout_secs: 30 })
        }
    }

    fn owner() -> UserId {
        UserId::new("user-1").unwrap()
    }

    #[tokio::test]
    async fn first_call_generates_and_persists() {
        let store = Arc::new(InMemoryMessageStore::new());
        let generator = Arc::new(CountingGenerator::new("Dasz radę!"));
        let handler = DailyMessageHandler::new(store.clone(), generator.clone());

        let text = handler
            .handle(DailyMessageQuery { owner: owner() })
            .await
            .unwrap();

        assert_eq!(text, "Dasz radę!");
        assert_eq!(store.row_count(), 1);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn second_call_same_day_returns_identical_text_without_generating() {
        let store = Arc::new(InMemoryMessageStore::new());
        let generator = Arc::new(CountingGenerator::new("Dasz radę!"));
        let handler = DailyMessageHandler::new(store.clone(), generator.clone());

        let first = handler
            .handle(DailyMessageQuery { owner: owner() })
            .await
            .unwrap();
        let second = handler
            .handle(DailyMessageQuery { owner: owner() })
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(store.row_count(), 1);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn lost_insert_race_returns_the_winning_row() {
        let store = Arc::new(InMemoryMessageStore::new());
        *store.race_winner.lock().unwrap() = Some("winner message".to_string());
        let generator = Arc::new(CountingGenerator::new("loser message"));
        let handler = DailyMessageHandler::new(store.clone(), generator);

        let text = handler
            .handle(DailyMessageQuery { owner: owner() })
            .await
            .unwrap();

        assert_eq!(text, "winner message");
        assert_eq!(store.row_count(), 1);
    }

    #[tokio::test]
    async fn messages_are_scoped_per_owner() {
        let store = Arc::new(InMemoryMessageStore::new());
        let generator = Arc::new(CountingGenerator::new("same text"));
        let handler = DailyMessageHandler::new(store.clone(), generator);

        handler
            .handle(DailyMessageQuery { owner: owner() })
            .await
            .unwrap();
        handler
            .handle(DailyMessageQuery {
                owner: UserId::new("user-2").unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(store.row_count(), 2);
    }

    #[tokio::test]
    async fn generator_failure_propagates() {
        let store = Arc::new(InMemoryMessageStore::new());
        let handler = DailyMessageHandler::new(store.clone(), Arc::new(FailingGenerator));

        let result = handler.handle(DailyMessageQuery { owner: owner() }).await;

        assert!(matches!(
            result,
            Err(MotivationError::Generation(GeneratorError::Timeout { .. }))
        ));
        assert_eq!(store.row_count(), 0);
    }

    #[tokio::test]
    async fn store_read_failure_is_infrastructure_error() {
        let store = Arc::new(InMemoryMessageStore::new());
        store.fail_reads.store(true, Ordering::SeqCst);
        let handler = DailyMessageHandler::new(store, Arc::new(CountingGenerator::new("x")));

        let result = handler.handle(DailyMessageQuery { owner: owner() }).await;
        assert!(matches!(result, Err(MotivationError::Infrastructure(_))));
    }
}
