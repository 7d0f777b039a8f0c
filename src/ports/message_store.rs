//! Daily message store port.
//!
//! The store enforces a uniqueness constraint on (owner, display_date).
//! The constraint, not application logic, is the correctness mechanism for
//! concurrent first-reads of the day: implementations must surface a
//! violated constraint as `DuplicateDay` so callers can treat it as a lost
//! race rather than an error.

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::foundation::UserId;
use crate::domain::motivation::DailyMessage;

/// Message store errors.
#[derive(Debug, Error)]
pub enum MessageStoreError {
    /// Insert hit the (owner, display_date) uniqueness constraint.
    #[error("a message already exists for this user and day")]
    DuplicateDay,

    /// Store query or connection failure.
    #[error("store error: {0}")]
    Store(String),
}

impl MessageStoreError {
    /// Creates a store error with a message.
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store(message.into())
    }
}

/// Port for persisting daily motivational messages.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Returns the stored message for (owner, date), if any.
    async fn find_for_day(
        &self,
        owner: &UserId,
        date: NaiveDate,
    ) -> Result<Option<DailyMessage>, MessageStoreError>;

    /// Inserts a message under the uniqueness constraint.
    async fn insert(&self, message: &DailyMessage) -> Result<(), MessageStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_store_trait_is_object_safe() {
        fn _accepts_dyn(_store: &dyn MessageStore) {}
    }

    #[test]
    fn duplicate_day_displays_correctly() {
        assert_eq!(
            MessageStoreError::DuplicateDay.to_string(),
            "a message already exists for this user and day"
        );
    }
}
