//! PostgreSQL implementation of MessageStore.
//!
//! The daily_messages table carries a UNIQUE (user_id, display_date)
//! constraint; a violated insert is surfaced as `DuplicateDay` so the
//! handler can treat it as a lost race.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domain::foundation::UserId;
use crate::domain::motivation::DailyMessage;
use crate::ports::{MessageStore, MessageStoreError};

/// PostgreSQL implementation of MessageStore.
#[derive(Clone)]
pub struct PostgresMessageStore {
    pool: PgPool,
}

impl PostgresMessageStore {
    /// Creates a new PostgresMessageStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageStore for PostgresMessageStore {
    async fn find_for_day(
        &self,
        owner: &UserId,
        date: NaiveDate,
    ) -> Result<Option<DailyMessage>, MessageStoreError> {
        let row: Option<(String,)> = sqlx::query_as(
            r#"
            SELECT message
            FROM daily_messages
            WHERE user_id = $1 AND display_date = $2
            "#,
        )
        .bind(owner.as_str())
        .bind(date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| MessageStoreError::store(format!("Failed to fetch daily message: {}", e)))?;

        Ok(row.map(|(text,)| DailyMessage::new(owner.clone(), date, text)))
    }

    async fn insert(&self, message: &DailyMessage) -> Result<(), MessageStoreError> {
        sqlx::query(
            r#"
            INSERT INTO daily_messages (user_id, display_date, message, created_at)
            VALUES ($1, $2, $3, now())
            "#,
        )
        .bind(message.owner.as_str())
        .bind(message.display_date)
        .bind(&message.text)
        .execute(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                MessageStoreError::DuplicateDay
            }
            _ => MessageStoreError::store(format!("Failed to insert daily message: {}", e)),
        })?;

        Ok(())
    }
}
