//! Daily motivational message value object.

use chrono::{NaiveDate, Utc};

use crate::domain::foundation::UserId;

/// One motivational message per (owner, UTC calendar day).
///
/// Created lazily on the first read of the day and immutable thereafter.
/// The store enforces a uniqueness constraint on (owner, display_date).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyMessage {
    pub owner: UserId,
    pub display_date: NaiveDate,
    pub text: String,
}

impl DailyMessage {
    /// Creates a message for the given owner and day.
    pub fn new(owner: UserId, display_date: NaiveDate, text: impl Into<String>) -> Self {
        Self {
            owner,
            display_date,
            text: text.into(),
        }
    }

    /// Creates a message dated today (UTC).
    pub fn for_today(owner: UserId, text: impl Into<String>) -> Self {
        Self::new(owner, today_utc(), text)
    }

    /// The display date in `YYYY-MM-DD` form.
    pub fn display_date_str(&self) -> String {
        self.display_date.format("%Y-%m-%d").to_string()
    }
}

/// Current UTC calendar date, the idempotency key for daily messages.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}
