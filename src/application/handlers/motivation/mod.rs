//! Handlers for the daily motivational message.

mod daily_message;

pub use daily_message::{DailyMessageHandler, DailyMessageQuery, MotivationError};
