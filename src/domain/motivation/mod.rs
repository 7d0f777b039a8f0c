//! Daily motivational message domain.

mod message;

pub use message::{today_utc, DailyMessage};
