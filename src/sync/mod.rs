//! Client-side optimistic list synchronization.
//!
//! Keeps a locally held list of application records consistent with
//! user-initiated status changes while hiding network latency: the local
//! entry is updated before the remote call resolves, and reverted if the
//! call fails.

mod list_sync;
mod notifications;

pub use list_sync::{ApplicationListSync, SyncError, SyncedApplication};
pub use notifications::{MemorySink, Notification, NotificationSink};
