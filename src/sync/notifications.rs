//! User-visible transient notifications emitted by the synchronizer.

use crate::domain::applications::ApplicationStatus;
use crate::domain::foundation::ApplicationId;

/// A transient notification for the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The remote update succeeded; local state already shows the change.
    StatusUpdated {
        id: ApplicationId,
        status: ApplicationStatus,
    },
    /// The remote update failed; local state has been reverted.
    StatusUpdateFailed { id: ApplicationId, reason: String },
    /// The change was rejected before any mutation was attempted.
    Invalid { reason: String },
}

/// Sink the synchronizer pushes notifications into.
///
/// The UI typically renders these as toasts; tests collect them.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Collects notifications in memory; used by tests and as a default sink.
#[derive(Debug, Default)]
pub struct MemorySink {
    notifications: std::sync::Mutex<Vec<Notification>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drains all collected notifications.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.notifications.lock().unwrap())
    }

    /// Snapshot of collected notifications.
    pub fn all(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }
}

impl NotificationSink for MemorySink {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sink_collects_and_drains() {
        let sink = MemorySink::new();
        sink.notify(Notification::Invalid {
            reason: "bad status".to_string(),
        });

        assert_eq!(sink.all().len(), 1);
        assert_eq!(sink.drain().len(), 1);
        assert!(sink.all().is_empty());
    }
}
