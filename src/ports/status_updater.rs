//! Remote status update port for the client-side list synchronizer.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::applications::ApplicationStatus;
use crate::domain::foundation::ApplicationId;

/// Errors from the remote status update call.
#[derive(Debug, Clone, Error)]
pub enum UpdateError {
    /// Server answered with a non-success status.
    #[error("update rejected: {reason}")]
    Rejected { reason: String },

    /// Request never completed (network, timeout).
    #[error("network error: {0}")]
    Network(String),
}

impl UpdateError {
    /// Creates a rejection error with a reason.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected {
            reason: reason.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }
}

/// Port the synchronizer uses to push a status change to the server.
#[async_trait]
pub trait StatusUpdater: Send + Sync {
    /// Issues the remote partial update for one record's status.
    async fn update_status(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> Result<(), UpdateError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_updater_is_object_safe() {
        fn _accepts_dyn(_u: &dyn StatusUpdater) {}
    }

    #[test]
    fn update_error_carries_reason() {
        let err = UpdateError::rejected("HTTP 500");
        assert_eq!(err.to_string(), "update rejected: HTTP 500");
    }
}
