//! Handlers for the application query service.
//!
//! Every handler takes the owner from an authenticated context established
//! upstream; none accepts a client-supplied owner id.

mod application_stats;
mod create_application;
mod delete_application;
mod get_application;
mod list_applications;
mod update_application;

pub use application_stats::{ApplicationStatsHandler, ApplicationStatsQuery};
pub use create_application::{CreateApplicationCommand, CreateApplicationHandler};
pub use delete_application::{DeleteApplicationCommand, DeleteApplicationHandler};
pub use get_application::{GetApplicationHandler, GetApplicationQuery};
pub use list_applications::{ApplicationList, ListApplicationsHandler, ListApplicationsQuery};
pub use update_application::{UpdateApplicationCommand, UpdateApplicationHandler};

use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::ports::RepositoryError;

/// Errors surfaced by the application query service.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Malformed or out-of-range input; carries field-level detail.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Record absent or not owned by the caller. The message is generic on
    /// purpose so non-owners learn nothing about existence.
    #[error("Application not found")]
    NotFound,

    /// Store or connection failure; detail is logged, never sent to clients.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ApplicationError::NotFound,
            RepositoryError::Store(msg) => ApplicationError::Infrastructure(msg),
        }
    }
}
