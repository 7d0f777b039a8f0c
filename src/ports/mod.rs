//! Ports - trait boundaries between the application core and adapters.

mod application_repository;
mod message_generator;
mod message_store;
mod session_validator;
mod status_updater;

pub use application_repository::{ApplicationPage, ApplicationRepository, ListFilter, RepositoryError};
pub use message_generator::{GeneratorError, MessageGenerator};
pub use message_store::{MessageStore, MessageStoreError};
pub use session_validator::SessionValidator;
pub use status_updater::{StatusUpdater, UpdateError};
