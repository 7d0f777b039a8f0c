//! PostgreSQL persistence adapters.

mod application_repository;
mod message_store;

pub use application_repository::PostgresApplicationRepository;
pub use message_store::PostgresMessageStore;
