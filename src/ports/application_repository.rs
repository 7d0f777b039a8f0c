//! Application record repository port.
//!
//! Every operation is owner-scoped: reads, updates, and deletes filter by
//! (id, owner) jointly, so a record is never visible to or mutable by a
//! non-owner. A miss on that joint filter is `NotFound`, deliberately
//! indistinguishable from a record that does not exist at all.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::applications::{
    ApplicationPatch, ApplicationRecord, ApplicationStatus, NewApplication,
};
use crate::domain::foundation::{ApplicationId, UserId};

/// Filter and pagination window for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListFilter {
    /// Restrict to one status when present.
    pub status: Option<ApplicationStatus>,
    /// 1-based page number.
    pub page: u32,
    /// Page size, bounded by the handler (≤ 100).
    pub limit: u32,
}

impl ListFilter {
    /// Zero-based row offset for this window.
    ///
    /// Widened to u64 before multiplying; the page number comes straight
    /// from the query string and an extreme value must not overflow.
    pub fn offset(&self) -> u64 {
        u64::from(self.page).saturating_sub(1) * u64::from(self.limit)
    }
}

/// One page of records plus the total count independent of the window.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationPage {
    pub records: Vec<ApplicationRecord>,
    pub total: u64,
}

/// Repository errors.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No row matches both the id and the owner.
    #[error("Application not found")]
    NotFound,

    /// Store query or connection failure.
    #[error("store error: {0}")]
    Store(String),
}

impl RepositoryError {
    /// Creates a store error with a message.
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store(message.into())
    }
}

/// Port for persisting and querying application records.
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Lists the owner's records, newest first, within the window.
    ///
    /// `total` counts every matching row regardless of the window so the
    /// UI can compute page counts.
    async fn list(
        &self,
        owner: &UserId,
        filter: &ListFilter,
    ) -> Result<ApplicationPage, RepositoryError>;

    /// Fetches one record by (id, owner).
    async fn find_by_id(
        &self,
        owner: &UserId,
        id: &ApplicationId,
    ) -> Result<ApplicationRecord, RepositoryError>;

    /// Inserts a record and returns it with generated id and timestamps.
    async fn insert(
        &self,
        owner: &UserId,
        application: &NewApplication,
    ) -> Result<ApplicationRecord, RepositoryError>;

    /// Applies the supplied fields to the record matching (id, owner).
    async fn update(
        &self,
        owner: &UserId,
        id: &ApplicationId,
        patch: &ApplicationPatch,
    ) -> Result<ApplicationRecord, RepositoryError>;

    /// Deletes the record matching (id, owner).
    async fn delete(&self, owner: &UserId, id: &ApplicationId) -> Result<(), RepositoryError>;

    /// Raw `(status, count)` rows for the owner's records.
    ///
    /// Returned as stored strings; the stats aggregate decides which
    /// values it recognizes.
    async fn status_counts(&self, owner: &UserId) -> Result<Vec<(String, i64)>, RepositoryError>;
}
