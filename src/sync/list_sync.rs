//! Optimistic list synchronizer for application status changes.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::applications::{ApplicationRecord, ApplicationStatus};
use crate::domain::foundation::{ApplicationId, ValidationError};
use crate::ports::{StatusUpdater, UpdateError};

use super::{Notification, NotificationSink};

/// Client-side view of one application row.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncedApplication {
    pub id: ApplicationId,
    pub company_name: String,
    pub position_name: String,
    pub application_date: NaiveDate,
    pub status: ApplicationStatus,
    pub link: Option<String>,
    pub notes: Option<String>,
}

impl From<ApplicationRecord> for SyncedApplication {
    fn from(record: ApplicationRecord) -> Self {
        Self {
            id: record.id,
            company_name: record.company_name,
            position_name: record.position_name,
            application_date: record.application_date,
            status: record.status,
            link: record.link,
            notes: record.notes,
        }
    }
}

/// Errors surfaced by [`ApplicationListSync::change_status`].
#[derive(Debug, Error)]
pub enum SyncError {
    /// The requested status is outside the closed enumeration; nothing was
    /// mutated locally or remotely.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The id is not present in the local list; nothing was mutated.
    #[error("Application not found")]
    NotFound,

    /// The remote update failed; the local entry has been reverted.
    #[error(transparent)]
    Remote(#[from] UpdateError),
}

struct SyncState {
    entries: Vec<SyncedApplication>,
    filter: Option<ApplicationStatus>,
    /// Per-row request generation. A failed update only reverts if no
    /// newer optimistic write has claimed the row since.
    generations: HashMap<ApplicationId, u64>,
}

/// Holds the fetched list and reconciles optimistic status changes.
///
/// Each in-flight change carries its own snapshot/revert pair; changes for
/// different rows race freely without any global lock.
pub struct ApplicationListSync {
    state: Mutex<SyncState>,
    updater: Arc<dyn StatusUpdater>,
    sink: Arc<dyn NotificationSink>,
}

impl ApplicationListSync {
    pub fn new(updater: Arc<dyn StatusUpdater>, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            state: Mutex::new(SyncState {
                entries: Vec::new(),
                filter: None,
                generations: HashMap::new(),
            }),
            updater,
            sink,
        }
    }

    /// Replaces the held list with a freshly fetched page.
    pub fn set_list(&self, entries: impl IntoIterator<Item = SyncedApplication>) {
        let mut state = self.state.lock().unwrap();
        state.entries = entries.into_iter().collect();
        state.generations.clear();
    }

    /// Sets the status filter used by [`Self::visible`].
    pub fn set_filter(&self, filter: Option<ApplicationStatus>) {
        self.state.lock().unwrap().filter = filter;
    }

    /// The current filter.
    pub fn filter(&self) -> Option<ApplicationStatus> {
        self.state.lock().unwrap().filter
    }

    /// Snapshot of all held entries.
    pub fn entries(&self) -> Vec<SyncedApplication> {
        self.state.lock().unwrap().entries.clone()
    }

    /// Snapshot of entries matching the current filter.
    pub fn visible(&self) -> Vec<SyncedApplication> {
        let state = self.state.lock().unwrap();
        state
            .entries
            .iter()
            .filter(|e| state.filter.map_or(true, |f| e.status == f))
            .cloned()
            .collect()
    }

    /// Applies a status change optimistically and reconciles with the server.
    ///
    /// The local entry shows the new status immediately; on remote failure
    /// it is reverted to the snapshotted status, unless a newer change has
    /// claimed the row in the meantime.
    pub async fn change_status(
        &self,
        id: ApplicationId,
        new_status: &str,
    ) -> Result<(), SyncError> {
        let status = match new_status.parse::<ApplicationStatus>() {
            Ok(status) => status,
            Err(err) => {
                self.sink.notify(Notification::Invalid {
                    reason: err.to_string(),
                });
                return Err(SyncError::Validation(err));
            }
        };

        // Snapshot and apply under the lock, then release it before the
        // remote call so unrelated changes can interleave.
        let (previous, generation) = {
            let mut state = self.state.lock().unwrap();
            let entry = match state.entries.iter_mut().find(|e| e.id == id) {
                Some(entry) => entry,
                None => {
                    drop(state);
                    self.sink.notify(Notification::Invalid {
                        reason: "Application not found".to_string(),
                    });
                    return Err(SyncError::NotFound);
                }
            };

            let previous = entry.status;
            entry.status = status;

            let generation = state.generations.entry(id).or_insert(0);
            *generation += 1;
            (previous, *generation)
        };

        match self.updater.update_status(&id, status).await {
            Ok(()) => {
                self.sink.notify(Notification::StatusUpdated { id, status });
                Ok(())
            }
            Err(err) => {
                let mut state = self.state.lock().unwrap();
                let still_current = state.generations.get(&id) == Some(&generation);
                if still_current {
                    if let Some(entry) = state.entries.iter_mut().find(|e| e.id == id) {
                        entry.status = previous;
                    }
                }
                drop(state);

                self.sink.notify(Notification::StatusUpdateFailed {
                    id,
                    reason: err.to_string(),
                });
                Err(SyncError::Remote(err))
            }
        }
    }
}
