//! Per-status statistics aggregate.
//!
//! Derived on demand from the owner's records, never stored.

use std::collections::BTreeMap;

use serde::Serialize;

use super::ApplicationStatus;

/// Counts per status plus a total.
///
/// All six statuses are always present, initialized to zero. Rows whose
/// stored status is not one of the six known values are excluded from both
/// the buckets and the total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    counts: BTreeMap<&'static str, u64>,
    total: u64,
}

impl StatusCounts {
    /// Builds the aggregate from raw `(status, count)` rows.
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = (S, i64)>,
        S: AsRef<str>,
    {
        let mut counts: BTreeMap<&'static str, u64> = ApplicationStatus::ALL
            .iter()
            .map(|s| (s.as_str(), 0u64))
            .collect();

        for (status, count) in rows {
            if count <= 0 {
                continue;
            }
            if let Ok(known) = status.as_ref().parse::<ApplicationStatus>() {
                *counts.entry(known.as_str()).or_insert(0) += count as u64;
            }
        }

        let total = counts.values().sum();
        Self { counts, total }
    }

    /// Count for a single status.
    pub fn get(&self, status: ApplicationStatus) -> u64 {
        self.counts.get(status.as_str()).copied().unwrap_or(0)
    }

    /// Sum over the six known statuses.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Iterator over `(wire name, count)` pairs for all six statuses.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        ApplicationStatus::ALL
            .iter()
            .map(move |s| (s.as_str(), self.get(*s)))
    }
}
