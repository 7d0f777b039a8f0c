//! Job application domain - records, the status catalog, and statistics.

mod record;
mod stats;
mod status;

pub use record::{ApplicationPatch, ApplicationRecord, NewApplication};
pub use stats::StatusCounts;
pub use status::ApplicationStatus;
