//! Read-only access to campaign data.
//!
//! The series computations never talk to storage directly; they receive
//! already-materialized runs and crashes through [`CampaignStore`].

pub mod memory;

pub use memory::{first_occurrences, load_dataset, MemoryStore};

use crate::model::{Campaign, CampaignId, Crash, CrashFilter, DedupKey, FuzzerRun};
use crate::utils::error::StoreError;

/// Data layer the dashboard graphs are computed from
pub trait CampaignStore {
    /// Look up a campaign
    fn campaign(&self, id: CampaignId) -> Result<Campaign, StoreError>;

    /// Started runs of a campaign, ordered by start time (ties by id),
    /// each with its snapshots in timestamp order
    fn list_runs(&self, id: CampaignId) -> Result<Vec<FuzzerRun>, StoreError>;

    /// First occurrence of every distinct `key` value among the crashes
    /// matching `filter`, ordered by creation time, ties by key value
    fn list_distinct_crashes(
        &self,
        id: CampaignId,
        key: DedupKey,
        filter: &CrashFilter,
    ) -> Result<Vec<Crash>, StoreError>;

    /// Whether any crash at all was recorded for the campaign
    fn has_crashes(&self, id: CampaignId) -> Result<bool, StoreError>;
}
