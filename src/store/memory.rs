//! In-memory campaign store backed by a JSON dump.

use super::CampaignStore;
use crate::model::{Campaign, CampaignId, Crash, CrashFilter, Dataset, DedupKey, FuzzerRun};
use crate::utils::config::DUMP_SCHEMA_VERSION;
use crate::utils::error::StoreError;
use log::debug;
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read a campaign dump from a JSON file
///
/// **Public** - used by the CLI and for validation
///
/// # Errors
/// * `StoreError::ReadFailed` - file cannot be opened
/// * `StoreError::JsonError` - malformed dump
/// * `StoreError::UnsupportedVersion` - dump major version differs
pub fn load_dataset(input_path: impl AsRef<Path>) -> Result<Dataset, StoreError> {
    let input_path = input_path.as_ref();

    debug!("Reading campaign dump from: {}", input_path.display());

    let file = File::open(input_path)?;
    let dataset: Dataset = serde_json::from_reader(BufReader::new(file))?;

    if major_version(&dataset.version) != major_version(DUMP_SCHEMA_VERSION) {
        return Err(StoreError::UnsupportedVersion(dataset.version));
    }

    debug!(
        "Dump loaded: {} campaigns, {} fuzzers, {} crashes",
        dataset.campaigns.len(),
        dataset.fuzzers.len(),
        dataset.crashes.len()
    );

    Ok(dataset)
}

fn major_version(version: &str) -> &str {
    version.split('.').next().unwrap_or(version)
}

/// Keep the earliest crash for every distinct key value
///
/// Crashes without a value for `key` are dropped. Among crashes sharing a
/// key and creation time the lowest id wins. The result is ordered by
/// creation time, ties by key value.
pub fn first_occurrences<'a>(
    crashes: impl IntoIterator<Item = &'a Crash>,
    key: DedupKey,
    filter: &CrashFilter,
) -> Vec<Crash> {
    let mut earliest: HashMap<&str, &Crash> = HashMap::new();

    for crash in crashes.into_iter().filter(|c| filter.matches(c)) {
        let Some(value) = key.value_of(crash) else {
            continue;
        };

        earliest
            .entry(value)
            .and_modify(|best| {
                if (crash.created, crash.id) < (best.created, best.id) {
                    *best = crash;
                }
            })
            .or_insert(crash);
    }

    let mut firsts: Vec<(&str, &Crash)> = earliest.into_iter().collect();
    firsts.sort_by(|(ka, a), (kb, b)| a.created.cmp(&b.created).then_with(|| ka.cmp(kb)));

    firsts.into_iter().map(|(_, crash)| crash.clone()).collect()
}

/// Campaign store over a fully loaded dump
#[derive(Debug, Clone)]
pub struct MemoryStore {
    dataset: Dataset,
}

impl MemoryStore {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    /// Load a dump file into a store
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        load_dataset(path).map(Self::new)
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    fn crashes_of(&self, id: CampaignId) -> impl Iterator<Item = &Crash> {
        self.dataset.crashes.iter().filter(move |c| c.campaign_id == id)
    }
}

impl CampaignStore for MemoryStore {
    fn campaign(&self, id: CampaignId) -> Result<Campaign, StoreError> {
        self.dataset
            .campaigns
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(StoreError::UnknownCampaign(id))
    }

    fn list_runs(&self, id: CampaignId) -> Result<Vec<FuzzerRun>, StoreError> {
        self.campaign(id)?;

        let mut runs: Vec<FuzzerRun> = self
            .dataset
            .fuzzers
            .iter()
            .filter(|f| f.campaign_id == id && f.started)
            .cloned()
            .collect();

        runs.sort_by_key(|r| (r.start_time, r.id));
        for run in &mut runs {
            run.snapshots.sort_by_key(|s| s.unix_time);
        }

        Ok(runs)
    }

    fn list_distinct_crashes(
        &self,
        id: CampaignId,
        key: DedupKey,
        filter: &CrashFilter,
    ) -> Result<Vec<Crash>, StoreError> {
        self.campaign(id)?;

        let crashes = first_occurrences(self.crashes_of(id), key, filter);
        debug!(
            "Campaign {}: {} distinct crashes by {}",
            id,
            crashes.len(),
            key
        );

        Ok(crashes)
    }

    fn has_crashes(&self, id: CampaignId) -> Result<bool, StoreError> {
        self.campaign(id)?;
        Ok(self.crashes_of(id).next().is_some())
    }
}
