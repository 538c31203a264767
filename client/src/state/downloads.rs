//! Per-dataset download counters.
//!
//! Each dataset file has its own counter under `count-<stem>`, where the
//! stem is the file name up to its first `.`. Counts persist in the store
//! and are restored when the page loads.

#[cfg(test)]
#[path = "downloads_test.rs"]
mod downloads_test;

use std::collections::BTreeMap;

use crate::util::storage::{KeyValueStore, read_count, write_count};

pub const DATASETS_PATH: &str = "/datasets";

/// Storage key (and counter element id) for a dataset file.
#[must_use]
pub fn counter_key(file: &str) -> String {
    let stem = file.split('.').next().unwrap_or(file);
    format!("count-{stem}")
}

/// URL the dataset is served from.
#[must_use]
pub fn dataset_href(file: &str) -> String {
    format!("{DATASETS_PATH}/{file}")
}

/// Counter text shown under a dataset card.
#[must_use]
pub fn count_label(count: u64) -> String {
    format!("{count} Downloads")
}

/// Counters for every dataset on the page, keyed by file name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DownloadCounts {
    counts: BTreeMap<String, u64>,
}

impl DownloadCounts {
    /// Restore saved counts for `files`.
    pub fn load<'a>(store: &impl KeyValueStore, files: impl IntoIterator<Item = &'a str>) -> Self {
        let counts = files
            .into_iter()
            .map(|file| (file.to_owned(), read_count(store, &counter_key(file))))
            .collect();
        Self { counts }
    }

    #[must_use]
    pub fn get(&self, file: &str) -> u64 {
        self.counts.get(file).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn label(&self, file: &str) -> String {
        count_label(self.get(file))
    }

    /// Record one download of `file`, persisting the new count.
    ///
    /// Reads the stored value first so other tabs' downloads are not lost.
    pub fn record(&mut self, store: &impl KeyValueStore, file: &str) -> u64 {
        let key = counter_key(file);
        let next = read_count(store, &key).saturating_add(1);
        write_count(store, &key, next);
        self.counts.insert(file.to_owned(), next);
        next
    }
}
