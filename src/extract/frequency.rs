use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Tag -> occurrence count.
///
/// Keys are normalized tags (non-empty, lowercase `a`-`z` only); every
/// present count is at least 1. Iteration is ascending by tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrequencyMap {
    inner: BTreeMap<String, u64>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        FrequencyMap {
            inner: BTreeMap::new(),
        }
    }

    /// Increment the count for a tag, inserting it at 1 if absent.
    pub fn increment(&mut self, tag: impl Into<String>) {
        *self.inner.entry(tag.into()).or_insert(0) += 1;
    }

    /// Count for a tag, 0 if absent.
    pub fn count(&self, tag: &str) -> u64 {
        self.inner.get(tag).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.inner.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &u64)> {
        self.inner.iter()
    }

    /// Merge another map into this one, summing counts per key.
    ///
    /// This is the combination rule for extractions performed over separate
    /// documents (or document shards) with independent maps.
    pub fn merge(&mut self, other: FrequencyMap) {
        for (tag, count) in other.inner {
            *self.inner.entry(tag).or_insert(0) += count;
        }
    }
}
