//! First-letter bucket sort ("false hash" sort).
//!
//! Records are grouped by the uppercase form of their first character,
//! every group is sorted on its own by ordinal (code point) comparison, and
//! the groups are concatenated in ascending key order. There is no hash
//! function involved: the key is the character itself and the map is
//! ordered, so the merge is a plain in-order walk.
use std::collections::BTreeMap;
use std::collections::btree_map;

use tracing::{debug, info};

use super::key::bucket_key;

/// Number of leading records shown in a bucket preview.
pub const PREVIEW_LEN: usize = 5;

/// Records grouped by bucket key.
///
/// Built fresh by [`Buckets::partition`] and consumed by
/// [`Buckets::merge`]; nothing outlives one sort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buckets {
    map: BTreeMap<char, Vec<String>>,
}

/// Size and leading records of one bucket, for progress reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketSummary {
    pub key: char,
    pub len: usize,
    pub preview: Vec<String>,
}

impl BucketSummary {
    /// True when the bucket holds more records than the preview shows.
    pub fn truncated(&self) -> bool {
        self.len > self.preview.len()
    }
}

impl Buckets {
    /// Distribute records into buckets, keeping input order inside each
    /// bucket. Empty records have no key and are skipped.
    pub fn partition<I, S>(records: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut map: BTreeMap<char, Vec<String>> = BTreeMap::new();
        for record in records {
            let record = record.into();
            let Some(key) = bucket_key(&record) else {
                continue;
            };
            match map.entry(key) {
                btree_map::Entry::Vacant(slot) => {
                    debug!(key = %key, "created bucket");
                    slot.insert(vec![record]);
                }
                btree_map::Entry::Occupied(mut slot) => slot.get_mut().push(record),
            }
        }
        info!(buckets = map.len(), "partitioned records by first letter");
        Buckets { map }
    }

    /// Sort every bucket ascending by code point. Stable.
    pub fn sort_each(&mut self) {
        for (key, bucket) in self.map.iter_mut() {
            bucket.sort();
            debug!(key = %key, len = bucket.len(), "sorted bucket");
        }
        info!(buckets = self.map.len(), "sorted buckets");
    }

    /// Concatenate the buckets in ascending key order.
    pub fn merge(self) -> Vec<String> {
        let total = self.record_count();
        let mut result = Vec::with_capacity(total);
        for (_, bucket) in self.map {
            result.extend(bucket);
        }
        info!(records = result.len(), "merged buckets");
        result
    }

    /// Per-bucket report in key order.
    pub fn summary(&self) -> Vec<BucketSummary> {
        self.map
            .iter()
            .map(|(&key, bucket)| BucketSummary {
                key,
                len: bucket.len(),
                preview: bucket.iter().take(PREVIEW_LEN).cloned().collect(),
            })
            .collect()
    }

    /// Bucket keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = char> + '_ {
        self.map.keys().copied()
    }

    pub fn get(&self, key: char) -> Option<&[String]> {
        self.map.get(&key).map(Vec::as_slice)
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Number of records across all buckets.
    pub fn record_count(&self) -> usize {
        self.map.values().map(Vec::len).sum()
    }
}

/// Sort records by first-letter buckets. Pure; the input is not touched.
///
/// The output holds the same records as the input (minus empty strings,
/// which have no bucket) and sorting it again returns it unchanged.
pub fn bucket_sort<S: AsRef<str>>(records: &[S]) -> Vec<String> {
    let mut buckets = Buckets::partition(records.iter().map(|r| r.as_ref()));
    buckets.sort_each();
    buckets.merge()
}
