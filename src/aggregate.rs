// Filtering, grouping and summing over borrowed records.
use crate::types::{AccidentRecord, Period};
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::RangeInclusive;

/// A map that iterates in first-insertion order of its keys.
#[derive(Debug, Clone)]
pub struct Buckets<K, V> {
    entries: Vec<(K, V)>,
    index: HashMap<K, usize>,
}

impl<K, V> Default for Buckets<K, V> {
    fn default() -> Self {
        Buckets {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone, V> Buckets<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry_or_insert_with(&mut self, key: K, default: impl FnOnce() -> V) -> &mut V {
        let idx = match self.index.get(&key) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.index.insert(key.clone(), i);
                self.entries.push((key, default()));
                i
            }
        };
        &mut self.entries[idx].1
    }

    #[cfg(test)]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: std::borrow::Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }
}

impl<K, V> Buckets<K, V> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    #[cfg(test)]
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for Buckets<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

pub fn filter_by_periods<'a>(
    records: &'a [AccidentRecord],
    allowed: &[Period],
) -> Vec<&'a AccidentRecord> {
    records
        .iter()
        .filter(|r| allowed.contains(&r.period))
        .collect()
}

/// Records of `municipality` (exact, case-sensitive match) dated within `years`.
pub fn filter_by_years_and_municipality<'a>(
    records: &'a [AccidentRecord],
    years: &RangeInclusive<i32>,
    municipality: &str,
) -> Vec<&'a AccidentRecord> {
    records
        .iter()
        .filter(|r| years.contains(&r.period.year()) && r.municipality == municipality)
        .collect()
}

pub fn group_by<'a, K, F>(
    records: impl IntoIterator<Item = &'a AccidentRecord>,
    mut key_fn: F,
) -> Buckets<K, Vec<&'a AccidentRecord>>
where
    K: Eq + Hash + Clone,
    F: FnMut(&'a AccidentRecord) -> K,
{
    let mut groups = Buckets::new();
    for r in records {
        groups.entry_or_insert_with(key_fn(r), Vec::new).push(r);
    }
    groups
}

/// Per-key totals of `value_fn`. Totals saturate at `u64::MAX`.
pub fn sum_by<'a, K, F, G>(
    records: impl IntoIterator<Item = &'a AccidentRecord>,
    mut key_fn: F,
    mut value_fn: G,
) -> Buckets<K, u64>
where
    K: Eq + Hash + Clone,
    F: FnMut(&'a AccidentRecord) -> K,
    G: FnMut(&'a AccidentRecord) -> u64,
{
    let mut totals: Buckets<K, u64> = Buckets::new();
    for r in records {
        let total = totals.entry_or_insert_with(key_fn(r), || 0);
        *total = total.saturating_add(value_fn(r));
    }
    totals
}
