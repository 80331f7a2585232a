use crate::aggregate::Buckets;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranked<K> {
    pub rank: usize,
    pub key: K,
    pub value: u64,
}

/// Orders totals by value, highest first, numbering them 1, 2, 3, ...
///
/// The sort is stable, so equal values keep the insertion order of
/// `totals` and still receive distinct consecutive ranks.
pub fn rank_descending<K: Clone>(totals: &Buckets<K, u64>) -> Vec<Ranked<K>> {
    let mut sorted: Vec<(&K, u64)> = totals.iter().map(|(k, v)| (k, *v)).collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));
    sorted
        .into_iter()
        .enumerate()
        .map(|(idx, (key, value))| Ranked {
            rank: idx + 1,
            key: key.clone(),
            value,
        })
        .collect()
}
