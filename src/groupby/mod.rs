//! Grouping and per-group reduction
//!
//! [`GroupBy`] partitions a slice of records by a derived key and keeps the
//! row indices of each group. Key order is fixed at construction: either the
//! order in which keys are first seen, or ascending key order. [`GroupBy::agg`]
//! collapses each group with a reduction function into an ordered
//! [`Aggregate`].

pub mod reducers;

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use log::debug;

use crate::series::ChartSeries;

/// Iteration order of group keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyOrder {
    /// Ascending key order
    Sorted,
    /// Order in which each key first appears in the source
    #[default]
    FirstSeen,
}

/// Records grouped by key
#[derive(Debug)]
pub struct GroupBy<'a, K, T>
where
    K: Debug + Eq + Hash + Clone,
{
    /// Group keys in output order
    keys: Vec<K>,

    /// Row indices of each group
    groups: HashMap<K, Vec<usize>>,

    /// Source records
    source: &'a [T],
}

impl<'a, K, T> GroupBy<'a, K, T>
where
    K: Debug + Eq + Hash + Clone + Ord,
{
    /// Group `source` by `key_fn`
    pub fn new<F>(source: &'a [T], key_fn: F, order: KeyOrder) -> Self
    where
        F: Fn(&'a T) -> K,
    {
        let mut keys = Vec::new();
        let mut groups: HashMap<K, Vec<usize>> = HashMap::new();

        for (i, record) in source.iter().enumerate() {
            let key = key_fn(record);
            groups
                .entry(key)
                .or_insert_with_key(|key| {
                    keys.push(key.clone());
                    Vec::new()
                })
                .push(i);
        }

        if order == KeyOrder::Sorted {
            keys.sort();
        }

        debug!(
            "grouped {} records into {} groups ({:?})",
            source.len(),
            keys.len(),
            order
        );

        GroupBy {
            keys,
            groups,
            source,
        }
    }
}

impl<'a, K, T> GroupBy<'a, K, T>
where
    K: Debug + Eq + Hash + Clone,
{
    /// Number of groups
    pub fn group_count(&self) -> usize {
        self.keys.len()
    }

    /// Group keys in output order
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Records of the group for `key`
    pub fn get(&self, key: &K) -> Option<Vec<&'a T>> {
        self.groups.get(key).map(|indices| self.rows(indices))
    }

    /// Iterate over `(key, records)` in output order
    pub fn iter(&self) -> impl Iterator<Item = (&K, Vec<&'a T>)> + '_ {
        self.keys.iter().map(move |key| {
            let rows = self
                .groups
                .get(key)
                .map(|indices| self.rows(indices))
                .unwrap_or_default();
            (key, rows)
        })
    }

    /// Size of each group
    pub fn size(&self) -> Aggregate<K, usize> {
        self.agg(|group| group.len())
    }

    /// Reduce each group with `reduce_fn`
    pub fn agg<V, F>(&self, reduce_fn: F) -> Aggregate<K, V>
    where
        F: Fn(&[&'a T]) -> V,
    {
        let entries = self
            .iter()
            .map(|(key, rows)| (key.clone(), reduce_fn(&rows)))
            .collect();
        Aggregate { entries }
    }

    fn rows(&self, indices: &[usize]) -> Vec<&'a T> {
        let source: &'a [T] = self.source;
        indices.iter().filter_map(|&i| source.get(i)).collect()
    }
}

/// Group `source` by `key_fn` and reduce each group with `reduce_fn`
pub fn aggregate<'a, K, T, V, F, R>(
    source: &'a [T],
    key_fn: F,
    reduce_fn: R,
    order: KeyOrder,
) -> Aggregate<K, V>
where
    K: Debug + Eq + Hash + Clone + Ord,
    F: Fn(&'a T) -> K,
    R: Fn(&[&'a T]) -> V,
{
    GroupBy::new(source, key_fn, order).agg(reduce_fn)
}

/// Ordered mapping from group key to reduced value
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> Aggregate<K, V>
where
    K: PartialEq,
{
    /// Value for `key`
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }
}

impl<K, V> Aggregate<K, V> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn into_entries(self) -> Vec<(K, V)> {
        self.entries
    }

    /// Transform every value, keeping keys and order
    pub fn map_values<U, F>(self, f: F) -> Aggregate<K, U>
    where
        F: Fn(V) -> U,
    {
        Aggregate {
            entries: self.entries.into_iter().map(|(k, v)| (k, f(v))).collect(),
        }
    }

    /// Convert into a chart series, labelling keys with `label_fn`
    pub fn to_series<L, M>(&self, title: &str, label_fn: L, value_fn: M) -> ChartSeries
    where
        L: Fn(&K) -> String,
        M: Fn(&V) -> i64,
    {
        ChartSeries::from_pairs(
            title,
            self.entries.iter().map(|(k, v)| (label_fn(k), value_fn(v))),
        )
    }
}
