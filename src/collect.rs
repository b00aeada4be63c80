//! Associative collectors: building maps, groups and partitions from a
//! sequence, with composable downstream aggregations.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use crate::error::{Result, SequenceError};

/// Build a key→value map. If two elements produce the same key this fails
/// with [`SequenceError::DuplicateKey`] and no partial map is returned; use
/// [`to_map_merging`] to combine colliding values instead.
pub fn to_map<T, K, V>(
    seq: &[T],
    key_fn: impl Fn(&T) -> K,
    value_fn: impl Fn(&T) -> V,
) -> Result<HashMap<K, V>>
where
    K: Eq + Hash + fmt::Debug,
{
    let mut map = HashMap::with_capacity(seq.len());
    for e in seq {
        let key = key_fn(e);
        if map.contains_key(&key) {
            return Err(SequenceError::DuplicateKey {
                key: format!("{key:?}"),
            });
        }
        map.insert(key, value_fn(e));
    }
    Ok(map)
}

/// Build a key→value map, resolving collisions with `merge(existing, new)`.
pub fn to_map_merging<T, K, V>(
    seq: &[T],
    key_fn: impl Fn(&T) -> K,
    value_fn: impl Fn(&T) -> V,
    merge: impl Fn(V, V) -> V,
) -> HashMap<K, V>
where
    K: Eq + Hash,
{
    let mut map: HashMap<K, V> = HashMap::with_capacity(seq.len());
    for e in seq {
        let key = key_fn(e);
        let value = value_fn(e);
        match map.remove(&key) {
            Some(existing) => {
                map.insert(key, merge(existing, value));
            }
            None => {
                map.insert(key, value);
            }
        }
    }
    map
}

/// Result of splitting a sequence by a predicate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Partition<R> {
    pub matched: R,
    pub unmatched: R,
}

/// Split into elements satisfying the predicate and the rest. Both sides
/// preserve input order.
pub fn partition_by<T: Clone>(seq: &[T], pred: impl Fn(&T) -> bool) -> Partition<Vec<T>> {
    let mut partition = Partition::<Vec<T>>::default();
    for e in seq {
        if pred(e) {
            partition.matched.push(e.clone());
        } else {
            partition.unmatched.push(e.clone());
        }
    }
    partition
}

/// Partition, then apply a downstream collector to each side (e.g. counting
/// elements instead of listing them).
pub fn partition_by_with<T: Clone, R>(
    seq: &[T],
    pred: impl Fn(&T) -> bool,
    downstream: impl Fn(&[T]) -> R,
) -> Partition<R> {
    let lists = partition_by(seq, pred);
    Partition {
        matched: downstream(&lists.matched),
        unmatched: downstream(&lists.unmatched),
    }
}

/// Group elements sharing a key. Members of a group keep their original
/// relative order; key iteration order is unspecified.
pub fn group_by<T: Clone, K>(seq: &[T], key_fn: impl Fn(&T) -> K) -> HashMap<K, Vec<T>>
where
    K: Eq + Hash,
{
    let mut map: HashMap<K, Vec<T>> = HashMap::new();
    for e in seq {
        map.entry(key_fn(e)).or_default().push(e.clone());
    }
    map
}

/// Group, then apply a downstream collector to each group's members.
pub fn group_by_with<T: Clone, K, R>(
    seq: &[T],
    key_fn: impl Fn(&T) -> K,
    downstream: impl Fn(&[T]) -> R,
) -> HashMap<K, R>
where
    K: Eq + Hash,
{
    group_by(seq, key_fn)
        .into_iter()
        .map(|(k, members)| (k, downstream(&members)))
        .collect()
}

/// Downstream collector counting group members.
pub fn counting<T>() -> impl Fn(&[T]) -> usize {
    |seq| seq.len()
}

/// Downstream collector listing group members.
pub fn to_vec<T: Clone>() -> impl Fn(&[T]) -> Vec<T> {
    |seq| seq.to_vec()
}

/// Downstream collector deduplicating group members by value equality.
pub fn to_set<T: Clone + Eq + Hash>() -> impl Fn(&[T]) -> HashSet<T> {
    |seq| seq.iter().cloned().collect()
}

/// Adapt a downstream collector to run on projected values, e.g. collect the
/// ages of a group of records rather than the records themselves.
pub fn mapping<T, U, R>(
    f: impl Fn(&T) -> U,
    downstream: impl Fn(&[U]) -> R,
) -> impl Fn(&[T]) -> R {
    move |seq| {
        let projected: Vec<U> = seq.iter().map(&f).collect();
        downstream(&projected)
    }
}

/// Apply `finisher` to the output of `collector`, adapting its natural result
/// type (e.g. narrowing a count, or turning an optional element into a plain
/// string with a fallback for absence).
pub fn collect_and_then<T, A, B>(
    collector: impl Fn(&[T]) -> A,
    finisher: impl Fn(A) -> B,
) -> impl Fn(&[T]) -> B {
    move |seq| finisher(collector(seq))
}
