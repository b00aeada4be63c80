//! Data-parallel variants of map/filter/reduce, enabled by the `parallel`
//! feature.
//!
//! Preconditions: the supplied functions must be pure (no side effects on
//! shared state), the `combine` step of [`par_reduce`] must be associative,
//! and its identity must be neutral. Partial results are merged pairwise in
//! an unspecified grouping, so violating any of these yields nondeterministic
//! output. Both variants still preserve input order in their results.

use rayon::prelude::*;

/// Parallel element-wise transform. Output order matches input order.
pub fn par_map<T, U>(seq: &[T], f: impl Fn(&T) -> U + Sync + Send) -> Vec<U>
where
    T: Sync,
    U: Send,
{
    seq.par_iter().map(|e| f(e)).collect()
}

/// Parallel filter. Output order matches input order.
pub fn par_filter<T>(seq: &[T], pred: impl Fn(&T) -> bool + Sync + Send) -> Vec<T>
where
    T: Clone + Send + Sync,
{
    seq.par_iter().filter(|e| pred(e)).cloned().collect()
}

/// Parallel fold. Chunks are accumulated with `accumulate` starting from a
/// clone of `identity`, then partial results are merged pairwise with
/// `combine`. Requires `combine` associative and `identity` neutral; an empty
/// sequence returns `identity` unchanged.
pub fn par_reduce<T, A>(
    seq: &[T],
    identity: A,
    accumulate: impl Fn(A, &T) -> A + Sync + Send,
    combine: impl Fn(A, A) -> A + Sync + Send,
) -> A
where
    T: Sync,
    A: Clone + Send + Sync,
{
    // Without elements there is nothing to accumulate, but rayon would still
    // combine a chunk identity with the reduce identity.
    if seq.is_empty() {
        return identity;
    }
    seq.par_iter()
        .fold(|| identity.clone(), |acc, e| accumulate(acc, e))
        .reduce(|| identity.clone(), |a, b| combine(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops;
    use crate::record::Record;

    fn many() -> Vec<Record> {
        (0..1000).map(|i| Record::new(i, format!("p{i}"))).collect()
    }

    #[test]
    fn par_map_matches_sequential_map() {
        let seq = many();
        let par: Vec<i64> = par_map(&seq, |r| i64::from(r.age) * 2);
        let ser: Vec<i64> = ops::map(&seq, |r| i64::from(r.age) * 2);
        assert_eq!(par, ser);
    }

    #[test]
    fn par_filter_preserves_order() {
        let seq = many();
        let par = par_filter(&seq, |r| r.age % 3 == 0);
        let ser = ops::filter(&seq, |r| r.age % 3 == 0);
        assert_eq!(par, ser);
    }

    #[test]
    fn par_reduce_with_associative_combiner_matches_sequential() {
        let seq = many();
        let par = par_reduce(&seq, 0_i64, |acc, r| acc + i64::from(r.age), |a, b| a + b);
        let ser = ops::reduce(&seq, 0_i64, |acc, r| acc + i64::from(r.age));
        assert_eq!(par, ser);
    }

    #[test]
    fn par_reduce_of_empty_returns_identity() {
        let empty: Vec<Record> = Vec::new();
        let out = par_reduce(&empty, 42_i64, |acc, r| acc + i64::from(r.age), |a, b| a + b);
        assert_eq!(out, 42);
    }
}
