//! Numeric and comparator-based aggregation. Empty input never produces a
//! sentinel number; absence is an explicit `None`.

use std::cmp::Ordering;

/// Number of elements.
pub fn count<T>(seq: &[T]) -> usize {
    seq.len()
}

/// Sum of a numeric projection. The accumulator is i64 so projections of
/// 32-bit fields do not overflow while summing.
pub fn sum<T>(seq: &[T], proj: impl Fn(&T) -> i64) -> i64 {
    seq.iter().map(|e| proj(e)).sum()
}

/// Minimum of a numeric projection, or `None` on empty input.
pub fn min<T>(seq: &[T], proj: impl Fn(&T) -> i64) -> Option<i64> {
    seq.iter().map(|e| proj(e)).min()
}

/// Maximum of a numeric projection, or `None` on empty input.
pub fn max<T>(seq: &[T], proj: impl Fn(&T) -> i64) -> Option<i64> {
    seq.iter().map(|e| proj(e)).max()
}

/// Element minimal under the comparator, or `None` on empty input. Among
/// equal elements the earliest one wins.
pub fn min_by<T: Clone>(seq: &[T], cmp: impl Fn(&T, &T) -> Ordering) -> Option<T> {
    let mut best: Option<&T> = None;
    for e in seq {
        match best {
            Some(b) if cmp(e, b) == Ordering::Less => best = Some(e),
            Some(_) => {}
            None => best = Some(e),
        }
    }
    best.cloned()
}

/// Element maximal under the comparator, or `None` on empty input. Among
/// equal elements the earliest one wins.
pub fn max_by<T: Clone>(seq: &[T], cmp: impl Fn(&T, &T) -> Ordering) -> Option<T> {
    min_by(seq, |a, b| cmp(b, a))
}

/// One-pass aggregate over a numeric projection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Summary {
    pub count: usize,
    pub sum: i64,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

/// Count, sum, min and max of a projection in a single scan.
pub fn summarize<T>(seq: &[T], proj: impl Fn(&T) -> i64) -> Summary {
    let mut summary = Summary::default();
    for e in seq {
        let v = proj(e);
        summary.count += 1;
        summary.sum += v;
        summary.min = Some(summary.min.map_or(v, |m| m.min(v)));
        summary.max = Some(summary.max.map_or(v, |m| m.max(v)));
    }
    summary
}
