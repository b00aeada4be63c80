//! Element-wise and scanning operations. All functions take a slice and
//! return a new collection or scalar; the input is never modified.

use std::collections::HashSet;
use std::hash::Hash;

/// Keep elements satisfying the predicate, preserving order.
pub fn filter<T: Clone>(seq: &[T], pred: impl Fn(&T) -> bool) -> Vec<T> {
    seq.iter().filter(|e| pred(e)).cloned().collect()
}

/// First `n` elements in current order. `n` may exceed the length, in which
/// case the whole sequence is returned.
pub fn limit<T: Clone>(seq: &[T], n: usize) -> Vec<T> {
    seq.iter().take(n).cloned().collect()
}

/// True iff every element satisfies the predicate. Vacuously true on empty.
pub fn all_match<T>(seq: &[T], pred: impl Fn(&T) -> bool) -> bool {
    seq.iter().all(|e| pred(e))
}

/// True iff at least one element satisfies the predicate. False on empty.
pub fn any_match<T>(seq: &[T], pred: impl Fn(&T) -> bool) -> bool {
    seq.iter().any(|e| pred(e))
}

/// Longest prefix where the predicate holds. Scanning stops at the first
/// failing element, even if later elements would satisfy the predicate again;
/// this is not a filter.
pub fn take_while<T: Clone>(seq: &[T], pred: impl Fn(&T) -> bool) -> Vec<T> {
    seq.iter().take_while(|e| pred(e)).cloned().collect()
}

/// Drop the longest prefix satisfying the predicate; the result starts at the
/// first failing element and runs to the end of the sequence.
pub fn drop_while<T: Clone>(seq: &[T], pred: impl Fn(&T) -> bool) -> Vec<T> {
    seq.iter().skip_while(|e| pred(e)).cloned().collect()
}

/// Element-wise transform into a new sequence, possibly of a different type.
/// Source elements are borrowed, never mutated.
pub fn map<T, U>(seq: &[T], f: impl Fn(&T) -> U) -> Vec<U> {
    seq.iter().map(|e| f(e)).collect()
}

/// Left fold in sequence order. An empty sequence returns `identity`
/// unchanged.
pub fn reduce<T, A>(seq: &[T], identity: A, op: impl Fn(A, &T) -> A) -> A {
    seq.iter().fold(identity, op)
}

/// Materialize as an owned list.
pub fn to_list<T: Clone>(seq: &[T]) -> Vec<T> {
    seq.to_vec()
}

/// Materialize as a set, deduplicating by value equality. Order is discarded.
pub fn to_set<T: Clone + Eq + Hash>(seq: &[T]) -> HashSet<T> {
    seq.iter().cloned().collect()
}

/// Project each element to a string and join with `sep`. Empty input yields
/// the empty string.
pub fn join_strings<T>(seq: &[T], proj: impl Fn(&T) -> String, sep: &str) -> String {
    seq.iter().map(|e| proj(e)).collect::<Vec<_>>().join(sep)
}
