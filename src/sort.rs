//! Stable sorting. Key-based and comparator-based forms produce identical
//! results for equivalent orderings; ties always keep the input's relative
//! order.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::error::SequenceError;
use crate::record::Record;

/// Sorted copy ordered by an extracted key.
pub fn sort_by_key<T: Clone, K: Ord>(seq: &[T], key: impl Fn(&T) -> K) -> Vec<T> {
    let mut out = seq.to_vec();
    out.sort_by_key(|e| key(e));
    out
}

/// Sorted copy ordered by an explicit three-way comparator. Comparators must
/// return an `Ordering`; subtraction tricks are not representable here and
/// cannot overflow.
pub fn sort_with<T: Clone>(seq: &[T], cmp: impl Fn(&T, &T) -> Ordering) -> Vec<T> {
    let mut out = seq.to_vec();
    out.sort_by(|a, b| cmp(a, b));
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Record fields a sort specification can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Age,
    Name,
}

impl SortKey {
    #[inline]
    fn compare(self, a: &Record, b: &Record) -> Ordering {
        match self {
            Self::Age => a.age.cmp(&b.age),
            Self::Name => a.name.cmp(&b.name),
        }
    }
}

/// One sort criterion: a record field plus a direction. Parsed from strings
/// such as `"age"`, `"age:desc"`, or `"name:asc"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    key: SortKey,
    order: SortOrder,
}

impl SortSpec {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    pub fn ascending(key: SortKey) -> Self {
        Self::new(key, SortOrder::Ascending)
    }

    pub fn descending(key: SortKey) -> Self {
        Self::new(key, SortOrder::Descending)
    }

    pub fn key(&self) -> SortKey {
        self.key
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }
}

impl FromStr for SortSpec {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, order) = match s.split_once(':') {
            Some((key, order)) => (key, Some(order)),
            None => (s, None),
        };
        let key = match key {
            "age" => SortKey::Age,
            "name" => SortKey::Name,
            other => {
                return Err(SequenceError::InvalidArgument {
                    reason: format!("unknown sort key: {other}"),
                });
            }
        };
        let order = match order {
            None | Some("asc") => SortOrder::Ascending,
            Some("desc") => SortOrder::Descending,
            Some(other) => {
                return Err(SequenceError::InvalidArgument {
                    reason: format!("unknown sort order: {other}"),
                });
            }
        };
        Ok(Self::new(key, order))
    }
}

/// Stable multi-key sort over records. Later specs break ties left by earlier
/// ones; records equal under every spec keep their input order.
pub fn sort_records(seq: &[Record], specs: &[SortSpec]) -> Vec<Record> {
    if seq.is_empty() || specs.is_empty() {
        return seq.to_vec();
    }
    let mut out = seq.to_vec();
    out.sort_by(|a, b| {
        for spec in specs {
            let cmp = spec.key.compare(a, b);
            if cmp != Ordering::Equal {
                return spec.order.apply(cmp);
            }
        }
        Ordering::Equal
    });
    out
}
