//! Functional-style sequence transformations over in-memory records.
//!
//! Every operation is a pure function from a slice (and parameters) to a new
//! collection, scalar, or map; inputs are never mutated. [`Record`] is the
//! motivating element type, but operations are generic wherever the contract
//! allows.

pub mod aggregate;
pub mod collect;
pub mod error;
pub mod ops;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod record;
pub mod sort;

pub use aggregate::Summary;
pub use collect::Partition;
pub use error::{Result, SequenceError};
pub use record::Record;
pub use sort::{SortKey, SortOrder, SortSpec};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
