use thiserror::Error;

/// Errors surfaced by sequence operations.
///
/// Absence of a value (min/max over an empty sequence) is not an error; those
/// operations return `Option` instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SequenceError {
    /// Two elements produced the same map key and no merge function was
    /// supplied. Distinct from a missing key: the strict map builder refuses
    /// to silently drop either value.
    #[error("Duplicate key while building map: {key}")]
    DuplicateKey { key: String },

    /// A data-driven parameter failed validation (e.g. an unparseable sort
    /// specification).
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },
}

pub type Result<T> = std::result::Result<T, SequenceError>;
