use serde::{Deserialize, Serialize};
use std::fmt;

/// A simple domain entity: one integer attribute and one string attribute.
///
/// Records are plain values. Transformations produce new records rather than
/// rewriting fields in place, so a mapped sequence never aliases its source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Record {
    pub age: i32,
    pub name: String,
}

impl Record {
    pub fn new(age: i32, name: impl Into<String>) -> Self {
        Self {
            age,
            name: name.into(),
        }
    }

    /// Copy of this record with a different age.
    pub fn with_age(&self, age: i32) -> Self {
        Self {
            age,
            name: self.name.clone(),
        }
    }

    /// Copy of this record with a different name.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            age: self.age,
            name: name.into(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.age)
    }
}
