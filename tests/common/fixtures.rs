//! The two demonstration datasets. They are deliberately kept separate: the
//! full list carries colliding ages and names, the distinct list has unique
//! ages, and several contracts (strict vs merging map building) are only
//! observable against the right one.

use sequence_ops::Record;

/// Sixteen records with duplicate ages (55, 57, 32, 25, 27) and duplicate
/// names (India, Hermine, Fany).
#[allow(dead_code)]
pub fn people() -> Vec<Record> {
    vec![
        Record::new(20, "Amir"),
        Record::new(22, "Bob"),
        Record::new(32, "Gorge"),
        Record::new(55, "Hermine"),
        Record::new(40, "India"),
        Record::new(55, "Jack"),
        Record::new(57, "India"),
        Record::new(59, "Lui"),
        Record::new(25, "Catherine"),
        Record::new(27, "Donald"),
        Record::new(30, "Egor"),
        Record::new(32, "Fany"),
        Record::new(25, "Giros"),
        Record::new(27, "Hermine"),
        Record::new(37, "Iliena"),
        Record::new(57, "Fany"),
    ]
}

/// Three records with pairwise-distinct ages; safe for strict keying by age.
#[allow(dead_code)]
pub fn people_distinct_ages() -> Vec<Record> {
    vec![
        Record::new(20, "Amir"),
        Record::new(22, "Bob"),
        Record::new(32, "Gorge"),
    ]
}
