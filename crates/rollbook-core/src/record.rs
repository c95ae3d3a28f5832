//! Record model.
//!
//! `Roster` is the safe model of the original variable-length record
//! array: created once per run, populated in entry order, then read once
//! by the report renderer. Pre-allocation is clamped so a hostile count
//! cannot force a large allocation before any record has been entered —
//! an absurd count still fails, but at read time.

use crate::field::BoundedText;

/// Maximum name length, in characters.
pub const NAME_MAX: usize = 50;

/// Maximum address length, in characters.
pub const ADDRESS_MAX: usize = 100;

/// Upper bound on up-front roster capacity.
pub const ROSTER_PREALLOC_CAP: usize = 1024;

/// One student's {name, class, address} tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    pub name: BoundedText,
    pub class_number: i32,
    pub address: BoundedText,
}

/// Ordered sequence of records, fixed-length per run.
///
/// After a successful collection, `len()` equals the count the user
/// entered.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    records: Vec<StudentRecord>,
}

impl Roster {
    /// Create a roster that expects `count` records.
    pub fn with_expected(count: usize) -> Self {
        Self {
            records: Vec::with_capacity(count.min(ROSTER_PREALLOC_CAP)),
        }
    }

    pub fn push(&mut self, record: StudentRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&StudentRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StudentRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a StudentRecord;
    type IntoIter = std::slice::Iter<'a, StudentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::OverflowPolicy;

    fn record(name: &str, class: i32, address: &str) -> StudentRecord {
        StudentRecord {
            name: BoundedText::new(name.into(), NAME_MAX, OverflowPolicy::Reject).unwrap(),
            class_number: class,
            address: BoundedText::new(address.into(), ADDRESS_MAX, OverflowPolicy::Reject).unwrap(),
        }
    }

    #[test]
    fn test_roster_preserves_entry_order() {
        let mut roster = Roster::with_expected(2);
        roster.push(record("Alice", 5, "MainSt"));
        roster.push(record("Bob", 6, "ParkAve"));
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get(0).unwrap().name.as_str(), "Alice");
        assert_eq!(roster.get(1).unwrap().name.as_str(), "Bob");
    }

    #[test]
    fn test_empty_roster() {
        let roster = Roster::with_expected(0);
        assert!(roster.is_empty());
        assert_eq!(roster.iter().count(), 0);
    }

    #[test]
    fn test_prealloc_is_clamped() {
        // A huge expected count must not pre-allocate proportionally.
        let roster = Roster::with_expected(usize::MAX);
        assert!(roster.records.capacity() < ROSTER_PREALLOC_CAP * 2);
    }
}
