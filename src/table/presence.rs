// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! PresenceTable type recording which values have been seen.
//!
//! A PresenceTable is a fixed-size bitset with one bit per value in
//! [`MIN_VALUE`](crate::table::MIN_VALUE), [`MAX_VALUE`](crate::table::MAX_VALUE).
//! Bit `i` is set if and only if the value `i - 109` has been inserted.
//!
//! # Examples
//!
//! ```
//! use longest_run::table::{PresenceTable, Value};
//!
//! let mut table = PresenceTable::empty();
//! let three = Value::new(3).unwrap();
//! assert!(table.insert(three));
//! assert!(!table.insert(three)); // already present
//! table.insert(Value::new(-1).unwrap());
//!
//! assert_eq!(table.len(), 2);
//! assert_eq!(format!("{}", table), "{-1 3}");
//! ```

use crate::table::constants::{TABLE_SIZE, WORDS};
use crate::table::Value;
use std::fmt;

/// A set of values represented as a bitset.
///
/// Insert and lookup are O(1); the table is `Copy` and small (32 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PresenceTable([u64; WORDS]);

impl PresenceTable {
    /// Create a table with no values present.
    pub const fn empty() -> Self {
        Self([0; WORDS])
    }

    /// Create a table containing every representable value.
    pub fn full() -> Self {
        let mut table = Self::empty();
        for index in 0..TABLE_SIZE {
            table.0[index / 64] |= 1 << (index % 64);
        }
        table
    }

    /// Mark a value present.
    ///
    /// Returns true if the value was not present before.
    pub fn insert(&mut self, value: Value) -> bool {
        let index = value.index();
        let mask = 1u64 << (index % 64);
        let word = &mut self.0[index / 64];
        let fresh = *word & mask == 0;
        *word |= mask;
        fresh
    }

    /// Check if a value is present.
    pub fn contains(&self, value: Value) -> bool {
        self.contains_index(value.index())
    }

    /// Check if the slot at `index` is set. Indices outside the table are never set.
    pub fn contains_index(&self, index: usize) -> bool {
        index < TABLE_SIZE && (self.0[index / 64] >> (index % 64)) & 1 != 0
    }

    /// Number of values present.
    pub fn len(&self) -> usize {
        self.0.iter().map(|word| word.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&word| word == 0)
    }

    /// Iterate over the present values in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Value> + '_ {
        (0..TABLE_SIZE)
            .filter(move |&index| self.contains_index(index))
            .filter_map(Value::from_index)
    }
}

impl fmt::Display for PresenceTable {
    /// Format a table as "{-1 0 3}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "}}")
    }
}

impl FromIterator<Value> for PresenceTable {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut table = Self::empty();
        for value in iter {
            table.insert(value);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(value: i64) -> Value {
        Value::new(value).unwrap()
    }

    #[test]
    fn test_empty() {
        let table = PresenceTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
        assert_eq!(table, PresenceTable::default());
    }

    #[test]
    fn test_full() {
        let table = PresenceTable::full();
        assert_eq!(table.len(), TABLE_SIZE);
        assert!(table.contains(Value::MIN));
        assert!(table.contains(Value::MAX));
        assert!(!table.contains_index(TABLE_SIZE));
    }

    #[test]
    fn test_insert_contains() {
        let mut table = PresenceTable::empty();
        assert!(!table.contains(v(0)));

        assert!(table.insert(v(0)));
        assert!(table.contains(v(0)));
        assert_eq!(table.len(), 1);

        assert!(table.insert(v(-5)));
        assert!(table.contains(v(-5)));
        assert!(!table.contains(v(5)));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut table = PresenceTable::empty();
        assert!(table.insert(v(42)));
        assert!(!table.insert(v(42)));
        assert!(!table.insert(v(42)));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_word_boundaries() {
        // Indices 63, 64, 127, 128 straddle the u64 words.
        let values: Vec<Value> = [63usize, 64, 127, 128]
            .iter()
            .map(|&i| Value::from_index(i).unwrap())
            .collect();
        let table: PresenceTable = values.iter().copied().collect();

        assert_eq!(table.len(), 4);
        for value in values {
            assert!(table.contains(value));
        }
        assert!(!table.contains_index(62));
        assert!(!table.contains_index(65));
    }

    #[test]
    fn test_boundary_values() {
        let table: PresenceTable = [Value::MIN, Value::MAX].into_iter().collect();
        assert!(table.contains_index(0));
        assert!(table.contains_index(TABLE_SIZE - 1));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_iter_ascending() {
        let table: PresenceTable = [v(3), v(-7), v(0), v(3)].into_iter().collect();
        let values: Vec<i32> = table.iter().map(Value::get).collect();
        assert_eq!(values, vec![-7, 0, 3]);
    }

    #[test]
    fn test_display() {
        let mut table = PresenceTable::empty();
        assert_eq!(format!("{}", table), "{}");

        table.insert(v(2));
        table.insert(v(-109));
        assert_eq!(format!("{}", table), "{-109 2}");
    }
}
