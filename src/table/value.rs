// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Value type for integers the presence table can hold.

use crate::table::constants::{MAX_VALUE, MIN_VALUE, OFFSET, TABLE_SIZE};
use std::fmt;

/// An integer in the range [`MIN_VALUE`, `MAX_VALUE`].
///
/// This is a newtype wrapper so that a value which has been range checked cannot
/// be confused with an arbitrary integer read from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Value(i32);

impl Value {
    /// The smallest representable value.
    pub const MIN: Value = Value(MIN_VALUE);

    /// The largest representable value.
    pub const MAX: Value = Value(MAX_VALUE);

    /// Try to create a value, returning None if out of range.
    pub fn new(value: i64) -> Option<Self> {
        if (MIN_VALUE as i64..=MAX_VALUE as i64).contains(&value) {
            Some(Self(value as i32))
        } else {
            None
        }
    }

    /// The value stored at table index `index`, if the index is in the table.
    pub fn from_index(index: usize) -> Option<Self> {
        if index < TABLE_SIZE {
            Some(Self(index as i32 - OFFSET))
        } else {
            None
        }
    }

    /// Get the underlying integer.
    pub fn get(self) -> i32 {
        self.0
    }

    /// Position of this value in the presence table.
    pub fn index(self) -> usize {
        (self.0 + OFFSET) as usize
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_new() {
        assert_eq!(Value::new(0).map(Value::get), Some(0));
        assert_eq!(Value::new(-109), Some(Value::MIN));
        assert_eq!(Value::new(109), Some(Value::MAX));
    }

    #[test]
    fn test_value_out_of_range() {
        assert!(Value::new(-110).is_none());
        assert!(Value::new(110).is_none());
        assert!(Value::new(i64::MAX).is_none());
        assert!(Value::new(i64::MIN).is_none());
    }

    #[test]
    fn test_index() {
        assert_eq!(Value::MIN.index(), 0);
        assert_eq!(Value::MAX.index(), TABLE_SIZE - 1);
        assert_eq!(Value::new(0).map(Value::index), Some(109));
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Value::from_index(0), Some(Value::MIN));
        assert_eq!(Value::from_index(218), Some(Value::MAX));
        assert!(Value::from_index(219).is_none());

        for index in 0..TABLE_SIZE {
            let value = Value::from_index(index).unwrap();
            assert_eq!(value.index(), index);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Value::MIN), "-109");
        assert_eq!(format!("{}", Value::new(7).unwrap()), "7");
    }
}
