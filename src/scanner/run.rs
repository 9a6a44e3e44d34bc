// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run type: a maximal stretch of consecutive present values.

use crate::table::{Value, TABLE_SIZE};
use std::fmt;

/// A run of consecutive values.
///
/// A run holds at least one value and never extends past [`Value::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    start: Value,
    length: usize,
}

impl Run {
    /// Create a run of `length` values starting at `start`.
    ///
    /// Returns None if `length` is 0 or the run would pass [`Value::MAX`].
    pub fn new(start: Value, length: usize) -> Option<Self> {
        if length == 0 || start.index() + length > TABLE_SIZE {
            None
        } else {
            Some(Self { start, length })
        }
    }

    /// The first value in the run.
    pub fn start(&self) -> Value {
        self.start
    }

    /// The last value in the run.
    pub fn end(&self) -> Value {
        Value::from_index(self.start.index() + self.length - 1).unwrap_or(Value::MAX)
    }

    /// Number of values in the run.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl fmt::Display for Run {
    /// Format a run as "start..=end".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end())
    }
}
