// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters collected by the reader during one read. They describe the input,
//! not the result: the table itself is the result.

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{AsRefStr, EnumCount as EnumCountMacro, EnumIter};

#[derive(EnumCountMacro, EnumIter, AsRefStr, Debug, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counter {
    /// Integers parsed between the brackets, in or out of range.
    ValuesRead,
    /// Values inserted into the table for the first time.
    DistinctValues,
    /// Values that were already present.
    Duplicates,
    /// Out-of-range values ignored under [`RangePolicy::Skip`](crate::reader::RangePolicy::Skip).
    OutOfRangeSkipped,
    /// Bytes discarded before the opening `[`.
    BytesSkipped,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReadStatistics {
    stats: [u64; Counter::COUNT],
}

impl ReadStatistics {
    pub fn new() -> Self {
        ReadStatistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counter) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counter) -> u64 {
        self.stats[counter as usize]
    }

    /// All counters with their values, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Counter, u64)> + '_ {
        Counter::iter().map(move |counter| (counter, self.get(counter)))
    }
}
