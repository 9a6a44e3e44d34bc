// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Scanner for the longest run of consecutive present values.
//!
//! All operations make a single pass over the table in index order, which is
//! ascending value order. Input order and duplicates have already been erased
//! by the table, so the result depends only on the set of values seen.

pub mod run;

pub use run::Run;

use crate::table::{PresenceTable, Value, TABLE_SIZE};

/// Length of the longest run of consecutive present values.
///
/// Returns 0 for an empty table.
pub fn longest_run(table: &PresenceTable) -> usize {
    let mut current: usize = 0;
    let mut max: usize = 0;
    for index in 0..TABLE_SIZE {
        if table.contains_index(index) {
            current += 1;
            max = max.max(current);
        } else {
            current = 0;
        }
    }
    max
}

/// The longest run, or None for an empty table.
///
/// When several runs share the maximum length the lowest one is returned.
pub fn longest_run_span(table: &PresenceTable) -> Option<Run> {
    runs(table).fold(None, |best: Option<Run>, run| match best {
        Some(best) if best.length() >= run.length() => Some(best),
        _ => Some(run),
    })
}

/// Iterate over all maximal runs in ascending order.
pub fn runs(table: &PresenceTable) -> impl Iterator<Item = Run> + '_ {
    let mut index = 0;
    std::iter::from_fn(move || {
        while index < TABLE_SIZE && !table.contains_index(index) {
            index += 1;
        }
        let start = Value::from_index(index)?;
        let mut len = 0;
        while index < TABLE_SIZE && table.contains_index(index) {
            len += 1;
            index += 1;
        }
        Run::new(start, len)
    })
}
