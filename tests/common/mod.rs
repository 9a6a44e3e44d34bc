// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use longest_run::{longest_run, parse_str, PresenceTable, RangePolicy};

/// Longest run of a list given as text, rejecting out-of-range values.
pub fn longest_of(text: &str) -> usize {
    longest_run(&table_of(text))
}

/// Presence table of a list given as text.
pub fn table_of(text: &str) -> PresenceTable {
    match parse_str(text, RangePolicy::Reject) {
        Ok((table, _stats)) => table,
        Err(err) => panic!("could not read {:?}: {}", text, err),
    }
}

/// Render values as a bracketed list.
pub fn bracketed<I: IntoIterator<Item = i32>>(values: I) -> String {
    let items: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(" "))
}
