// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Constants describing the range covered by the presence table.
//!
//! The table covers the closed range [`MIN_VALUE`, `MAX_VALUE`]. Integer `v` lives
//! at index `v + OFFSET`, so index 0 is `MIN_VALUE` and index `TABLE_SIZE - 1` is
//! `MAX_VALUE`.

/// Smallest integer that can be recorded.
pub const MIN_VALUE: i32 = -109;

/// Largest integer that can be recorded.
pub const MAX_VALUE: i32 = 109;

/// Added to a value to obtain its table index.
pub const OFFSET: i32 = -MIN_VALUE;

/// Number of slots in the presence table (219).
pub const TABLE_SIZE: usize = (MAX_VALUE - MIN_VALUE + 1) as usize;

/// Number of 64-bit words backing the presence table.
pub const WORDS: usize = TABLE_SIZE.div_ceil(64);
