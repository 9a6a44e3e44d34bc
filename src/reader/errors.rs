// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for reading a bracketed list.

use thiserror::Error;

/// Errors that can occur while reading the input list.
///
/// Offsets are byte offsets from the start of the stream.
#[derive(Error, Debug)]
pub enum ReadError {
    /// The stream ended without an opening `[`.
    #[error("no opening '[' found in input")]
    MissingOpen,

    /// The stream ended after `[` but before the closing `]`.
    #[error("input ended before closing ']' (after {values} values)")]
    Unterminated { values: u64 },

    /// A token between the brackets is not a signed decimal integer.
    #[error("invalid integer {token:?} at byte {offset}")]
    InvalidToken { token: String, offset: u64 },

    /// An integer lies outside the range the presence table covers.
    #[error("value {value} at byte {offset} is outside [{min}, {max}]")]
    OutOfRange {
        value: i64,
        offset: u64,
        min: i32,
        max: i32,
    },

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
