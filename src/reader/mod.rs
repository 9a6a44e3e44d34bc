// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reader for bracketed integer lists.
//!
//! The reader discards everything up to the first `[`, then reads
//! whitespace-separated signed decimal integers until `]`, marking each one
//! present in a [`PresenceTable`]. Nothing after the closing `]` is consumed,
//! so the caller can continue using the stream.
//!
//! # Example
//!
//! ```
//! use longest_run::reader::{parse_str, RangePolicy};
//! use longest_run::table::Value;
//!
//! let (table, _stats) = parse_str("data: [3 -1 3 2]", RangePolicy::Reject).unwrap();
//! assert_eq!(table.len(), 3);
//! assert!(table.contains(Value::new(-1).unwrap()));
//! ```

pub mod errors;
pub mod statistics;

pub use errors::ReadError;
pub use statistics::{Counter, ReadStatistics};

use crate::table::{PresenceTable, Value, MAX_VALUE, MIN_VALUE};
use clap::ValueEnum;
use std::io::{self, BufRead};
use tracing::{debug, trace, warn};

const OPEN: u8 = b'[';
const CLOSE: u8 = b']';

/// Longest token accepted: a sign followed by the 19 digits of `i64::MAX`.
const MAX_TOKEN_LEN: usize = 20;

/// What to do with an integer outside [-109, 109].
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RangePolicy {
    /// Fail the read with [`ReadError::OutOfRange`].
    #[default]
    Reject,
    /// Ignore the value and keep reading.
    Skip,
}

/// Reads one bracketed list from a buffered stream.
#[derive(Debug)]
pub struct Reader<R> {
    input: R,
    policy: RangePolicy,
    /// Bytes consumed so far.
    offset: u64,
    stats: ReadStatistics,
}

impl<R: BufRead> Reader<R> {
    pub fn new(input: R, policy: RangePolicy) -> Self {
        Self {
            input,
            policy,
            offset: 0,
            stats: ReadStatistics::new(),
        }
    }

    /// Read one list, marking every value in `table`.
    ///
    /// Returns the counters for this list. On error the table holds whatever
    /// was marked before the failing token.
    pub fn read_into(&mut self, table: &mut PresenceTable) -> Result<ReadStatistics, ReadError> {
        self.skip_to_open()?;

        loop {
            self.skip_whitespace()?;
            match self.peek()? {
                None => {
                    return Err(ReadError::Unterminated {
                        values: self.stats.get(Counter::ValuesRead),
                    })
                }
                Some(CLOSE) => {
                    self.bump();
                    break;
                }
                Some(_) => {
                    let start = self.offset;
                    let token = self.take_token(start)?;
                    self.record(table, &token, start)?;
                }
            }
        }

        debug!(
            values = self.stats.get(Counter::ValuesRead),
            distinct = self.stats.get(Counter::DistinctValues),
            bytes = self.offset,
            "read list"
        );
        Ok(std::mem::take(&mut self.stats))
    }

    /// Give back the underlying stream, positioned just after the closing `]`.
    pub fn into_inner(self) -> R {
        self.input
    }

    fn record(
        &mut self,
        table: &mut PresenceTable,
        token: &[u8],
        offset: u64,
    ) -> Result<(), ReadError> {
        let number = parse_integer(token).ok_or_else(|| ReadError::InvalidToken {
            token: String::from_utf8_lossy(token).into_owned(),
            offset,
        })?;
        self.stats.increment(Counter::ValuesRead);

        let Some(value) = Value::new(number) else {
            return match self.policy {
                RangePolicy::Reject => Err(ReadError::OutOfRange {
                    value: number,
                    offset,
                    min: MIN_VALUE,
                    max: MAX_VALUE,
                }),
                RangePolicy::Skip => {
                    warn!(value = number, offset, "skipping out-of-range value");
                    self.stats.increment(Counter::OutOfRangeSkipped);
                    Ok(())
                }
            };
        };

        if table.insert(value) {
            trace!(%value, offset, "marked");
            self.stats.increment(Counter::DistinctValues);
        } else {
            trace!(%value, offset, "duplicate");
            self.stats.increment(Counter::Duplicates);
        }
        Ok(())
    }

    fn skip_to_open(&mut self) -> Result<(), ReadError> {
        loop {
            match self.peek()? {
                None => return Err(ReadError::MissingOpen),
                Some(OPEN) => {
                    self.bump();
                    return Ok(());
                }
                Some(_) => {
                    self.bump();
                    self.stats.increment(Counter::BytesSkipped);
                }
            }
        }
    }

    fn skip_whitespace(&mut self) -> io::Result<()> {
        while let Some(byte) = self.peek()? {
            if !byte.is_ascii_whitespace() {
                break;
            }
            self.bump();
        }
        Ok(())
    }

    /// Consume bytes up to (not including) the next whitespace, `]`, or end of stream.
    ///
    /// Tokens longer than [`MAX_TOKEN_LEN`] are rejected without reading the rest.
    fn take_token(&mut self, offset: u64) -> Result<Vec<u8>, ReadError> {
        let mut token = Vec::with_capacity(MAX_TOKEN_LEN);
        while let Some(byte) = self.peek()? {
            if byte.is_ascii_whitespace() || byte == CLOSE {
                break;
            }
            if token.len() == MAX_TOKEN_LEN {
                return Err(ReadError::InvalidToken {
                    token: format!("{}...", String::from_utf8_lossy(&token)),
                    offset,
                });
            }
            token.push(byte);
            self.bump();
        }
        Ok(token)
    }

    fn peek(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.input.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Consume the byte returned by the last successful `peek`.
    fn bump(&mut self) {
        self.input.consume(1);
        self.offset += 1;
    }
}

/// Parse an optionally signed run of ASCII digits.
///
/// Returns None for anything else, including integers that overflow `i64`.
fn parse_integer(token: &[u8]) -> Option<i64> {
    let digits = match token.first() {
        Some(b'+' | b'-') => &token[1..],
        _ => token,
    };
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    std::str::from_utf8(token).ok()?.parse().ok()
}

/// Read one list from `input` into a fresh table.
pub fn read_table<R: BufRead>(
    input: R,
    policy: RangePolicy,
) -> Result<(PresenceTable, ReadStatistics), ReadError> {
    let mut table = PresenceTable::empty();
    let stats = Reader::new(input, policy).read_into(&mut table)?;
    Ok((table, stats))
}

/// Read one list from a string.
pub fn parse_str(
    text: &str,
    policy: RangePolicy,
) -> Result<(PresenceTable, ReadStatistics), ReadError> {
    read_table(text.as_bytes(), policy)
}
