// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Longest run of consecutive integers in a bracketed list.
//!
//! The input is text containing a list such as `[3 1 2 7]`. Every integer in the
//! list must lie in [-109, 109]. The result is the length of the longest run of
//! consecutive integers present in the list, by numeric value rather than input
//! order: `[3 1 2 7]` gives 3.
//!
//! # Architecture
//!
//! Three stages run in sequence:
//!
//! 1. **Reader** ([`reader`]): skips to the first `[`, parses integers until `]`,
//!    and marks each one in a [`PresenceTable`].
//! 2. **Scanner** ([`scanner`]): walks the table once in ascending order keeping
//!    a current and a maximum run length.
//! 3. **Driver** ([`driver`]): owns the table for one run and writes the result.
//!
//! The presence table is a fixed 219-bit set indexed by `value + 109`, so
//! duplicates and input order have no effect on the result.
//!
//! # Example
//!
//! ```
//! use longest_run::{longest_run, parse_str, RangePolicy};
//!
//! let (table, _stats) = parse_str("[1 2 3 5 6]", RangePolicy::Reject).unwrap();
//! assert_eq!(longest_run(&table), 3);
//! ```

pub mod config;
pub mod driver;
pub mod reader;
pub mod scanner;
pub mod table;

// Re-export commonly used types
pub use config::{Config, InputSource, OutputFormat};
pub use driver::{run, DriverError, RunSummary};
pub use reader::{parse_str, read_table, RangePolicy, ReadError, Reader};
pub use scanner::{longest_run, longest_run_span, Run};
pub use table::{PresenceTable, Value};
