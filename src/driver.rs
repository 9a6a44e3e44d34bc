// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Driver: allocate the table, read the list, scan it, write the result.

use crate::config::{Config, OutputFormat};
use crate::reader::{ReadError, Reader};
use crate::scanner::{longest_run, longest_run_span, Run};
use crate::table::PresenceTable;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum DriverError {
    #[error(transparent)]
    Read(#[from] ReadError),

    #[error("failed to write result: {0}")]
    Output(#[from] io::Error),

    #[error("failed to encode result: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result of one run.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(into = "Report")]
pub struct RunSummary {
    /// Length of the longest run (0 if no values were read).
    pub longest: usize,
    /// The lowest of the longest runs.
    pub span: Option<Run>,
    /// Number of distinct values in the table.
    pub distinct: usize,
}

impl RunSummary {
    pub fn from_table(table: &PresenceTable) -> Self {
        Self {
            longest: longest_run(table),
            span: longest_run_span(table),
            distinct: table.len(),
        }
    }
}

/// Wire shape of a summary in JSON output.
#[derive(Serialize)]
struct Report {
    longest: usize,
    start: Option<i32>,
    end: Option<i32>,
    distinct: usize,
}

impl From<RunSummary> for Report {
    fn from(summary: RunSummary) -> Self {
        Report {
            longest: summary.longest,
            start: summary.span.map(|run| run.start().get()),
            end: summary.span.map(|run| run.end().get()),
            distinct: summary.distinct,
        }
    }
}

/// Read one list from `input` and write its longest run to `output`.
pub fn run<R: BufRead, W: Write>(
    config: &Config,
    input: R,
    mut output: W,
) -> Result<RunSummary, DriverError> {
    let mut table = PresenceTable::empty();
    let stats = Reader::new(input, config.policy).read_into(&mut table)?;
    for (counter, count) in stats.iter() {
        debug!(counter = counter.as_ref(), count, "read statistics");
    }

    let summary = RunSummary::from_table(&table);
    debug!(?summary, "scanned table");

    match config.format {
        OutputFormat::Plain => writeln!(output, "{}", summary.longest)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut output, &summary)?;
            writeln!(output)?;
        }
    }
    output.flush()?;
    Ok(summary)
}
