// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run configuration.
//!
//! The defaults reproduce the plain behaviour: read standard input, reject
//! out-of-range values, print the bare length.

use crate::reader::RangePolicy;
use clap::ValueEnum;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

/// Where the list is read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputSource {
    #[default]
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Open the source for buffered reading.
    pub fn open(&self) -> io::Result<Box<dyn BufRead>> {
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::File(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
        }
    }
}

impl From<Option<PathBuf>> for InputSource {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(InputSource::Stdin, InputSource::File)
    }
}

/// How the result is written.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The length alone.
    #[default]
    Plain,
    /// One JSON object with the length, the run bounds and the distinct count.
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub input: InputSource,
    pub policy: RangePolicy,
    pub format: OutputFormat,
}

impl Config {
    pub fn new() -> Self {
        Config::default()
    }

    pub fn with_input(mut self, input: InputSource) -> Self {
        self.input = input;
        self
    }

    pub fn with_policy(mut self, policy: RangePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(config.input, InputSource::Stdin);
        assert_eq!(config.policy, RangePolicy::Reject);
        assert_eq!(config.format, OutputFormat::Plain);
    }

    #[test]
    fn test_builder() {
        let config = Config::new()
            .with_input(InputSource::File(PathBuf::from("list.txt")))
            .with_policy(RangePolicy::Skip)
            .with_format(OutputFormat::Json);
        assert_eq!(config.input, InputSource::File(PathBuf::from("list.txt")));
        assert_eq!(config.policy, RangePolicy::Skip);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_input_from_option() {
        assert_eq!(InputSource::from(None), InputSource::Stdin);
        assert_eq!(
            InputSource::from(Some(PathBuf::from("a"))),
            InputSource::File(PathBuf::from("a"))
        );
    }

    #[test]
    fn test_open_missing_file() {
        let source = InputSource::File(PathBuf::from("/nonexistent/longest-run/input"));
        assert!(source.open().is_err());
    }

    #[test]
    fn test_value_enum_names() {
        assert_eq!(
            OutputFormat::from_str("json", true),
            Ok(OutputFormat::Json)
        );
        assert_eq!(RangePolicy::from_str("skip", true), Ok(RangePolicy::Skip));
    }
}
