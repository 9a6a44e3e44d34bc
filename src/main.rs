// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use anyhow::{Context, Result};
use clap::Parser;
use longest_run::{Config, InputSource, OutputFormat, RangePolicy};
use std::io;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_ENV: &str = "LONGEST_RUN_LOG";

/// Print the length of the longest run of consecutive integers in a list like `[3 1 2]`.
#[derive(Parser, Debug)]
#[command(name = "longest-run", version, about)]
struct Cli {
    /// Read the list from this file instead of standard input
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// What to do with integers outside [-109, 109]
    #[arg(long, value_enum, default_value_t = RangePolicy::Reject)]
    out_of_range: RangePolicy,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    /// Log more detail to stderr (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config::new()
            .with_input(InputSource::from(cli.input))
            .with_policy(cli.out_of_range)
            .with_format(cli.format)
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = execute(cli.into()) {
        debug!(error = ?err, "run failed");
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}

fn execute(config: Config) -> Result<()> {
    debug!(?config, "starting");
    let input = config
        .input
        .open()
        .with_context(|| format!("could not open {:?}", config.input))?;
    let stdout = io::stdout().lock();
    longest_run::run(&config, input, stdout).context("could not compute longest run")?;
    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter = match std::env::var(LOG_ENV) {
        Ok(directives) => EnvFilter::builder().parse_lossy(directives),
        Err(_) => EnvFilter::new(default_level),
    };

    let fmt_layer = fmt::layer().with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
