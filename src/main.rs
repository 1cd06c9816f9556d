/*!
    Program generating synthetic log lines of document classification pipeline,
    for testing or demoing log processing tools.
 ```
Usage:
   generate-sample-data --samples N [--file output.txt]
where:
   N           - number of samples (log lines) to generate
   output.txt  - file receiving generated lines; standard output when omitted
```
   Every data line looks like:
   `<timestamp>|index|<i>|document classified|outcome|SUCCESS|type|<document type>|millis|<ms>` or
   `<timestamp>|index|<i>|document classified|outcome|FAILURE|error|<error type>|millis|<ms>`.
   Start and done markers are always printed to standard output.
   Diagnostics go to standard error, filtered by `RUST_LOG` (default `warn`).
 */

use std::io::{stdout, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod generator;
mod sample;
mod sink;

use config::Config;
use sink::Sink;

/// Installs stderr logging so diagnostics never mix with generated data.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Program main function.
fn main() -> Result<()> {
    init_logging();
    let config = Config::parse();
    tracing::debug!(?config, "configuration parsed");

    // Sink is resolved before the start marker: an unusable file aborts the run with no output.
    let mut sink = Sink::open(config.file.as_deref())?;
    let stdout = stdout();
    let mut status = stdout.lock();
    let mut rng = rand::thread_rng();

    let written = generator::run(&mut rng, config.samples, &mut sink, &mut status)
        .with_context(|| format!("Error while generating {} samples", config.samples))?;
    sink.flush().context("Error while closing sample data output")?;
    tracing::info!(written, "sample data generated");
    Ok(())
}
