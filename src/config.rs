/*!
 * Command line configuration.
 */

use std::path::PathBuf;

use clap::Parser;

/// Generates synthetic log lines of a document classification pipeline.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "generate-sample-data", version)]
pub struct Config {
    /// Number of samples to generate (negative count generates nothing)
    #[arg(long, allow_negative_numbers = true)]
    pub samples: i64,

    /// Output file for sample data; standard output when omitted
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

///////////////////////////////////////////////////////////////////////////////////////////////////
/// Tests
///
