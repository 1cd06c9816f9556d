use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of sample generation. None of them is retried.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("cannot open output file '{}': {source}", .path.display())]
    SinkOpen { path: PathBuf, source: io::Error },
    #[error("cannot write sample data: {0}")]
    Write(#[from] io::Error),
}
