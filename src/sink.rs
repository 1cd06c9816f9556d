/*!
 * Destination of generated data lines.
 */

use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::Path;

use crate::error::GenerateError;

/// Data sink resolved from configuration before generation starts.
/// Buffers are flushed by `run`, and on drop for any other exit path.
pub enum Sink {
    File(BufWriter<File>),
    Stdout(BufWriter<Stdout>),
}

impl Sink {
    /// Opens (creates or truncates) `path`, or falls back to standard output.
    pub fn open(path: Option<&Path>) -> Result<Self, GenerateError> {
        match path {
            Some(path) => {
                let file = File::create(path).map_err(|source| GenerateError::SinkOpen {
                    path: path.to_path_buf(),
                    source,
                })?;
                tracing::debug!(path = %path.display(), "writing sample data to file");
                Ok(Sink::File(BufWriter::new(file)))
            }
            None => {
                tracing::debug!("writing sample data to standard output");
                Ok(Sink::Stdout(BufWriter::new(io::stdout())))
            }
        }
    }

    #[inline]
    fn inner(&mut self) -> &mut dyn Write {
        match self {
            Sink::File(w) => w as &mut dyn Write,
            Sink::Stdout(w) => w,
        }
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner().write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.inner().write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner().flush()
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
/// Tests
///
