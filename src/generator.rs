/*!
 * Formats samples into pipe delimited log lines and drives a complete run.
 */

use std::io::Write;

use rand::Rng;

use crate::error::GenerateError;
use crate::sample::{Outcome, Sample};

/// Timestamp rendering: English abbreviations, explicit UTC offset, no `|`.
/// Example: `Mon Oct 19 13:36:00 +02:00 2026`.
pub const TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %:z %Y";

/// Renders one data line (without trailing newline).
pub fn format_line(sample: &Sample) -> String {
    let (label, value) = match sample.outcome {
        Outcome::Success(document_type) => ("type", document_type.to_string()),
        Outcome::Failure(error_type) => ("error", error_type.to_string()),
    };
    format!(
        "{}|index|{}|document classified|outcome|{}|{}|{}|millis|{}",
        sample.timestamp.format(TIMESTAMP_FORMAT),
        sample.index,
        sample.outcome.name(),
        label,
        value,
        sample.elapsed_millis
    )
}

/// Status marker written before (`start`) and after (`done`) data lines.
pub fn marker(sample_count: i64, phase: &str) -> String {
    format!("generating sample data|size|{}|{}", sample_count, phase)
}

/// Generates `sample_count` samples in index order, one line each into `sink`.
/// Markers go to `status`. Negative count produces no samples.
/// `sink` is flushed before the done marker, so data never trails it when both are the same stream.
/// Returns number of data lines written.
pub fn run<R: Rng>(
    rng: &mut R,
    sample_count: i64,
    sink: &mut dyn Write,
    status: &mut dyn Write,
) -> Result<u64, GenerateError> {
    writeln!(status, "{}", marker(sample_count, "start"))?;
    status.flush()?;

    let mut written = 0u64;
    for index in 0..sample_count {
        let sample = Sample::generate(index, rng);
        writeln!(sink, "{}", format_line(&sample))?;
        written += 1;
    }
    sink.flush()?;

    writeln!(status, "{}", marker(sample_count, "done"))?;
    status.flush()?;
    tracing::debug!(sample_count, written, "sample generation finished");
    Ok(written)
}

///////////////////////////////////////////////////////////////////////////////////////////////////
/// Tests
///
