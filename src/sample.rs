/*!
 * Sample record and the weighted random draws that build it.
 */

use std::fmt;

use chrono::{DateTime, Local};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Width of the uniform integer draw used by all categorical decisions.
const DRAW_RANGE: u32 = 100;

/// Draws below this value are classified successfully (80%).
const SUCCESS_THRESHOLD: u32 = 80;

/// Scale applied to the shifted gaussian draw to get milliseconds.
const MILLIS_SCALE: f64 = 300.0;

/// Category assigned to successfully classified document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentType {
    Memoria,
    Contratto,
    Parere,
    AttoDiCitazione,
}

impl DocumentType {
    /// Maps uniform draw from [0,100) onto type. Cumulative weights: 40/30/15/15.
    pub fn from_draw(draw: u32) -> Self {
        match draw {
            0..=39 => DocumentType::Memoria,
            40..=69 => DocumentType::Contratto,
            70..=84 => DocumentType::Parere,
            _ => DocumentType::AttoDiCitazione,
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DocumentType::Memoria => "MEMORIA",
            DocumentType::Contratto => "CONTRATTO",
            DocumentType::Parere => "PARERE",
            DocumentType::AttoDiCitazione => "ATTO_DI_CITAZIONE",
        })
    }
}

/// Reason why document could not be classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorType {
    FileNotFound,
    CannotOpenFile,
    UnsupportedEncoding,
}

impl ErrorType {
    /// Maps uniform draw from [0,100) onto error. Cumulative weights: 80/15/5.
    pub fn from_draw(draw: u32) -> Self {
        match draw {
            0..=79 => ErrorType::FileNotFound,
            80..=94 => ErrorType::CannotOpenFile,
            _ => ErrorType::UnsupportedEncoding,
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorType::FileNotFound => "FILE_NOT_FOUND",
            ErrorType::CannotOpenFile => "CANNOT_OPEN_FILE",
            ErrorType::UnsupportedEncoding => "UNSUPPORTED_ENCODING",
        })
    }
}

/// Result of simulated classification.
/// Success always carries document type, failure always carries error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success(DocumentType),
    Failure(ErrorType),
}

impl Outcome {
    /// Name printed in `outcome` field.
    pub fn name(&self) -> &'static str {
        match self {
            Outcome::Success(_) => "SUCCESS",
            Outcome::Failure(_) => "FAILURE",
        }
    }
}

/// One synthetic log record. Lives only until it is formatted.
#[derive(Debug, Clone)]
pub struct Sample {
    pub index: i64,
    pub timestamp: DateTime<Local>,
    pub outcome: Outcome,
    pub elapsed_millis: u64,
}

impl Sample {
    /// Draws complete sample for `index`.
    /// Draw order is: elapsed time, outcome, then category of that outcome.
    pub fn generate<R: Rng>(index: i64, rng: &mut R) -> Self {
        let elapsed_millis = decide_elapsed_millis(rng);
        let timestamp = Local::now();
        let outcome = if decide_outcome(rng) {
            Outcome::Success(decide_document_type(rng))
        } else {
            Outcome::Failure(decide_error_type(rng))
        };
        Sample { index, timestamp, outcome, elapsed_millis }
    }
}

/// Returns `true` (success) with probability 0.8.
pub fn decide_outcome<R: Rng>(rng: &mut R) -> bool {
    rng.gen_range(0..DRAW_RANGE) < SUCCESS_THRESHOLD
}

pub fn decide_document_type<R: Rng>(rng: &mut R) -> DocumentType {
    DocumentType::from_draw(rng.gen_range(0..DRAW_RANGE))
}

pub fn decide_error_type<R: Rng>(rng: &mut R) -> ErrorType {
    ErrorType::from_draw(rng.gen_range(0..DRAW_RANGE))
}

/// Processing time centered around 300ms.
pub fn decide_elapsed_millis<R: Rng>(rng: &mut R) -> u64 {
    let gaussian: f64 = StandardNormal.sample(rng);
    millis_from_gaussian(gaussian)
}

/// `round(|1 + g| * 300)`; never negative.
/// Non-finite input (never produced by `StandardNormal`) saturates per `as` cast rules.
#[inline]
pub fn millis_from_gaussian(gaussian: f64) -> u64 {
    ((1.0 + gaussian).abs() * MILLIS_SCALE).round() as u64
}

///////////////////////////////////////////////////////////////////////////////////////////////////
/// Tests
///
