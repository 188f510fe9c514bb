use std::fmt;
use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// The reasons a single input line can fail to become a Sailing.
///
/// Checks run in the order the variants are declared and stop at the first
/// failure, so a line is only ever reported for one of these.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The line did not split into exactly eleven comma separated fields.
    #[error("{field_count} fields found.")]
    IncompleteLine { field_count: usize },

    /// A field was empty or only whitespace. Fields are counted from 0.
    #[error("Field {field_index} is empty.")]
    EmptyField { field_index: usize },

    /// A numeric field did not start with an integer.
    #[error("\"{field_text}\" is non-numeric.")]
    NonNumericData { field_text: String },

    /// The departure hour or minute is outside of a 24-hour clock.
    #[error("{hour}:{minute} is not a valid time.")]
    InvalidTime { hour: i32, minute: i32 },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unable to open input file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read input: {0}")]
    Read(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to serialize report record: {0}")]
    SerializeError(#[from] csv::Error),

    #[error("failed to encode csv report: {0}")]
    EncodingError(#[from] FromUtf8Error),

    #[error("failed to format text report: {0}")]
    FormatError(#[from] fmt::Error),
}
