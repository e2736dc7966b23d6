//! Benchmark Error Types
//!
//! Every failure a benchmark run can hit. Generators are total and have no
//! variant here; all remaining variants terminate the run.

use std::path::PathBuf;

use thiserror::Error;

/// Benchmark error types
///
/// I/O, parse and index/shape failures are separate variants so a harness can
/// tell "input missing" apart from "input malformed" apart from "input too
/// small". None of them ever degrade into a default value.
#[derive(Error, Debug)]
pub enum BenchError {
    // === Input Errors ===
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed input {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // === Shape Errors ===
    #[error("Index {index} out of range at {at} (length {len})")]
    IndexOutOfRange { at: String, index: usize, len: usize },

    #[error("Missing field '{field}' at {at}")]
    MissingField { at: String, field: String },

    #[error("Type mismatch at {at}: expected {expected}")]
    TypeMismatch { at: String, expected: &'static str },

    // === Verification Errors ===
    #[error("Checksum mismatch for {bench}: expected {expected}, got {actual}")]
    ChecksumMismatch {
        bench: &'static str,
        expected: String,
        actual: String,
    },

    #[error("No published expectation for {bench} (missing sidecar {})", sidecar.display())]
    NoExpectation { bench: &'static str, sidecar: PathBuf },

    // === Lookup Errors ===
    #[error("Unknown benchmark: {0}")]
    UnknownBenchmark(String),
}

impl BenchError {
    /// Stable error code for harness-side classification
    pub fn code(&self) -> &'static str {
        match self {
            BenchError::Io { .. } => "IO",
            BenchError::Parse { .. } => "PARSE",
            BenchError::IndexOutOfRange { .. } => "INDEX_OUT_OF_RANGE",
            BenchError::MissingField { .. } => "MISSING_FIELD",
            BenchError::TypeMismatch { .. } => "TYPE_MISMATCH",
            BenchError::ChecksumMismatch { .. } => "CHECKSUM_MISMATCH",
            BenchError::NoExpectation { .. } => "NO_EXPECTATION",
            BenchError::UnknownBenchmark(_) => "UNKNOWN_BENCHMARK",
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BenchError::Io {
            path: path.into(),
            source,
        }
    }

    /// True for the input-availability class (missing or unreadable file)
    pub fn is_io(&self) -> bool {
        matches!(self, BenchError::Io { .. })
    }
}

pub type Result<T> = std::result::Result<T, BenchError>;
