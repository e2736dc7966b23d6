//! Checksum Verification
//!
//! Every benchmark reduces its result to one [`Checksum`]. The reduction rule,
//! the rendered format, and the expected literal for the canonical parameters
//! are published here so any port can self-check without timing anything.
//!
//! Benchmarks whose result depends on an input file publish their expectation
//! through a sidecar `<input>.expected` written by the fixture generator.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::bench::params::BenchmarkId;
use crate::error::{BenchError, Result};

/// The single value a benchmark emits
#[derive(Debug, Clone, PartialEq)]
pub enum Checksum {
    /// Rendered with exactly 6 decimals
    Float(f64),
    Int(u64),
    Text(String),
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Checksum::Float(v) => write!(f, "{:.6}", v),
            Checksum::Int(v) => write!(f, "{}", v),
            Checksum::Text(v) => write!(f, "{}", v),
        }
    }
}

/// How a benchmark's result collapses into its checksum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reduction {
    FloatSum,
    Count,
    Length,
    LastElement,
    NodeCount,
    Value,
    ExtractedField,
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Reduction::FloatSum => "float sum (6 decimals)",
            Reduction::Count => "matching line count",
            Reduction::Length => "string length",
            Reduction::LastElement => "last element",
            Reduction::NodeCount => "node count (stretch + sweep + long-lived)",
            Reduction::Value => "integer value",
            Reduction::ExtractedField => "extracted string field",
        };
        write!(f, "{}", s)
    }
}

/// Whether the benchmark prints its checksum by default
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Print,
    /// Compute, keep observable, print nothing
    Silent,
}

/// Published verification contract for one benchmark
#[derive(Debug, Clone, Copy)]
pub struct Expectation {
    pub id: BenchmarkId,
    pub reduction: Reduction,
    /// `None` when the value depends on the input file
    pub expected: Option<&'static str>,
    pub default_output: OutputMode,
}

/// The published contract for every benchmark.
pub fn expectation(id: BenchmarkId) -> Expectation {
    use OutputMode::{Print, Silent};
    let (reduction, expected, default_output) = match id {
        BenchmarkId::MatrixMultiply => (Reduction::FloatSum, Some("248683.505429"), Print),
        BenchmarkId::StringConcat => (Reduction::Length, Some("10000"), Silent),
        BenchmarkId::BinaryTree => (Reduction::NodeCount, Some("14985902"), Silent),
        BenchmarkId::ArraySum => (Reduction::Value, Some("499999500000"), Silent),
        BenchmarkId::FileProcessing => (Reduction::Count, None, Print),
        BenchmarkId::Fibonacci => (Reduction::Value, Some("6765"), Print),
        BenchmarkId::Primes => (Reduction::LastElement, Some("104729"), Silent),
        BenchmarkId::JsonParsing => (Reduction::ExtractedField, None, Silent),
        BenchmarkId::NestedLoops => (Reduction::Value, Some("249500250000"), Silent),
    };
    Expectation {
        id,
        reduction,
        expected,
        default_output,
    }
}

/// Sidecar path for an input file: `<input>.expected`
pub fn sidecar_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".expected");
    PathBuf::from(name)
}

/// Read the sidecar expectation for `input`, if one exists.
pub fn load_sidecar(input: &Path) -> Result<Option<String>> {
    let path = sidecar_path(input);
    match fs::read_to_string(&path) {
        Ok(s) => Ok(Some(s.trim().to_string())),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(BenchError::io(path, e)),
    }
}

/// Write the sidecar expectation for `input`.
pub fn write_sidecar(input: &Path, expected: &str) -> Result<()> {
    let path = sidecar_path(input);
    fs::write(&path, format!("{}\n", expected)).map_err(|e| BenchError::io(path, e))
}

/// Compare a rendered checksum against an expected literal.
pub fn check(id: BenchmarkId, expected: &str, actual: &Checksum) -> Result<()> {
    let rendered = actual.to_string();
    if rendered == expected {
        Ok(())
    } else {
        Err(BenchError::ChecksumMismatch {
            bench: id.code(),
            expected: expected.to_string(),
            actual: rendered,
        })
    }
}

/// Verify a checksum against the published literal, or against the input's
/// sidecar for input-dependent benchmarks.
///
/// Returns the literal that was matched.
pub fn verify(id: BenchmarkId, input: Option<&Path>, actual: &Checksum) -> Result<String> {
    let expected = match (expectation(id).expected, input) {
        (Some(lit), _) => lit.to_string(),
        (None, Some(input)) => load_sidecar(input)?.ok_or_else(|| BenchError::NoExpectation {
            bench: id.code(),
            sidecar: sidecar_path(input),
        })?,
        (None, None) => {
            return Err(BenchError::NoExpectation {
                bench: id.code(),
                sidecar: PathBuf::new(),
            });
        }
    };
    check(id, &expected, actual)?;
    Ok(expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_renders_six_decimals() {
        assert_eq!(
            Checksum::Float(248683.50542851267).to_string(),
            "248683.505429"
        );
        assert_eq!(Checksum::Float(1.0).to_string(), "1.000000");
    }

    #[test]
    fn test_int_and_text_render_bare() {
        assert_eq!(Checksum::Int(6765).to_string(), "6765");
        assert_eq!(Checksum::Text("London".into()).to_string(), "London");
    }

    #[test]
    fn test_every_benchmark_published() {
        for id in BenchmarkId::ALL {
            let exp = expectation(id);
            assert_eq!(exp.id, id);
            assert_eq!(
                exp.expected.is_none(),
                id.takes_input(),
                "{} must publish a literal unless input-driven",
                id
            );
        }
    }

    #[test]
    fn test_verify_literal() {
        let ok = verify(BenchmarkId::Fibonacci, None, &Checksum::Int(6765)).unwrap();
        assert_eq!(ok, "6765");

        let err = verify(BenchmarkId::Fibonacci, None, &Checksum::Int(6764)).unwrap_err();
        assert_eq!(err.code(), "CHECKSUM_MISMATCH");
    }

    #[test]
    fn test_verify_matrix_tolerates_tail_digits() {
        verify(
            BenchmarkId::MatrixMultiply,
            None,
            &Checksum::Float(248683.5054290001),
        )
        .unwrap();
    }

    #[test]
    fn test_sidecar_path() {
        assert_eq!(
            sidecar_path(Path::new("test-data/sample-100mb.log")),
            PathBuf::from("test-data/sample-100mb.log.expected")
        );
    }

    #[test]
    fn test_sidecar_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("users.json");
        assert_eq!(load_sidecar(&input).unwrap(), None);

        write_sidecar(&input, "Tokyo").unwrap();
        assert_eq!(load_sidecar(&input).unwrap().as_deref(), Some("Tokyo"));

        let matched = verify(
            BenchmarkId::JsonParsing,
            Some(&input),
            &Checksum::Text("Tokyo".into()),
        )
        .unwrap();
        assert_eq!(matched, "Tokyo");
    }

    #[test]
    fn test_missing_sidecar_is_not_a_pass() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("app.log");
        let err = verify(BenchmarkId::FileProcessing, Some(&input), &Checksum::Int(0)).unwrap_err();
        assert_eq!(err.code(), "NO_EXPECTATION");
    }
}
