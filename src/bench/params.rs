//! Workload Parameter Table
//!
//! The canonical problem sizes. These are constants, not configuration:
//! changing any of them changes the conformance target, and every workload
//! reads them from here rather than re-deriving them.

use std::fmt;

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::core_types::{Depth, Seed};
use crate::error::{BenchError, Result};

/// BENCH-002
pub mod matrix {
    use super::Seed;

    pub const N: usize = 100;
    pub const SEED_A: Seed = 42;
    pub const SEED_B: Seed = 43;
}

/// BENCH-003
pub mod string_concat {
    pub const ITERATIONS: usize = 10_000;
    pub const TOKEN: char = 'x';
}

/// BENCH-004
pub mod binary_tree {
    use super::Depth;

    pub const MAX_DEPTH: Depth = 16;
    pub const MIN_DEPTH: Depth = 4;
    pub const STRETCH_DEPTH: Depth = MAX_DEPTH + 1;
    pub const DEPTH_STEP: usize = 2;
}

/// BENCH-005
pub mod array_sum {
    pub const N: u64 = 1_000_000;
}

/// BENCH-006
pub mod file_processing {
    pub const NEEDLE: &str = "error";
    pub const DEFAULT_PATH: &str = "test-data/sample-100mb.log";
}

/// BENCH-007
pub mod fibonacci {
    pub const N: u32 = 20;
}

/// BENCH-008
pub mod primes {
    pub const COUNT: usize = 10_000;
}

/// BENCH-009
pub mod json_parsing {
    use super::PathSegment::{self, Index, Key};

    pub const DEFAULT_PATH: &str = "test-data/sample-50mb.json";
    pub const USER_INDEX: usize = 500;
    pub const FIELD_PATH: &[PathSegment] = &[
        Key("users"),
        Index(USER_INDEX),
        Key("profile"),
        Key("location"),
        Key("city"),
    ];
}

/// BENCH-011
pub mod nested_loops {
    pub const OUTER: i64 = 1_000;
    pub const INNER: i64 = 1_000;
}

/// One step of a path into a structured document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSegment {
    Key(&'static str),
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(k) => write!(f, ".{}", k),
            PathSegment::Index(i) => write!(f, "[{}]", i),
        }
    }
}

/// Render a path as `users[500].profile.location.city`.
pub fn render_path(path: &[PathSegment]) -> String {
    let joined: String = path.iter().map(ToString::to_string).collect();
    joined.strip_prefix('.').unwrap_or(&joined).to_string()
}

/// Benchmark identifiers
///
/// Numbering follows the published suite; BENCH-001 and BENCH-010 are not
/// part of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BenchmarkId {
    MatrixMultiply,
    StringConcat,
    BinaryTree,
    ArraySum,
    FileProcessing,
    Fibonacci,
    Primes,
    JsonParsing,
    NestedLoops,
}

impl BenchmarkId {
    pub const ALL: [BenchmarkId; 9] = [
        BenchmarkId::MatrixMultiply,
        BenchmarkId::StringConcat,
        BenchmarkId::BinaryTree,
        BenchmarkId::ArraySum,
        BenchmarkId::FileProcessing,
        BenchmarkId::Fibonacci,
        BenchmarkId::Primes,
        BenchmarkId::JsonParsing,
        BenchmarkId::NestedLoops,
    ];

    /// Stable id, e.g. `BENCH-002`
    pub fn code(self) -> &'static str {
        match self {
            BenchmarkId::MatrixMultiply => "BENCH-002",
            BenchmarkId::StringConcat => "BENCH-003",
            BenchmarkId::BinaryTree => "BENCH-004",
            BenchmarkId::ArraySum => "BENCH-005",
            BenchmarkId::FileProcessing => "BENCH-006",
            BenchmarkId::Fibonacci => "BENCH-007",
            BenchmarkId::Primes => "BENCH-008",
            BenchmarkId::JsonParsing => "BENCH-009",
            BenchmarkId::NestedLoops => "BENCH-011",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            BenchmarkId::MatrixMultiply => "matrix-multiply",
            BenchmarkId::StringConcat => "string-concat",
            BenchmarkId::BinaryTree => "binary-tree",
            BenchmarkId::ArraySum => "array-sum",
            BenchmarkId::FileProcessing => "file-processing",
            BenchmarkId::Fibonacci => "fibonacci",
            BenchmarkId::Primes => "primes",
            BenchmarkId::JsonParsing => "json-parsing",
            BenchmarkId::NestedLoops => "nested-loops",
        }
    }

    /// True when the workload reads an external input file.
    pub fn takes_input(self) -> bool {
        matches!(
            self,
            BenchmarkId::FileProcessing | BenchmarkId::JsonParsing
        )
    }

    /// The canonical `{name, value}` pairs for this benchmark.
    pub fn params(self) -> Vec<Param> {
        use ParamValue::{Int, Text};
        match self {
            BenchmarkId::MatrixMultiply => vec![
                Param::new("n", Int(matrix::N as u64)),
                Param::new("seed_a", Int(matrix::SEED_A)),
                Param::new("seed_b", Int(matrix::SEED_B)),
            ],
            BenchmarkId::StringConcat => vec![
                Param::new("iterations", Int(string_concat::ITERATIONS as u64)),
                Param::new("token", Text(String::from(string_concat::TOKEN))),
            ],
            BenchmarkId::BinaryTree => vec![
                Param::new("max_depth", Int(binary_tree::MAX_DEPTH as u64)),
                Param::new("min_depth", Int(binary_tree::MIN_DEPTH as u64)),
                Param::new("stretch_depth", Int(binary_tree::STRETCH_DEPTH as u64)),
                Param::new("depth_step", Int(binary_tree::DEPTH_STEP as u64)),
            ],
            BenchmarkId::ArraySum => vec![Param::new("n", Int(array_sum::N))],
            BenchmarkId::FileProcessing => vec![
                Param::new("needle", Text(file_processing::NEEDLE.to_string())),
                Param::new("case_fold", Text("ascii-lowercase".to_string())),
            ],
            BenchmarkId::Fibonacci => vec![Param::new("n", Int(fibonacci::N as u64))],
            BenchmarkId::Primes => vec![Param::new("count", Int(primes::COUNT as u64))],
            BenchmarkId::JsonParsing => vec![Param::new(
                "path",
                Text(render_path(json_parsing::FIELD_PATH)),
            )],
            BenchmarkId::NestedLoops => vec![
                Param::new("outer", Int(nested_loops::OUTER as u64)),
                Param::new("inner", Int(nested_loops::INNER as u64)),
            ],
        }
    }

    /// Look up by code (`BENCH-007`, case-insensitive) or slug (`fibonacci`).
    pub fn lookup(name: &str) -> Result<Self> {
        BENCHMARK_INDEX
            .get(name.to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| BenchError::UnknownBenchmark(name.to_string()))
    }
}

impl fmt::Display for BenchmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.slug())
    }
}

static BENCHMARK_INDEX: Lazy<FxHashMap<String, BenchmarkId>> = Lazy::new(|| {
    let mut index = FxHashMap::default();
    for id in BenchmarkId::ALL {
        index.insert(id.code().to_ascii_lowercase(), id);
        index.insert(id.slug().to_string(), id);
    }
    index
});

/// Parameter value
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Int(u64),
    Text(String),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(v) => write!(f, "{}", v),
            ParamValue::Text(v) => write!(f, "{}", v),
        }
    }
}

/// A named canonical parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: &'static str,
    pub value: ParamValue,
}

impl Param {
    fn new(name: &'static str, value: ParamValue) -> Self {
        Self { name, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_code_and_slug() {
        assert_eq!(BenchmarkId::lookup("BENCH-002").unwrap(), BenchmarkId::MatrixMultiply);
        assert_eq!(BenchmarkId::lookup("bench-011").unwrap(), BenchmarkId::NestedLoops);
        assert_eq!(BenchmarkId::lookup("fibonacci").unwrap(), BenchmarkId::Fibonacci);
        assert_eq!(BenchmarkId::lookup("JSON-PARSING").unwrap(), BenchmarkId::JsonParsing);
    }

    #[test]
    fn test_lookup_unknown() {
        let err = BenchmarkId::lookup("BENCH-010").unwrap_err();
        assert_eq!(err.code(), "UNKNOWN_BENCHMARK");
    }

    #[test]
    fn test_codes_and_slugs_unique() {
        let mut codes: Vec<_> = BenchmarkId::ALL.iter().map(|b| b.code()).collect();
        let mut slugs: Vec<_> = BenchmarkId::ALL.iter().map(|b| b.slug()).collect();
        codes.sort_unstable();
        codes.dedup();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(codes.len(), BenchmarkId::ALL.len());
        assert_eq!(slugs.len(), BenchmarkId::ALL.len());
    }

    #[test]
    fn test_param_table_matches_constants() {
        let params = BenchmarkId::MatrixMultiply.params();
        assert_eq!(params[0], Param::new("n", ParamValue::Int(100)));
        assert_eq!(params[1].value, ParamValue::Int(42));
        assert_eq!(params[2].value, ParamValue::Int(43));

        let tree = BenchmarkId::BinaryTree.params();
        assert_eq!(tree[0].value.to_string(), "16");
        assert_eq!(tree[1].value.to_string(), "4");
        assert_eq!(tree[2].value.to_string(), "17");
    }

    #[test]
    fn test_every_benchmark_has_params() {
        for id in BenchmarkId::ALL {
            assert!(!id.params().is_empty(), "{} has no parameters", id);
        }
    }

    #[test]
    fn test_render_json_path() {
        assert_eq!(
            render_path(json_parsing::FIELD_PATH),
            "users[500].profile.location.city"
        );
    }
}
