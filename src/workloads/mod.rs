//! Workload Executors
//!
//! Each benchmark plugs into the same three-stage pipeline:
//!
//! ```text
//! ┌───────────┐    ┌───────────┐    ┌───────────┐
//! │  prepare  │───▶│  execute  │───▶│ checksum  │
//! │(generate/ │    │(algorithm)│    │(reduction)│
//! │ open file)│    │           │    │           │
//! └───────────┘    └───────────┘    └───────────┘
//! ```
//!
//! `prepare` and `execute` may fail only for I/O-driven workloads; `checksum`
//! is total. Inputs are owned by one run and dropped after the reduction.

pub mod fibonacci;
pub mod json_parse;
pub mod log_scan;
pub mod loops;
pub mod matrix;
pub mod primes;
pub mod strings;
pub mod tree;

use crate::bench::params::BenchmarkId;
use crate::bench::verification::Checksum;
use crate::error::Result;

pub use fibonacci::Fibonacci;
pub use json_parse::JsonFieldLookup;
pub use log_scan::LogScan;
pub use loops::{ArraySum, NestedLoops};
pub use matrix::MatrixMultiply;
pub use primes::Primes;
pub use strings::StringConcat;
pub use tree::BinaryTrees;

/// Generator-to-executor adapter
pub trait Workload {
    /// Generated or opened input, consumed by `execute`
    type Input;
    /// Raw result, reduced by `checksum`
    type Output;

    fn id(&self) -> BenchmarkId;

    fn prepare(&self) -> Result<Self::Input>;

    fn execute(&self, input: Self::Input) -> Result<Self::Output>;

    fn checksum(&self, output: &Self::Output) -> Checksum;
}
