//! parity_bench - Deterministic Cross-Language Micro-Benchmarks
//!
//! Every port of a benchmark must do bit-identical work and print the same
//! checksum. This crate is the reference for that contract.
//!
//! # Modules
//!
//! - [`core_types`] - Seed, depth and accumulator widths
//! - [`bench`] - PRNG, parameter table, generators, checksum verification
//! - [`workloads`] - The nine benchmark executors behind one adapter trait
//! - [`runner`] - Pipeline driver and stdout contract
//! - [`fixtures`] - Deterministic log / JSON input generators
//! - [`error`] - Labeled failure taxonomy
//! - [`config`] - YAML runtime configuration
//! - [`logging`] - tracing subscriber setup

// Core types - must be first!
pub mod core_types;

pub mod bench;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod logging;
pub mod runner;
pub mod workloads;

// Convenient re-exports at crate root
pub use bench::generators::{Matrix, TreeNode, matrix, tree};
pub use bench::lcg::Lcg;
pub use bench::params::BenchmarkId;
pub use bench::verification::{Checksum, OutputMode};
pub use core_types::{Depth, IntSum, NodeCount, Seed};
pub use error::BenchError;
pub use runner::{RunOptions, RunOutcome};
pub use workloads::Workload;

/// Git revision the binary was built from
pub const SOURCE_REV: &str = env!("BENCH_SOURCE_REV");
