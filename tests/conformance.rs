//! Published checksums for the input-free benchmarks.
//!
//! Every port prints these exact strings; a change here is a contract break.

use parity_bench::bench::verification::{self, expectation};
use parity_bench::config::AppConfig;
use parity_bench::runner::{self, RunOptions};
use parity_bench::{BenchmarkId, Checksum, OutputMode};

fn rendered(id: BenchmarkId) -> String {
    runner::run(id, None).unwrap().to_string()
}

#[test]
fn matrix_multiply_checksum() {
    assert_eq!(rendered(BenchmarkId::MatrixMultiply), "248683.505429");
}

#[test]
fn string_concat_checksum() {
    assert_eq!(rendered(BenchmarkId::StringConcat), "10000");
}

#[test]
fn binary_tree_checksum() {
    assert_eq!(rendered(BenchmarkId::BinaryTree), "14985902");
}

#[test]
fn array_sum_checksum() {
    assert_eq!(rendered(BenchmarkId::ArraySum), "499999500000");
}

#[test]
fn fibonacci_checksum() {
    assert_eq!(runner::run(BenchmarkId::Fibonacci, None).unwrap(), Checksum::Int(6765));
}

#[test]
fn primes_checksum() {
    assert_eq!(rendered(BenchmarkId::Primes), "104729");
}

#[test]
fn nested_loops_checksum() {
    assert_eq!(rendered(BenchmarkId::NestedLoops), "249500250000");
}

#[test]
fn every_literal_verifies_against_its_own_run() {
    for id in BenchmarkId::ALL.into_iter().filter(|id| !id.takes_input()) {
        let actual = runner::run(id, None).unwrap();
        let matched = verification::verify(id, None, &actual).unwrap();
        assert_eq!(Some(matched.as_str()), expectation(id).expected, "{}", id);
    }
}

#[test]
fn repeated_runs_are_identical() {
    for id in [BenchmarkId::MatrixMultiply, BenchmarkId::BinaryTree] {
        assert_eq!(runner::run(id, None).unwrap(), runner::run(id, None).unwrap());
    }
}

#[test]
fn default_output_modes() {
    let printed: Vec<_> = BenchmarkId::ALL
        .into_iter()
        .filter(|id| expectation(*id).default_output == OutputMode::Print)
        .collect();
    assert_eq!(
        printed,
        vec![
            BenchmarkId::MatrixMultiply,
            BenchmarkId::FileProcessing,
            BenchmarkId::Fibonacci
        ]
    );
}

#[test]
fn print_mode_writes_one_line() {
    let opts = RunOptions {
        output: Some(OutputMode::Print),
        verify: true,
        ..RunOptions::default()
    };
    let outcome = runner::execute(BenchmarkId::Primes, &opts, &AppConfig::default()).unwrap();
    let mut buf = Vec::new();
    runner::emit(&outcome, &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "104729\n");
}

#[test]
fn lookup_by_code_and_slug() {
    assert_eq!(BenchmarkId::lookup("BENCH-008").unwrap(), BenchmarkId::Primes);
    assert_eq!(BenchmarkId::lookup("nested-loops").unwrap(), BenchmarkId::NestedLoops);
    let err = BenchmarkId::lookup("BENCH-010").unwrap_err();
    assert_eq!(err.code(), "UNKNOWN_BENCHMARK");
}
