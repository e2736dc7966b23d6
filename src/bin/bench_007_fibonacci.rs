//! BENCH-007 standalone executable: `bench_007_fibonacci`
use std::process::ExitCode;

use parity_bench::BenchmarkId;

fn main() -> ExitCode {
    parity_bench::runner::standalone_main(BenchmarkId::Fibonacci)
}
