//! BENCH-011 standalone executable: `bench_011_nested_loops`
use std::process::ExitCode;

use parity_bench::BenchmarkId;

fn main() -> ExitCode {
    parity_bench::runner::standalone_main(BenchmarkId::NestedLoops)
}
