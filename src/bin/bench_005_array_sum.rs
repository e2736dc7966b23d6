//! BENCH-005 standalone executable: `bench_005_array_sum`
use std::process::ExitCode;

use parity_bench::BenchmarkId;

fn main() -> ExitCode {
    parity_bench::runner::standalone_main(BenchmarkId::ArraySum)
}
