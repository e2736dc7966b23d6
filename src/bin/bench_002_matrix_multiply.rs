//! BENCH-002 standalone executable: `bench_002_matrix_multiply`
use std::process::ExitCode;

use parity_bench::BenchmarkId;

fn main() -> ExitCode {
    parity_bench::runner::standalone_main(BenchmarkId::MatrixMultiply)
}
