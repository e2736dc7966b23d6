//! BENCH-004 standalone executable: `bench_004_binary_tree`
use std::process::ExitCode;

use parity_bench::BenchmarkId;

fn main() -> ExitCode {
    parity_bench::runner::standalone_main(BenchmarkId::BinaryTree)
}
