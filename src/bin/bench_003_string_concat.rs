//! BENCH-003 standalone executable: `bench_003_string_concat`
use std::process::ExitCode;

use parity_bench::BenchmarkId;

fn main() -> ExitCode {
    parity_bench::runner::standalone_main(BenchmarkId::StringConcat)
}
