//! BENCH-009 standalone executable: `bench_009_json_parsing [input]`
use std::process::ExitCode;

use parity_bench::BenchmarkId;

fn main() -> ExitCode {
    parity_bench::runner::standalone_main(BenchmarkId::JsonParsing)
}
