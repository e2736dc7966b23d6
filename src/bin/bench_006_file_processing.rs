//! BENCH-006 standalone executable: `bench_006_file_processing [input]`
use std::process::ExitCode;

use parity_bench::BenchmarkId;

fn main() -> ExitCode {
    parity_bench::runner::standalone_main(BenchmarkId::FileProcessing)
}
