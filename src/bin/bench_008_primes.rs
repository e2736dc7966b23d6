//! BENCH-008 standalone executable: `bench_008_primes`
use std::process::ExitCode;

use parity_bench::BenchmarkId;

fn main() -> ExitCode {
    parity_bench::runner::standalone_main(BenchmarkId::Primes)
}
