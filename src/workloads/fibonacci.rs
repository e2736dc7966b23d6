//! BENCH-007: naive recursive Fibonacci

use crate::bench::params::{self, BenchmarkId};
use crate::bench::verification::Checksum;
use crate::error::Result;
use crate::workloads::Workload;

/// `fib(0)=0, fib(1)=1, fib(n)=fib(n-1)+fib(n-2)`.
///
/// Deliberately exponential: no memoization, no iteration. The point is call
/// overhead. Stack depth is `n` frames.
pub fn fib(n: u32) -> u64 {
    if n <= 1 {
        return n as u64;
    }
    fib(n - 1) + fib(n - 2)
}

#[derive(Debug, Default)]
pub struct Fibonacci;

impl Workload for Fibonacci {
    type Input = u32;
    type Output = u64;

    fn id(&self) -> BenchmarkId {
        BenchmarkId::Fibonacci
    }

    fn prepare(&self) -> Result<u32> {
        Ok(params::fibonacci::N)
    }

    fn execute(&self, n: u32) -> Result<u64> {
        Ok(fib(n))
    }

    fn checksum(&self, output: &u64) -> Checksum {
        Checksum::Int(*output)
    }
}
