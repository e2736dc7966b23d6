//! BENCH-005 / BENCH-011: integer accumulation loops
//!
//! Both sums exceed `u32::MAX` with the canonical parameters, so the
//! accumulators are 64-bit.

use crate::bench::params::{self, BenchmarkId};
use crate::bench::verification::Checksum;
use crate::core_types::IntSum;
use crate::error::Result;
use crate::workloads::Workload;

/// `0 + 1 + ... + (n - 1)`, one addition per element.
pub fn array_sum(n: u64) -> IntSum {
    let mut total: IntSum = 0;
    for i in 0..n {
        total += i;
    }
    total
}

/// `Σ_{i<outer} Σ_{j<inner} i*j`
pub fn nested_loops(outer: i64, inner: i64) -> i64 {
    let mut total: i64 = 0;
    for i in 0..outer {
        for j in 0..inner {
            total += i * j;
        }
    }
    total
}

#[derive(Debug, Default)]
pub struct ArraySum;

impl Workload for ArraySum {
    type Input = u64;
    type Output = IntSum;

    fn id(&self) -> BenchmarkId {
        BenchmarkId::ArraySum
    }

    fn prepare(&self) -> Result<u64> {
        Ok(params::array_sum::N)
    }

    fn execute(&self, n: u64) -> Result<IntSum> {
        Ok(array_sum(n))
    }

    fn checksum(&self, output: &IntSum) -> Checksum {
        Checksum::Int(*output)
    }
}

#[derive(Debug, Default)]
pub struct NestedLoops;

impl Workload for NestedLoops {
    type Input = (i64, i64);
    type Output = i64;

    fn id(&self) -> BenchmarkId {
        BenchmarkId::NestedLoops
    }

    fn prepare(&self) -> Result<(i64, i64)> {
        Ok((params::nested_loops::OUTER, params::nested_loops::INNER))
    }

    fn execute(&self, (outer, inner): (i64, i64)) -> Result<i64> {
        Ok(nested_loops(outer, inner))
    }

    fn checksum(&self, output: &i64) -> Checksum {
        // Non-negative for non-negative bounds
        Checksum::Int(*output as u64)
    }
}
