//! BENCH-008: prime generation by trial division

use crate::bench::params::{self, BenchmarkId};
use crate::bench::verification::Checksum;
use crate::error::{BenchError, Result};
use crate::workloads::Workload;

/// First `count` primes.
///
/// Candidates are tested in increasing order from 2, dividing only by primes
/// already found, and a candidate's trial loop stops once `p * p > candidate`.
pub fn generate_primes(count: usize) -> Vec<u64> {
    let mut primes: Vec<u64> = Vec::with_capacity(count);
    let mut candidate: u64 = 2;

    while primes.len() < count {
        let mut is_prime = true;
        for &p in &primes {
            if p * p > candidate {
                break;
            }
            if candidate % p == 0 {
                is_prime = false;
                break;
            }
        }
        if is_prime {
            primes.push(candidate);
        }
        candidate += 1;
    }

    primes
}

#[derive(Debug, Default)]
pub struct Primes;

impl Workload for Primes {
    type Input = usize;
    type Output = u64;

    fn id(&self) -> BenchmarkId {
        BenchmarkId::Primes
    }

    fn prepare(&self) -> Result<usize> {
        Ok(params::primes::COUNT)
    }

    /// Largest of the generated primes. An empty request has no last
    /// element and is reported as such.
    fn execute(&self, count: usize) -> Result<u64> {
        let primes = generate_primes(count);
        primes
            .last()
            .copied()
            .ok_or(BenchError::IndexOutOfRange {
                at: "primes".to_string(),
                index: 0,
                len: 0,
            })
    }

    fn checksum(&self, output: &u64) -> Checksum {
        Checksum::Int(*output)
    }
}
