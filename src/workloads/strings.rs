//! BENCH-003: string building

use crate::bench::params::{self, BenchmarkId};
use crate::bench::verification::Checksum;
use crate::error::Result;
use crate::workloads::Workload;

/// Append `token` `iterations` times, one push per iteration.
///
/// Starts from an empty `String` so the buffer goes through its amortized
/// growth rather than a single up-front allocation.
pub fn concatenate(token: char, iterations: usize) -> String {
    let mut out = String::new();
    for _ in 0..iterations {
        out.push(token);
    }
    out
}

#[derive(Debug, Default)]
pub struct StringConcat;

impl Workload for StringConcat {
    type Input = usize;
    type Output = String;

    fn id(&self) -> BenchmarkId {
        BenchmarkId::StringConcat
    }

    fn prepare(&self) -> Result<usize> {
        Ok(params::string_concat::ITERATIONS)
    }

    fn execute(&self, iterations: usize) -> Result<String> {
        Ok(concatenate(params::string_concat::TOKEN, iterations))
    }

    fn checksum(&self, output: &String) -> Checksum {
        Checksum::Int(output.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_length_and_content() {
        let s = concatenate('x', 10_000);
        assert_eq!(s.len(), 10_000);
        assert!(s.chars().all(|c| c == 'x'));
    }

    #[test]
    fn test_zero_iterations() {
        assert_eq!(concatenate('x', 0), "");
    }
}
