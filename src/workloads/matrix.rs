//! BENCH-002: naive matrix multiplication

use crate::bench::generators::{Matrix, matrix};
use crate::bench::params::{self, BenchmarkId};
use crate::bench::verification::Checksum;
use crate::error::Result;
use crate::workloads::Workload;

/// Classic triple loop, iteration order i → j → k.
///
/// Each `result[i][j]` is accumulated from 0.0 in increasing `k`, which fixes
/// the floating-point summation order.
pub fn multiply(a: &Matrix, b: &Matrix) -> Matrix {
    let n = a.n();
    assert_eq!(n, b.n(), "dimension mismatch");
    let mut result = Matrix::zeros(n);
    for i in 0..n {
        for j in 0..n {
            let mut acc = 0.0;
            for k in 0..n {
                acc += a.get(i, k) * b.get(k, j);
            }
            result.set(i, j, acc);
        }
    }
    result
}

/// Sum of all elements in fill order.
pub fn element_sum(m: &Matrix) -> f64 {
    m.values().iter().sum()
}

/// Canonical 100×100 product of matrices seeded 42 and 43
#[derive(Debug, Default)]
pub struct MatrixMultiply;

impl Workload for MatrixMultiply {
    type Input = (Matrix, Matrix);
    type Output = Matrix;

    fn id(&self) -> BenchmarkId {
        BenchmarkId::MatrixMultiply
    }

    fn prepare(&self) -> Result<Self::Input> {
        Ok((
            matrix(params::matrix::N, params::matrix::SEED_A),
            matrix(params::matrix::N, params::matrix::SEED_B),
        ))
    }

    fn execute(&self, (a, b): Self::Input) -> Result<Self::Output> {
        Ok(multiply(&a, &b))
    }

    fn checksum(&self, output: &Self::Output) -> Checksum {
        Checksum::Float(element_sum(output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_product() {
        let a = matrix(3, 5);
        let mut id = Matrix::zeros(3);
        for i in 0..3 {
            id.set(i, i, 1.0);
        }
        assert_eq!(multiply(&a, &id), a);
    }

    #[test]
    fn test_two_by_two() {
        let a = matrix(2, 1);
        let b = matrix(2, 2);
        let c = multiply(&a, &b);
        let expected = a.get(0, 0) * b.get(0, 1) + a.get(0, 1) * b.get(1, 1);
        assert_eq!(c.get(0, 1), expected);
    }

    #[test]
    fn test_canonical_checksum() {
        let w = MatrixMultiply;
        let out = w.execute(w.prepare().unwrap()).unwrap();
        assert_eq!(w.checksum(&out).to_string(), "248683.505429");
    }
}
