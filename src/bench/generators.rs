//! Workload Generators
//!
//! Materialize benchmark inputs from the canonical parameters. Every function
//! here is total: no I/O, no fallible paths.
//!
//! The generators must consume the PRNG in exactly the order documented on
//! each function; any other order yields different data from the same seed.

use crate::bench::lcg::Lcg;
use crate::core_types::{Depth, NodeCount, Seed};

/// Dense N×N matrix of `f64`, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    n: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// All-zero matrix.
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0.0; n * n],
        }
    }

    /// Dimension N.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.n + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.n + col] = value;
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.n..(row + 1) * self.n]
    }

    /// Elements in fill order (row by row, left to right).
    pub fn values(&self) -> &[f64] {
        &self.data
    }
}

/// Generate an `n`×`n` matrix from `seed`.
///
/// Seeds a fresh [`Lcg`] once, then fills row-major: left to right within a
/// row, rows top to bottom, one `next_f64()` per element.
pub fn matrix(n: usize, seed: Seed) -> Matrix {
    let mut rng = Lcg::new(seed);
    let mut m = Matrix::zeros(n);
    for i in 0..n {
        for j in 0..n {
            m.set(i, j, rng.next_f64());
        }
    }
    m
}

/// Synthetic binary tree node: links only, no payload.
///
/// Either both children are present or neither is. The node count is a pure
/// function of depth: `2^(depth+1) - 1`.
#[derive(Debug)]
pub struct TreeNode {
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    pub fn leaf() -> Self {
        Self {
            left: None,
            right: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none()
    }
}

/// Build a complete binary tree of the given depth.
///
/// Depth 0 is a leaf. The left subtree is built before the right one, which
/// fixes allocation order for memory profiling. Recursion depth equals
/// `depth + 1` frames; the canonical maximum is 17.
pub fn tree(depth: Depth) -> TreeNode {
    if depth == 0 {
        return TreeNode::leaf();
    }
    let left = Box::new(tree(depth - 1));
    let right = Box::new(tree(depth - 1));
    TreeNode {
        left: Some(left),
        right: Some(right),
    }
}

/// Closed-form node count of `tree(depth)`: `2^(depth+1) - 1`.
///
/// `None` past depth 63, where the count no longer fits a [`NodeCount`].
pub fn tree_size(depth: Depth) -> Option<NodeCount> {
    63u32.checked_sub(depth).map(|shift| NodeCount::MAX >> shift)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_fill_order_is_row_major() {
        let m = matrix(100, 42);
        let mut rng = Lcg::new(42);
        for v in m.values() {
            assert_eq!(*v, rng.next_f64());
        }
        assert_eq!(m.get(0, 0), 0.5823075897060335);
        assert_eq!(m.get(0, 1), 0.5198187492787838);
        assert_eq!(m.get(1, 0), 0.9681876408867538);
        assert_eq!(m.get(99, 99), 0.43536816257983446);
    }

    #[test]
    fn test_matrix_seed_43_origin() {
        let m = matrix(100, 43);
        assert_eq!(m.get(0, 0), 0.09617191925644875);
    }

    #[test]
    fn test_matrix_same_seed_twice() {
        assert_eq!(matrix(100, 42), matrix(100, 42));
        assert_ne!(matrix(100, 42), matrix(100, 43));
    }

    #[test]
    fn test_matrix_rows() {
        let m = matrix(3, 7);
        assert_eq!(m.n(), 3);
        assert_eq!(m.row(1), &m.values()[3..6]);
    }

    #[test]
    fn test_empty_matrix() {
        let m = matrix(0, 42);
        assert!(m.values().is_empty());
    }

    #[test]
    fn test_tree_depth_0_is_leaf() {
        let t = tree(0);
        assert!(t.is_leaf());
        assert!(t.right.is_none());
    }

    #[test]
    fn test_tree_depth_1_shape() {
        let t = tree(1);
        let left = t.left.as_ref().unwrap();
        let right = t.right.as_ref().unwrap();
        assert!(left.is_leaf());
        assert!(right.is_leaf());
    }

    #[test]
    fn test_tree_size_closed_form() {
        assert_eq!(tree_size(0), Some(1));
        assert_eq!(tree_size(4), Some(31));
        assert_eq!(tree_size(16), Some(131_071));
        assert_eq!(tree_size(17), Some(262_143));
    }

    #[test]
    fn test_tree_size_range_limit() {
        assert_eq!(tree_size(62), Some((1u64 << 63) - 1));
        assert_eq!(tree_size(63), Some(u64::MAX));
        assert_eq!(tree_size(64), None);
        assert_eq!(tree_size(u32::MAX), None);
    }
}
