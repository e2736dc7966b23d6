//! BENCH-004: binary tree allocate / traverse / discard
//!
//! Models allocator churn under mixed lifetimes: a stretch tree built and
//! dropped up front, a long-lived tree that stays reachable for the whole
//! sweep, and many short-lived trees built and dropped inside the sweep.
//!
//! Construction and traversal are recursive. With the canonical parameters
//! the deepest call chain is `STRETCH_DEPTH + 1 = 18` frames.

use crate::bench::generators::{TreeNode, tree};
use crate::bench::params::{self, BenchmarkId};
use crate::bench::verification::Checksum;
use crate::core_types::{Depth, NodeCount};
use crate::error::Result;
use crate::workloads::Workload;

/// Count nodes: a leaf is 1, an inner node is `1 + left + right`.
pub fn check(node: &TreeNode) -> NodeCount {
    match (&node.left, &node.right) {
        (Some(left), Some(right)) => 1 + check(left) + check(right),
        _ => 1,
    }
}

/// Node counts gathered across one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeReport {
    pub stretch: NodeCount,
    pub sweep: NodeCount,
    pub long_lived: NodeCount,
}

impl TreeReport {
    pub fn total(&self) -> NodeCount {
        self.stretch + self.sweep + self.long_lived
    }
}

/// Number of trees built at `depth` during the sweep.
pub fn iterations_at(depth: Depth, min_depth: Depth, max_depth: Depth) -> u64 {
    1u64 << (max_depth - depth + min_depth)
}

/// Full stretch / long-lived / sweep cycle.
pub fn run_cycle(min_depth: Depth, max_depth: Depth) -> TreeReport {
    let stretch = {
        let stretch_tree = tree(max_depth + 1);
        check(&stretch_tree)
    };

    let long_lived_tree = tree(max_depth);

    let mut sweep = 0;
    for depth in (min_depth..=max_depth).step_by(params::binary_tree::DEPTH_STEP) {
        for _ in 0..iterations_at(depth, min_depth, max_depth) {
            let t = tree(depth);
            sweep += check(&t);
        }
    }

    // Traversed only after the sweep so it stays live throughout
    let long_lived = check(&long_lived_tree);

    TreeReport {
        stretch,
        sweep,
        long_lived,
    }
}

#[derive(Debug, Default)]
pub struct BinaryTrees;

impl Workload for BinaryTrees {
    type Input = (Depth, Depth);
    type Output = TreeReport;

    fn id(&self) -> BenchmarkId {
        BenchmarkId::BinaryTree
    }

    fn prepare(&self) -> Result<Self::Input> {
        Ok((
            params::binary_tree::MIN_DEPTH,
            params::binary_tree::MAX_DEPTH,
        ))
    }

    fn execute(&self, (min_depth, max_depth): Self::Input) -> Result<TreeReport> {
        Ok(run_cycle(min_depth, max_depth))
    }

    fn checksum(&self, output: &TreeReport) -> Checksum {
        Checksum::Int(output.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::generators::tree_size;

    #[test]
    fn test_check_matches_closed_form() {
        for depth in 0..=10 {
            assert_eq!(Some(check(&tree(depth))), tree_size(depth));
        }
    }

    #[test]
    fn test_iteration_schedule() {
        assert_eq!(iterations_at(4, 4, 16), 65_536);
        assert_eq!(iterations_at(16, 4, 16), 16);
    }

    #[test]
    fn test_small_cycle() {
        // depths 1 and 3: 2^(3-1+1)=8 trees of 3 nodes, 2^(1)=2 trees of 15 nodes
        let report = run_cycle(1, 3);
        assert_eq!(Some(report.stretch), tree_size(4));
        assert_eq!(Some(report.long_lived), tree_size(3));
        assert_eq!(report.sweep, 8 * 3 + 2 * 15);
    }

    #[test]
    fn test_canonical_report() {
        let report = run_cycle(4, 16);
        assert_eq!(report.stretch, 262_143);
        assert_eq!(report.long_lived, 131_071);
        assert_eq!(report.sweep, 14_592_688);
        assert_eq!(report.total(), 14_985_902);
    }
}
