//! Core types used throughout the suite
//!
//! Type aliases that give the workload contract its vocabulary. Widths are
//! part of the contract: every port must be able to represent these exactly.

/// PRNG seed.
///
/// # Constraints:
/// - **Process-local**: each generator call takes its own seed
/// - **Total**: every `u64` is a valid seed, including 0 and `u64::MAX`
pub type Seed = u64;

/// Depth of a synthetic binary tree. Depth 0 is a single leaf.
pub type Depth = u32;

/// Number of nodes visited by a tree traversal.
///
/// 64 bits so the accumulated sweep count cannot overflow.
pub type NodeCount = u64;

/// Accumulator for the integer-sum workloads.
///
/// # Constraints:
/// - Must hold `499_999_500_000` (array sum) and `249_500_250_000`
///   (nested loops) without wrapping, so at least 64 bits
pub type IntSum = u64;
