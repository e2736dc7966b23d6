//! Deterministic Workload Contract
//!
//! The part every language port must reproduce exactly.
//!
//! # Components
//!
//! - [`lcg`] - Linear-congruential PRNG
//! - [`params`] - Canonical parameter table and benchmark ids
//! - [`generators`] - Seeded matrix and synthetic tree generators
//! - [`verification`] - Checksum reduction, published expectations, sidecars

pub mod generators;
pub mod lcg;
pub mod params;
pub mod verification;
