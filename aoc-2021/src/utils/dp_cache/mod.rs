//! Memoization cache for dynamic programming over a dependency DAG
//!
//! A problem describes, for every index, which other indices it needs
//! ([`DpProblem::deps`]) and how to combine their values
//! ([`DpProblem::compute`]). [`DpCache`] resolves dependencies lazily and
//! stores each value exactly once in a [`Backend`].
//!
//! # Backend Types
//!
//! - [`VecBackend`]: dense `usize` indices starting at 0 (auto-growing)
//! - [`HashMapBackend`]: any `Hash + Eq` index, for sparse or tuple keys
//!
//! # Warning: Cycle Behavior
//!
//! There is no cycle detection. A cyclic dependency graph recurses until the
//! stack overflows, so callers must make sure the dependencies form a DAG.
//!
//! # Example
//!
//! ```rust
//! use aoc_2021::utils::dp_cache::{DpCache, DpProblem, VecBackend};
//!
//! struct Fibonacci;
//!
//! impl DpProblem<usize, u64> for Fibonacci {
//!     fn deps(&self, n: &usize) -> Vec<usize> {
//!         if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
//!     }
//!
//!     fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
//!         if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
//!     }
//! }
//!
//! let cache = DpCache::with_problem(VecBackend::new(), Fibonacci);
//! assert_eq!(cache.get(&50), 12_586_269_025);
//! ```

mod backend;
mod cache;
mod problem;

#[cfg(test)]
mod tests;

pub use backend::{Backend, HashMapBackend, VecBackend};
pub use cache::DpCache;
pub use problem::{ClosureProblem, DpProblem};
