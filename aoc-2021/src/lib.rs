//! Advent of Code 2021 puzzle solutions with automatic registration
//!
//! Each day uses the `AutoRegisterSolver` derive macro, so linking this crate
//! is enough for `SolverRegistryBuilder::register_all_plugins` to find it.

pub mod utils;

#[cfg(feature = "year-2021")]
pub mod year_2021;
