//! Helpers shared by several puzzle solvers

pub mod dp_cache;
pub mod grid;
pub mod parse;

pub use grid::{Grid, Pos};
pub use parse::{parse_lines, solve_failed};

/// Parses `input` with `S` and runs a single part, panicking on any error.
#[cfg(test)]
pub(crate) fn solve_part<S: aoc_solver::Solver>(input: &str, part: u8) -> String {
    let mut shared = S::parse(input).expect("sample input parses");
    S::solve_part(&mut shared, part).expect("sample input solves")
}
