use std::cmp::Reverse;
use std::collections::BinaryHeap;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::{Grid, solve_failed};

const TILES: usize = 5;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, title = "Chiton")]
#[aoc(year = 2021, day = 15, tags = ["2021"])]
pub struct Solver;

/// Lowest total risk from the top-left to the bottom-right corner.
///
/// The starting cell's own risk is not counted.
fn lowest_risk(risk: &Grid<u8>) -> Option<u32> {
    let target = (risk.height().checked_sub(1)?, risk.width().checked_sub(1)?);
    let mut best = Grid::from_fn(risk.width(), risk.height(), |_| u32::MAX);
    let mut queue = BinaryHeap::new();
    best[(0, 0)] = 0;
    queue.push(Reverse((0u32, (0, 0))));

    while let Some(Reverse((total, pos))) = queue.pop() {
        if pos == target {
            return Some(total);
        }
        if total > best[pos] {
            continue;
        }
        for next in risk.orthogonal(pos) {
            let candidate = total + u32::from(risk[next]);
            if candidate < best[next] {
                best[next] = candidate;
                queue.push(Reverse((candidate, next)));
            }
        }
    }
    None
}

/// Repeats the map five times in each direction, adding one per tile step
/// and wrapping values above 9 back to 1.
fn tiled(risk: &Grid<u8>) -> Grid<u8> {
    let (width, height) = (risk.width(), risk.height());
    Grid::from_fn(width * TILES, height * TILES, |(row, col)| {
        let increase = (row / height + col / width) as u8;
        (risk[(row % height, col % width)] + increase - 1) % 9 + 1
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let risk = Grid::parse_digits(input)?;
        if risk.cells().any(|&level| level == 0) {
            return Err(ParseError::InvalidFormat("risk levels must be 1 to 9".into()));
        }
        Ok(risk)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        lowest_risk(shared)
            .map(|risk| risk.to_string())
            .ok_or_else(|| solve_failed("bottom-right corner unreachable"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        lowest_risk(&tiled(shared))
            .map(|risk| risk.to_string())
            .ok_or_else(|| solve_failed("bottom-right corner unreachable"))
    }
}
