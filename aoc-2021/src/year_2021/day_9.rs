use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::{Grid, Pos, solve_failed};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, title = "Smoke Basin")]
#[aoc(year = 2021, day = 9, tags = ["2021"])]
pub struct Solver;

fn low_points(heights: &Grid<u8>) -> impl Iterator<Item = Pos> + '_ {
    heights.positions().filter(|&pos| {
        heights
            .orthogonal(pos)
            .all(|neighbour| heights[pos] < heights[neighbour])
    })
}

/// Size of the basin around `low`, bounded by height-9 cells.
fn basin_size(heights: &Grid<u8>, low: Pos, visited: &mut Grid<bool>) -> usize {
    let mut stack = vec![low];
    visited[low] = true;
    let mut size = 0;
    while let Some(pos) = stack.pop() {
        size += 1;
        for neighbour in heights.orthogonal(pos) {
            if !visited[neighbour] && heights[neighbour] != 9 {
                visited[neighbour] = true;
                stack.push(neighbour);
            }
        }
    }
    size
}

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse_digits(input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let risk: u32 = low_points(shared)
            .map(|pos| u32::from(shared[pos]) + 1)
            .sum();
        Ok(risk.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut visited = Grid::from_fn(shared.width(), shared.height(), |_| false);
        let mut sizes = low_points(shared)
            .collect::<Vec<_>>()
            .into_iter()
            .map(|low| basin_size(shared, low, &mut visited))
            .collect::<Vec<_>>();
        if sizes.len() < 3 {
            return Err(solve_failed(format!("found {} basins, need 3", sizes.len())));
        }
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        Ok(sizes[..3].iter().product::<usize>().to_string())
    }
}
