use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::parse_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, title = "Sonar Sweep")]
#[aoc(year = 2021, day = 1, tags = ["2021"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u32>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, |line| Ok(line.parse::<u32>()?))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_increases(shared.iter().copied()).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sums = shared.windows(3).map(|window| window.iter().sum::<u32>());
        Ok(count_increases(sums).to_string())
    }
}

fn count_increases(depths: impl IntoIterator<Item = u32>) -> usize {
    depths
        .into_iter()
        .tuple_windows()
        .filter(|(previous, current)| current > previous)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_part;

    const SAMPLE: &str = "199\n200\n208\n210\n200\n207\n240\n269\n260\n263\n";

    #[test]
    fn test_sample() {
        assert_eq!(solve_part::<Solver>(SAMPLE, 1), "7");
        assert_eq!(solve_part::<Solver>(SAMPLE, 2), "5");
    }

    #[test]
    fn test_short_input_has_no_windows() {
        assert_eq!(solve_part::<Solver>("5\n6", 2), "0");
        assert_eq!(solve_part::<Solver>("5", 1), "0");
    }

    #[test]
    fn test_rejects_negative_depth() {
        assert!(matches!(
            Solver::parse("1\n-2\n3"),
            Err(ParseError::InvalidFormat(msg)) if msg.starts_with("(line 2)")
        ));
    }
}
