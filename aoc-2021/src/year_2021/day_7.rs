use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::{Itertools, MinMaxResult};

use crate::utils::solve_failed;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, title = "The Treachery of Whales")]
#[aoc(year = 2021, day = 7, tags = ["2021"])]
pub struct Solver;

/// Crab positions, sorted ascending.
pub type Crabs = Vec<i64>;

fn linear_cost(crabs: &[i64], target: i64) -> i64 {
    crabs.iter().map(|&x| (x - target).abs()).sum()
}

/// Moving `n` steps costs `1 + 2 + ... + n`.
fn triangular_cost(crabs: &[i64], target: i64) -> i64 {
    crabs
        .iter()
        .map(|&x| {
            let n = (x - target).abs();
            n * (n + 1) / 2
        })
        .sum()
}

impl AocParser for Solver {
    type SharedData<'a> = Crabs;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ParseError::MissingData("no crab positions".into()));
        }
        let mut crabs = input
            .split(',')
            .map(|token| {
                token
                    .trim()
                    .parse::<i64>()
                    .map_err(|e| ParseError::InvalidFormat(format!("{:?}: {}", token, e)))
            })
            .collect::<Result<Crabs, _>>()?;
        crabs.sort_unstable();
        Ok(crabs)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // the median minimises the sum of absolute distances
        let median = *shared
            .get(shared.len() / 2)
            .ok_or_else(|| solve_failed("no crabs"))?;
        Ok(linear_cost(shared, median).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (lo, hi) = match shared.iter().minmax() {
            MinMaxResult::NoElements => return Err(solve_failed("no crabs")),
            MinMaxResult::OneElement(&x) => (x, x),
            MinMaxResult::MinMax(&lo, &hi) => (lo, hi),
        };
        (lo..=hi)
            .map(|target| triangular_cost(shared, target))
            .min()
            .map(|cost| cost.to_string())
            .ok_or_else(|| solve_failed("empty position range"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_part;

    const SAMPLE: &str = "16,1,2,0,4,2,7,1,2,14";

    #[test]
    fn test_sample() {
        assert_eq!(solve_part::<Solver>(SAMPLE, 1), "37");
        assert_eq!(solve_part::<Solver>(SAMPLE, 2), "168");
    }

    #[test]
    fn test_costs_at_other_targets() {
        let crabs = Solver::parse(SAMPLE).unwrap();
        assert_eq!(linear_cost(&crabs, 10), 71);
        assert_eq!(triangular_cost(&crabs, 2), 206);
    }

    #[test]
    fn test_single_crab_costs_nothing() {
        assert_eq!(solve_part::<Solver>("42", 1), "0");
        assert_eq!(solve_part::<Solver>("42", 2), "0");
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(Solver::parse(""), Err(ParseError::MissingData(_))));
        assert!(matches!(Solver::parse("1,x"), Err(ParseError::InvalidFormat(_))));
    }
}
