use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{DpCache, DpProblem, VecBackend};

const RESET_TIMER: usize = 6;
const NEWBORN_TIMER: usize = 8;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, title = "Lanternfish")]
#[aoc(year = 2021, day = 6, tags = ["2021"])]
pub struct Solver;

/// Number of fish with each internal timer value.
pub type School = [u64; NEWBORN_TIMER + 1];

/// Population after `n` days descended from one fish whose timer is 0.
///
/// On day 1 it splits into a timer-6 fish and a timer-8 fish, which behave
/// like timer-0 fish 7 and 9 days later.
struct Descendants;

impl DpProblem<usize, u64> for Descendants {
    fn deps(&self, days: &usize) -> Vec<usize> {
        match *days {
            0 => vec![],
            n => vec![
                n.saturating_sub(RESET_TIMER + 1),
                n.saturating_sub(NEWBORN_TIMER + 1),
            ],
        }
    }

    fn compute(&self, _days: &usize, deps: Vec<u64>) -> u64 {
        if deps.is_empty() { 1 } else { deps.iter().sum() }
    }
}

fn population(school: &School, days: usize) -> u64 {
    let cache = DpCache::with_problem(VecBackend::with_capacity(days + 1), Descendants);
    school
        .iter()
        .enumerate()
        .map(|(timer, &count)| count * cache.get(&days.saturating_sub(timer)))
        .sum()
}

impl AocParser for Solver {
    type SharedData<'a> = School;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ParseError::MissingData("no lanternfish".into()));
        }

        let mut school = School::default();
        for token in input.split(',') {
            let timer = token
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|&timer| timer <= NEWBORN_TIMER)
                .ok_or_else(|| ParseError::InvalidFormat(format!("bad timer {:?}", token)))?;
            school[timer] += 1;
        }
        Ok(school)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(population(shared, 80).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(population(shared, 256).to_string())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::utils::solve_part;

    const SAMPLE: &str = "3,4,3,1,2\n";

    /// Day-by-day simulation of the timer counts.
    fn simulate(mut school: School, days: usize) -> u64 {
        for _ in 0..days {
            school.rotate_left(1);
            school[RESET_TIMER] += school[NEWBORN_TIMER];
        }
        school.iter().sum()
    }

    #[test]
    fn test_sample() {
        assert_eq!(solve_part::<Solver>(SAMPLE, 1), "5934");
        assert_eq!(solve_part::<Solver>(SAMPLE, 2), "26984457539");
    }

    #[test]
    fn test_short_horizons() {
        let school = Solver::parse(SAMPLE).unwrap();
        assert_eq!(population(&school, 0), 5);
        assert_eq!(population(&school, 18), 26);
    }

    #[test]
    fn test_rejects_bad_timers() {
        assert!(matches!(Solver::parse("3,9"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(Solver::parse("3,,4"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(Solver::parse("\n"), Err(ParseError::MissingData(_))));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// The memoized closed form agrees with the per-day simulation.
        #[test]
        fn prop_matches_simulation(
            timers in prop::collection::vec(0usize..=NEWBORN_TIMER, 1..20),
            days in 0usize..120,
        ) {
            let mut school = School::default();
            for timer in timers {
                school[timer] += 1;
            }
            prop_assert_eq!(population(&school, days), simulate(school, days));
        }
    }
}
