use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};

#[derive(Debug, Clone)]
struct SharedData {
    numbers: Vec<i32>,
    sum: Option<i32>,
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct TestDependentSolver;

impl AocParser for TestDependentSolver {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let numbers = input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SharedData { numbers, sum: None })
    }
}

impl PartSolver<1> for TestDependentSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum = *shared
            .sum
            .get_or_insert_with(|| shared.numbers.iter().sum());
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for TestDependentSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Reuse part 1's sum when it already ran
        let sum = shared.sum.unwrap_or_else(|| shared.numbers.iter().sum());
        let count = shared.numbers.len() as i32;
        if count == 0 {
            return Err(SolveError::SolveFailed("no numbers to average".into()));
        }
        Ok((sum / count).to_string())
    }
}

#[test]
fn test_part2_reuses_part1_result() {
    let mut shared = TestDependentSolver::parse("10\n20\n30").unwrap();

    assert_eq!(TestDependentSolver::solve_part(&mut shared, 1).unwrap(), "60");
    assert_eq!(shared.sum, Some(60));

    // Tamper with the numbers: part 2 must use the cached sum
    shared.numbers.push(1000);
    assert_eq!(TestDependentSolver::solve_part(&mut shared, 2).unwrap(), "15");
}

#[test]
fn test_part2_works_without_part1() {
    let mut shared = TestDependentSolver::parse("10\n20\n30").unwrap();
    assert_eq!(TestDependentSolver::solve_part(&mut shared, 2).unwrap(), "20");
}

#[test]
fn test_solve_failed_propagates() {
    let mut shared = TestDependentSolver::parse("").unwrap();
    let result = TestDependentSolver::solve_part(&mut shared, 2);
    assert!(matches!(result, Err(SolveError::SolveFailed(_))));
}
