use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::{Grid, solve_failed};

const COUNTED_STEPS: usize = 100;
const STEP_LIMIT: usize = 100_000;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, title = "Dumbo Octopus")]
#[aoc(year = 2021, day = 11, tags = ["2021"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    energy: Grid<u8>,
    steps_taken: usize,
    flashes_in_first_steps: usize,
    first_synchronized_step: Option<usize>,
}

/// Advances one step and returns how many octopuses flashed.
fn step(energy: &mut Grid<u8>) -> usize {
    let mut pending = Vec::new();
    for pos in energy.positions() {
        energy[pos] += 1;
        if energy[pos] > 9 {
            pending.push(pos);
        }
    }

    // a cell is queued exactly once: when its energy first reaches 10
    let mut flashes = 0;
    while let Some(pos) = pending.pop() {
        flashes += 1;
        for neighbour in energy.surrounding(pos) {
            energy[neighbour] += 1;
            if energy[neighbour] == 10 {
                pending.push(neighbour);
            }
        }
    }

    for cell in energy.cells_mut().filter(|cell| **cell > 9) {
        *cell = 0;
    }
    flashes
}

impl SharedData {
    /// Steps the simulation shared by both parts.
    fn advance(&mut self) {
        let flashes = step(&mut self.energy);
        self.steps_taken += 1;
        if self.steps_taken <= COUNTED_STEPS {
            self.flashes_in_first_steps += flashes;
        }
        if flashes == self.energy.len() {
            self.first_synchronized_step.get_or_insert(self.steps_taken);
        }
    }

    fn flashes_in_first_steps(&mut self) -> usize {
        while self.steps_taken < COUNTED_STEPS {
            self.advance();
        }
        self.flashes_in_first_steps
    }

    fn first_synchronized_step(&mut self) -> Result<usize, SolveError> {
        loop {
            if let Some(step_no) = self.first_synchronized_step {
                return Ok(step_no);
            }
            if self.steps_taken >= STEP_LIMIT {
                return Err(solve_failed(format!(
                    "octopuses never synchronize within {} steps",
                    STEP_LIMIT
                )));
            }
            self.advance();
        }
    }
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(SharedData {
            energy: Grid::parse_digits(input)?,
            steps_taken: 0,
            flashes_in_first_steps: 0,
            first_synchronized_step: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.flashes_in_first_steps().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.first_synchronized_step()?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_part;

    const SAMPLE: &str = "\
5483143223
2745854711
5264556173
6141336146
6357385478
4167524645
2176841721
6882881134
4846848554
5283751526
";

    #[test]
    fn test_sample() {
        assert_eq!(solve_part::<Solver>(SAMPLE, 1), "1656");
        assert_eq!(solve_part::<Solver>(SAMPLE, 2), "195");
    }

    #[test]
    fn test_small_example_steps() {
        let mut energy = Grid::parse_digits("11111\n19991\n19191\n19991\n11111").unwrap();
        assert_eq!(step(&mut energy), 9);
        assert_eq!(energy, Grid::parse_digits("34543\n40004\n50005\n40004\n34543").unwrap());
        assert_eq!(step(&mut energy), 0);
        assert_eq!(energy, Grid::parse_digits("45654\n51115\n61116\n51115\n45654").unwrap());
    }

    #[test]
    fn test_early_synchronization() {
        // all zeros flash together again on step 10
        let mut shared = Solver::parse("00\n00").unwrap();
        assert_eq!(shared.first_synchronized_step().unwrap(), 10);
        assert_eq!(shared.steps_taken, 10);
        assert_eq!(shared.flashes_in_first_steps(), 40);
        assert_eq!(shared.steps_taken, COUNTED_STEPS);
    }

    #[test]
    fn test_part_two_after_part_one_reuses_progress() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(shared.flashes_in_first_steps(), 1656);
        assert_eq!(shared.first_synchronized_step().unwrap(), 195);
        assert_eq!(shared.flashes_in_first_steps(), 1656);
    }

    #[test]
    fn test_unsynchronized_grid() {
        let mut shared = Solver::parse("20").unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "22");
        assert_eq!(shared.steps_taken, COUNTED_STEPS);

        let result = <Solver as PartSolver<2>>::solve(&mut shared);
        assert!(matches!(result, Err(SolveError::SolveFailed(_))));
        // part one is unaffected by the failed search
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "22");
    }
}
