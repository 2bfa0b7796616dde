use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::solve_failed;

const SIZE: usize = 5;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, title = "Giant Squid")]
#[aoc(year = 2021, day = 4, tags = ["2021"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    draws: Vec<u32>,
    boards: Vec<Board>,
    outcome: Option<Outcome>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Outcome {
    first_score: u32,
    last_score: u32,
}

#[derive(Debug, Clone)]
struct Board {
    numbers: [[u32; SIZE]; SIZE],
    marked: [[bool; SIZE]; SIZE],
}

impl Board {
    fn new(numbers: [[u32; SIZE]; SIZE]) -> Self {
        Self {
            numbers,
            marked: [[false; SIZE]; SIZE],
        }
    }

    /// Marks `number` and reports whether this completed a row or a column.
    fn mark(&mut self, number: u32) -> bool {
        let mut won = false;
        for row in 0..SIZE {
            for col in 0..SIZE {
                if self.numbers[row][col] == number {
                    self.marked[row][col] = true;
                    won |= self.marked[row].iter().all(|&m| m)
                        || self.marked.iter().all(|line| line[col]);
                }
            }
        }
        won
    }

    fn unmarked_sum(&self) -> u32 {
        self.numbers
            .iter()
            .flatten()
            .zip(self.marked.iter().flatten())
            .filter(|&(_, &marked)| !marked)
            .map(|(&n, _)| n)
            .sum()
    }
}

/// Plays every draw on every board, recording the first and last winning scores.
fn play(draws: &[u32], boards: &[Board]) -> Result<Outcome, SolveError> {
    let mut boards = boards.to_vec();
    let mut playing = vec![true; boards.len()];
    let mut scores = Vec::new();

    for &draw in draws {
        for (board, still_playing) in boards.iter_mut().zip(playing.iter_mut()) {
            if *still_playing && board.mark(draw) {
                *still_playing = false;
                scores.push(board.unmarked_sum() * draw);
            }
        }
    }

    match (scores.first(), scores.last()) {
        (Some(&first_score), Some(&last_score)) => Ok(Outcome {
            first_score,
            last_score,
        }),
        _ => Err(solve_failed("no board ever wins")),
    }
}

fn outcome(shared: &mut SharedData) -> Result<Outcome, SolveError> {
    if let Some(outcome) = shared.outcome {
        return Ok(outcome);
    }
    let outcome = play(&shared.draws, &shared.boards)?;
    shared.outcome = Some(outcome);
    Ok(outcome)
}

fn parse_number(token: &str, line_no: usize) -> Result<u32, ParseError> {
    token
        .parse()
        .map_err(|_| ParseError::InvalidFormat(format!("(line {}) bad number {:?}", line_no, token)))
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines = input.trim().lines().enumerate();
        let draws = lines
            .next()
            .filter(|(_, line)| !line.trim().is_empty())
            .ok_or_else(|| ParseError::MissingData("no draw sequence".into()))?
            .1
            .split(',')
            .map(|token| parse_number(token.trim(), 1))
            .collect::<Result<Vec<_>, _>>()?;

        let rows = lines
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                let row = line
                    .split_whitespace()
                    .map(|token| parse_number(token, idx + 1))
                    .collect::<Result<Vec<_>, _>>()?;
                <[u32; SIZE]>::try_from(row).map_err(|row| {
                    ParseError::InvalidFormat(format!(
                        "(line {}) expected {} numbers, found {}",
                        idx + 1,
                        SIZE,
                        row.len()
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if rows.len() % SIZE != 0 {
            return Err(ParseError::InvalidFormat(format!(
                "{} board rows is not a multiple of {}",
                rows.len(),
                SIZE
            )));
        }
        let boards = rows
            .chunks_exact(SIZE)
            .map(|chunk| {
                let mut numbers = [[0; SIZE]; SIZE];
                numbers.copy_from_slice(chunk);
                Board::new(numbers)
            })
            .collect();

        Ok(SharedData {
            draws,
            boards,
            outcome: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(outcome(shared)?.first_score.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(outcome(shared)?.last_score.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_part;

    const SAMPLE: &str = "\
7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1

22 13 17 11  0
 8  2 23  4 24
21  9 14 16  7
 6 10  3 18  5
 1 12 20 15 19

 3 15  0  2 22
 9 18 13 17  5
19  8  7 25 23
20 11 10 24  4
14 21 16 12  6

14 21 17 24  4
10 16 15  9 19
18  8 23 26 20
22 11 13  6  5
 2  0 12  3  7
";

    #[test]
    fn test_sample() {
        assert_eq!(solve_part::<Solver>(SAMPLE, 1), "4512");
        assert_eq!(solve_part::<Solver>(SAMPLE, 2), "1924");
    }

    #[test]
    fn test_outcome_is_cached() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(shared.boards.len(), 3);
        assert!(shared.outcome.is_none());
        outcome(&mut shared).unwrap();
        assert_eq!(
            shared.outcome,
            Some(Outcome {
                first_score: 4512,
                last_score: 1924
            })
        );
    }

    #[test]
    fn test_column_win() {
        let mut board = Board::new([[1, 2, 3, 4, 5]; SIZE]);
        // every row holds the same numbers, so marking 3 fills column 2
        assert!(board.mark(3));
        assert_eq!(board.unmarked_sum(), 5 * (1 + 2 + 4 + 5));
    }

    #[test]
    fn test_no_winner_fails() {
        let mut shared = Solver::parse("99\n\n1 2 3 4 5\n6 7 8 9 10\n11 12 13 14 15\n16 17 18 19 20\n21 22 23 24 25").unwrap();
        assert!(matches!(outcome(&mut shared), Err(SolveError::SolveFailed(_))));
    }

    #[test]
    fn test_rejects_incomplete_board() {
        assert!(matches!(
            Solver::parse("1,2\n\n1 2 3 4 5\n6 7 8 9 10"),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Solver::parse("1,2\n\n1 2 3 4"),
            Err(ParseError::InvalidFormat(msg)) if msg.starts_with("(line 3)")
        ));
    }
}
