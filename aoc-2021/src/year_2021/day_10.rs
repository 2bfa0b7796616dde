use anyhow::bail;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::{parse_lines, solve_failed};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, title = "Syntax Scoring")]
#[aoc(year = 2021, day = 10, tags = ["2021"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
enum LineStatus {
    /// First closing character that does not match the innermost open chunk.
    Corrupted(char),
    /// Closing characters needed to finish the line, innermost first.
    Incomplete(Vec<char>),
    Complete,
}

fn closer(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        '<' => Some('>'),
        _ => None,
    }
}

fn check(line: &str) -> LineStatus {
    let mut expected = Vec::new();
    for ch in line.chars() {
        match closer(ch) {
            Some(close) => expected.push(close),
            None => {
                if expected.pop() != Some(ch) {
                    return LineStatus::Corrupted(ch);
                }
            }
        }
    }
    if expected.is_empty() {
        LineStatus::Complete
    } else {
        expected.reverse();
        LineStatus::Incomplete(expected)
    }
}

fn error_score(ch: char) -> u64 {
    match ch {
        ')' => 3,
        ']' => 57,
        '}' => 1197,
        _ => 25137,
    }
}

fn completion_score(missing: &[char]) -> u64 {
    missing.iter().fold(0, |score, ch| {
        score * 5
            + match ch {
                ')' => 1,
                ']' => 2,
                '}' => 3,
                _ => 4,
            }
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, |line| {
            if let Some(bad) = line.chars().find(|ch| !"()[]{}<>".contains(*ch)) {
                bail!("unexpected character {:?}", bad);
            }
            Ok(line)
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let score: u64 = shared
            .iter()
            .filter_map(|line| match check(line) {
                LineStatus::Corrupted(ch) => Some(error_score(ch)),
                _ => None,
            })
            .sum();
        Ok(score.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut scores = shared
            .iter()
            .filter_map(|line| match check(line) {
                LineStatus::Incomplete(missing) => Some(completion_score(&missing)),
                _ => None,
            })
            .collect::<Vec<_>>();
        if scores.is_empty() {
            return Err(solve_failed("no incomplete lines"));
        }
        scores.sort_unstable();
        Ok(scores[scores.len() / 2].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_part;

    const SAMPLE: &str = "\
[({(<(())[]>[[{[]{<()<>>
[(()[<>])]({[<{<<[]>>(
{([(<{}[<>[]}>{[]{[(<()>
(((({<>}<{<{<>}{[]{[]{}
[[<[([]))<([[{}[[()]]]
[{[{({}]{}}([{[{{{}}([]
{<[[]]>}<{[{[{[]{()[[[]
[<(<(<(<{}))><([]([]()
<{([([[(<>()){}]>(<<{{
<{([{{}}[<[[[<>{}]]]>[]]
";

    #[test]
    fn test_sample() {
        assert_eq!(solve_part::<Solver>(SAMPLE, 1), "26397");
        assert_eq!(solve_part::<Solver>(SAMPLE, 2), "288957");
    }

    #[test]
    fn test_line_status() {
        assert_eq!(check("{([(<{}[<>[]}>{[]{[(<()>"), LineStatus::Corrupted('}'));
        assert_eq!(check("([])"), LineStatus::Complete);
        assert_eq!(check("[({(<(())[]>[[{[]{<()<>>"), LineStatus::Incomplete("}}]])})]".chars().collect()));
    }

    #[test]
    fn test_single_unclosed_chunk_is_incomplete() {
        assert_eq!(check("("), LineStatus::Incomplete(vec![')']));
        assert_eq!(solve_part::<Solver>("(", 2), "1");
    }

    #[test]
    fn test_completion_score() {
        assert_eq!(completion_score(&"])}>".chars().collect::<Vec<_>>()), 294);
    }

    #[test]
    fn test_rejects_foreign_characters() {
        assert!(matches!(Solver::parse("(]\n(a)"), Err(ParseError::InvalidFormat(msg)) if msg.starts_with("(line 2)")));
    }
}
