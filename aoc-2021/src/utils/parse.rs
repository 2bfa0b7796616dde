//! Line-oriented parsing with line numbers in the error messages

use std::fmt::Display;

use anyhow::anyhow;
use aoc_solver::{ParseError, SolveError};

/// Parses every line of the trimmed input with `parse_line`.
///
/// The first failure stops parsing and is reported as
/// `ParseError::InvalidFormat("(line N) <reason>")` with a 1-based line number.
pub fn parse_lines<'a, T, F>(input: &'a str, mut parse_line: F) -> Result<Vec<T>, ParseError>
where
    F: FnMut(&'a str) -> anyhow::Result<T>,
{
    input
        .trim()
        .lines()
        .enumerate()
        .map(|(line_idx, line)| {
            parse_line(line.trim_end())
                .map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
        })
        .collect::<anyhow::Result<Vec<T>>>()
        .map_err(|e| ParseError::InvalidFormat(e.to_string()))
}

/// Wraps a message into `SolveError::SolveFailed`.
pub fn solve_failed(message: impl Display) -> SolveError {
    SolveError::SolveFailed(anyhow!("{message}").into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lines_trims_outer_whitespace() {
        let parsed = parse_lines("\n1\n2\n3\n\n", |line| Ok(line.parse::<u8>()?)).unwrap();
        assert_eq!(parsed, vec![1, 2, 3]);
    }

    #[test]
    fn test_parse_lines_reports_line_number() {
        let err = parse_lines("1\n2\nthree\n4", |line| Ok(line.parse::<u8>()?)).unwrap_err();
        match err {
            ParseError::InvalidFormat(msg) => assert!(msg.starts_with("(line 3) "), "{msg}"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_parse_lines_empty_input() {
        let parsed = parse_lines("", |line| Ok(line.len())).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_solve_failed_message() {
        let err = solve_failed("no winner");
        assert_eq!(err.to_string(), "Solve failed: no winner");
    }
}
