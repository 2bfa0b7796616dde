use anyhow::bail;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::{parse_lines, solve_failed};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, title = "Binary Diagnostic")]
#[aoc(year = 2021, day = 3, tags = ["2021"])]
pub struct Solver;

#[derive(Debug)]
pub struct Diagnostic {
    width: usize,
    numbers: Vec<u32>,
}

impl Diagnostic {
    fn ones_at(numbers: &[u32], bit: usize) -> usize {
        numbers.iter().filter(|&&n| (n >> bit) & 1 == 1).count()
    }

    fn power_consumption(&self) -> u64 {
        let gamma = (0..self.width)
            .filter(|&bit| Self::ones_at(&self.numbers, bit) * 2 > self.numbers.len())
            .fold(0u32, |gamma, bit| gamma | (1 << bit));
        let mask = if self.width == 32 { u32::MAX } else { (1 << self.width) - 1 };
        let epsilon = !gamma & mask;
        u64::from(gamma) * u64::from(epsilon)
    }

    /// Filters bit by bit from the most significant end until one number is left.
    ///
    /// The oxygen rating keeps the most common bit (1 on ties); the CO2 rating
    /// keeps the least common one (0 on ties).
    fn rating(&self, keep_most_common: bool) -> Result<u32, SolveError> {
        let mut candidates = self.numbers.clone();
        for bit in (0..self.width).rev() {
            if candidates.len() <= 1 {
                break;
            }
            let ones = Self::ones_at(&candidates, bit);
            let zeros = candidates.len() - ones;
            let wanted = if keep_most_common { ones >= zeros } else { ones < zeros };
            candidates.retain(|&n| ((n >> bit) & 1 == 1) == wanted);
        }
        candidates
            .first()
            .copied()
            .ok_or_else(|| solve_failed("no numbers left while filtering"))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Diagnostic;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let rows = parse_lines(input, |line| {
            if line.is_empty() || line.len() > 32 {
                bail!("expected 1 to 32 binary digits, got {}", line.len());
            }
            if !line.bytes().all(|b| b == b'0' || b == b'1') {
                bail!("{:?} is not a binary number", line);
            }
            Ok((line.len(), u32::from_str_radix(line, 2)?))
        })?;

        let width = rows
            .first()
            .map(|&(width, _)| width)
            .ok_or_else(|| ParseError::MissingData("no diagnostic numbers".into()))?;
        if let Some(idx) = rows.iter().position(|&(w, _)| w != width) {
            return Err(ParseError::InvalidFormat(format!(
                "(line {}) expected {} digits",
                idx + 1,
                width
            )));
        }

        Ok(Diagnostic {
            width,
            numbers: rows.into_iter().map(|(_, value)| value).collect(),
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.power_consumption().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let oxygen = shared.rating(true)?;
        let co2 = shared.rating(false)?;
        Ok((u64::from(oxygen) * u64::from(co2)).to_string())
    }
}
