use std::str::FromStr;

use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::{parse_lines, solve_failed};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, title = "Seven Segment Search")]
#[aoc(year = 2021, day = 8, tags = ["2021"])]
pub struct Solver;

/// Lit segments `a..=g` as bits 0..=6.
type Pattern = u8;

/// One display: the ten unique signal patterns and the four output digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    patterns: [Pattern; 10],
    outputs: [Pattern; 4],
}

/// Sum of segment frequencies over a digit's lit segments, one entry per
/// digit 0..=9. Segment frequencies across the ten digits are fixed
/// (a=8, b=6, c=8, d=7, e=4, f=9, g=7), so the sum identifies the digit
/// however the wires are crossed.
const SIGNATURES: [u32; 10] = [42, 17, 34, 39, 30, 37, 41, 25, 49, 45];

fn parse_pattern(word: &str) -> anyhow::Result<Pattern> {
    let mut pattern = 0;
    for ch in word.chars() {
        let bit = match ch {
            'a'..='g' => 1 << (ch as u8 - b'a'),
            _ => bail!("unknown segment {:?}", ch),
        };
        if pattern & bit != 0 {
            bail!("segment {:?} repeated in {:?}", ch, word);
        }
        pattern |= bit;
    }
    if pattern == 0 {
        bail!("empty pattern");
    }
    Ok(pattern)
}

fn parse_patterns<const N: usize>(part: &str) -> anyhow::Result<[Pattern; N]> {
    let patterns = part
        .split_whitespace()
        .map(parse_pattern)
        .collect::<anyhow::Result<Vec<_>>>()?;
    let found = patterns.len();
    patterns
        .try_into()
        .map_err(|_| anyhow!("expected {} patterns, found {}", N, found))
}

impl FromStr for Entry {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (patterns, outputs) = s
            .split_once('|')
            .ok_or_else(|| anyhow!("missing '|' separator"))?;
        Ok(Entry {
            patterns: parse_patterns(patterns)?,
            outputs: parse_patterns(outputs)?,
        })
    }
}

impl Entry {
    /// Reads the four output digits as a decimal number.
    fn decode(&self) -> Result<u32, SolveError> {
        let mut frequency = [0u32; 7];
        for &pattern in &self.patterns {
            for (segment, count) in frequency.iter_mut().enumerate() {
                *count += u32::from((pattern >> segment) & 1);
            }
        }

        self.outputs.iter().try_fold(0, |value, &output| {
            let signature: u32 = (0..7)
                .filter(|&segment| (output >> segment) & 1 == 1)
                .map(|segment| frequency[segment])
                .sum();
            let digit = SIGNATURES
                .iter()
                .position(|&s| s == signature)
                .ok_or_else(|| solve_failed(format!("cannot decode output pattern {:07b}", output)))?;
            Ok(value * 10 + digit as u32)
        })
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Entry>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, str::parse)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // 1, 7, 4 and 8 are the only digits lighting 2, 3, 4 and 7 segments
        let easy = shared
            .iter()
            .flat_map(|entry| entry.outputs.iter())
            .filter(|output| matches!(output.count_ones(), 2 | 3 | 4 | 7))
            .count();
        Ok(easy.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut total = 0u64;
        for entry in shared.iter() {
            total += u64::from(entry.decode()?);
        }
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_part;

    const SAMPLE: &str = "\
be cfbegad cbdgef fgaecd cgeb fdcge agebfd fecdb fabcd edb | fdgacbe cefdb cefbgd gcbe
edbfga begcd cbg gc gcadebf fbgde acbgfd abcde gfcbed gfec | fcgedb cgb dgebacf gc
fgaebd cg bdaec gdafb agbcfd gdcbef bgcad gfac gcb cdgabef | cg cg fdcagb cbg
fbegcd cbd adcefb dageb afcb bc aefdc ecdab fgdeca fcdbega | efabcd cedba gadfec cb
aecbfdg fbg gf bafeg dbefa fcge gcbea fcaegb dgceab fcbdga | gecf egdcabf bgf bfgea
fgeab ca afcebg bdacfeg cfaedg gcfdb baec bfadeg bafgc acf | gebdcfa ecba ca fadegcb
dbcfg fgd bdegcaf fgec aegbdf ecdfab fbedc dacgb gdcebf gf | cefg dcbef fcge gbcadfe
bdfegc cbegaf gecbf dfcage bdacg ed bedf ced adcbefg gebcd | ed bcgafe cdgba cbgef
egadfb cdbfeg cegd fecab cgb gbdefca cg fgcdab egfdb bfceg | gbdfcae bgc cg cgb
gcafb gcf dcaebfg ecagb gf abcdeg gaef cafbge fdbac fegbdc | fgae cfgab fg bagce
";

    #[test]
    fn test_sample() {
        assert_eq!(solve_part::<Solver>(SAMPLE, 1), "26");
        assert_eq!(solve_part::<Solver>(SAMPLE, 2), "61229");
    }

    #[test]
    fn test_single_entry() {
        let entry: Entry = "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf"
            .parse()
            .unwrap();
        assert_eq!(entry.decode().unwrap(), 5353);
    }

    #[test]
    fn test_rejects_malformed_entries() {
        assert!("ab cd | ef".parse::<Entry>().is_err());
        assert!("acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab cdfeb fcadb cdfeb cdbaf"
            .parse::<Entry>()
            .is_err());
        assert!(parse_pattern("abh").is_err());
        assert!(parse_pattern("aab").is_err());
    }

    #[test]
    fn test_undecodable_output_fails() {
        let mut entry: Entry = "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf"
            .parse()
            .unwrap();
        // with this wiring "ac" sums to 15, which matches no digit
        entry.outputs[0] = parse_pattern("ac").unwrap();
        assert!(matches!(entry.decode(), Err(SolveError::SolveFailed(_))));
    }
}
