use std::collections::HashMap;

use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::{Itertools, MinMaxResult};

use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
use crate::utils::solve_failed;

const ELEMENTS: usize = 26;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, title = "Extended Polymerization")]
#[aoc(year = 2021, day = 14, tags = ["2021"])]
pub struct Solver;

/// Element counts indexed by `letter - 'A'`.
type Counts = [u64; ELEMENTS];

#[derive(Debug)]
pub struct Polymer {
    template: Vec<u8>,
    rules: HashMap<(u8, u8), u8>,
}

/// Elements inserted between a pair over a number of steps, the pair itself excluded.
struct PairExpansion<'p> {
    rules: &'p HashMap<(u8, u8), u8>,
}

impl DpProblem<(u8, u8, usize), Counts> for PairExpansion<'_> {
    fn deps(&self, &(left, right, steps): &(u8, u8, usize)) -> Vec<(u8, u8, usize)> {
        match self.rules.get(&(left, right)) {
            Some(&middle) if steps > 0 => vec![(left, middle, steps - 1), (middle, right, steps - 1)],
            _ => vec![],
        }
    }

    fn compute(&self, &(left, right, steps): &(u8, u8, usize), deps: Vec<Counts>) -> Counts {
        let mut counts = [0; ELEMENTS];
        if let Some(&middle) = self.rules.get(&(left, right)).filter(|_| steps > 0) {
            counts[usize::from(middle)] += 1;
            for dep in &deps {
                for (total, n) in counts.iter_mut().zip(dep) {
                    *total += n;
                }
            }
        }
        counts
    }
}

impl Polymer {
    /// Most common minus least common element count after `steps` insertions.
    fn element_spread(&self, steps: usize) -> Result<u64, SolveError> {
        let cache = DpCache::with_problem(HashMapBackend::new(), PairExpansion { rules: &self.rules });

        let mut counts = [0u64; ELEMENTS];
        for &element in &self.template {
            counts[usize::from(element)] += 1;
        }
        for (&left, &right) in self.template.iter().tuple_windows() {
            for (total, n) in counts.iter_mut().zip(cache.get(&(left, right, steps))) {
                *total += n;
            }
        }

        match counts.iter().filter(|&&n| n > 0).minmax() {
            MinMaxResult::MinMax(min, max) => Ok(max - min),
            MinMaxResult::OneElement(_) => Ok(0),
            MinMaxResult::NoElements => Err(solve_failed("empty polymer")),
        }
    }
}

fn element(ch: char) -> anyhow::Result<u8> {
    if ch.is_ascii_uppercase() {
        Ok(ch as u8 - b'A')
    } else {
        Err(anyhow!("element {:?} is not an uppercase letter", ch))
    }
}

fn parse_rule(line: &str) -> anyhow::Result<((u8, u8), u8)> {
    let (pair, inserted) = line
        .split_once("->")
        .ok_or_else(|| anyhow!("expected 'AB -> C'"))?;
    let pair = pair.trim().chars().map(element).collect::<anyhow::Result<Vec<_>>>()?;
    let inserted = inserted.trim().chars().map(element).collect::<anyhow::Result<Vec<_>>>()?;
    match (pair.as_slice(), inserted.as_slice()) {
        (&[left, right], &[middle]) => Ok(((left, right), middle)),
        _ => bail!("expected a pair and a single element"),
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Polymer;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines = input.trim().lines().map(str::trim).enumerate();
        let template = lines
            .next()
            .map(|(_, line)| line)
            .filter(|line| !line.is_empty())
            .ok_or_else(|| ParseError::MissingData("no polymer template".into()))?
            .chars()
            .map(element)
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(format!("(line 1) {}", e)))?;

        let mut rules = HashMap::new();
        for (idx, line) in lines.filter(|(_, line)| !line.is_empty()) {
            let (pair, inserted) = parse_rule(line)
                .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", idx + 1, e)))?;
            if rules.insert(pair, inserted).is_some() {
                return Err(ParseError::InvalidFormat(format!("(line {}) duplicate rule", idx + 1)));
            }
        }

        Ok(Polymer { template, rules })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.element_spread(10)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.element_spread(40)?.to_string())
    }
}
