use std::collections::HashMap;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};

const MAX_CAVES: usize = 64;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, title = "Passage Pathing")]
#[aoc(year = 2021, day = 12, tags = ["2021"])]
pub struct Solver;

/// Undirected cave graph with caves interned to indices below 64.
#[derive(Debug)]
pub struct CaveSystem<'a> {
    names: Vec<&'a str>,
    neighbours: Vec<Vec<usize>>,
    start: usize,
    end: usize,
}

impl<'a> CaveSystem<'a> {
    fn is_small(&self, cave: usize) -> bool {
        self.names[cave].chars().all(|ch| ch.is_ascii_lowercase())
    }

    fn intern(&mut self, ids: &mut HashMap<&'a str, usize>, name: &'a str) -> usize {
        *ids.entry(name).or_insert_with(|| {
            self.names.push(name);
            self.neighbours.push(Vec::new());
            self.names.len() - 1
        })
    }

    fn count_paths(&self, allow_revisit: bool) -> u64 {
        let cache = DpCache::with_problem(HashMapBackend::new(), PathCount { caves: self });
        cache.get(&(self.start, 1 << self.start, allow_revisit))
    }
}

/// Path state: current cave, bitmask of small caves already visited, and
/// whether one small cave may still be entered a second time.
type PathState = (usize, u64, bool);

/// Number of ways to reach the end cave from a given state.
struct PathCount<'c, 'a> {
    caves: &'c CaveSystem<'a>,
}

impl DpProblem<PathState, u64> for PathCount<'_, '_> {
    fn deps(&self, &(cave, visited, revisit): &PathState) -> Vec<PathState> {
        if cave == self.caves.end {
            return vec![];
        }
        self.caves.neighbours[cave]
            .iter()
            .filter(|&&next| next != self.caves.start)
            .filter_map(|&next| {
                let bit = 1u64 << next;
                if !self.caves.is_small(next) {
                    Some((next, visited, revisit))
                } else if visited & bit == 0 {
                    Some((next, visited | bit, revisit))
                } else if revisit {
                    Some((next, visited, false))
                } else {
                    None
                }
            })
            .collect()
    }

    fn compute(&self, &(cave, _, _): &PathState, deps: Vec<u64>) -> u64 {
        if cave == self.caves.end { 1 } else { deps.iter().sum() }
    }
}

impl AocParser for Solver {
    type SharedData<'a> = CaveSystem<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut caves = CaveSystem {
            names: Vec::new(),
            neighbours: Vec::new(),
            start: 0,
            end: 0,
        };
        let mut ids = HashMap::new();

        for (idx, line) in input.trim().lines().enumerate() {
            let invalid = |reason: &str| ParseError::InvalidFormat(format!("(line {}) {}", idx + 1, reason));
            let (a, b) = line
                .trim()
                .split_once('-')
                .filter(|(a, b)| is_cave_name(a) && is_cave_name(b))
                .ok_or_else(|| invalid("expected 'cave-cave'"))?;
            let a = caves.intern(&mut ids, a);
            let b = caves.intern(&mut ids, b);
            if caves.names.len() > MAX_CAVES {
                return Err(invalid("too many caves"));
            }
            if !caves.is_small(a) && !caves.is_small(b) {
                // two adjacent big caves would allow infinitely many paths
                return Err(invalid("big caves may not be connected to each other"));
            }
            caves.neighbours[a].push(b);
            caves.neighbours[b].push(a);
        }

        caves.start = *ids
            .get("start")
            .ok_or_else(|| ParseError::MissingData("no start cave".into()))?;
        caves.end = *ids
            .get("end")
            .ok_or_else(|| ParseError::MissingData("no end cave".into()))?;
        Ok(caves)
    }
}

fn is_cave_name(name: &str) -> bool {
    !name.is_empty()
        && (name.chars().all(|ch| ch.is_ascii_lowercase())
            || name.chars().all(|ch| ch.is_ascii_uppercase()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.count_paths(false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.count_paths(true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_part;

    const SMALL: &str = "start-A\nstart-b\nA-c\nA-b\nb-d\nA-end\nb-end\n";

    const MEDIUM: &str = "\
dc-end
HN-start
start-kj
dc-start
dc-HN
LN-dc
HN-end
kj-sa
kj-HN
kj-dc
";

    const LARGE: &str = "\
fs-end
he-DX
fs-he
start-DX
pj-DX
end-zg
zg-sl
zg-pj
pj-he
RW-he
fs-DX
pj-RW
zg-RW
start-pj
he-WI
zg-he
pj-fs
start-RW
";

    #[test]
    fn test_samples() {
        assert_eq!(solve_part::<Solver>(SMALL, 1), "10");
        assert_eq!(solve_part::<Solver>(SMALL, 2), "36");
        assert_eq!(solve_part::<Solver>(MEDIUM, 1), "19");
        assert_eq!(solve_part::<Solver>(MEDIUM, 2), "103");
        assert_eq!(solve_part::<Solver>(LARGE, 1), "226");
        assert_eq!(solve_part::<Solver>(LARGE, 2), "3509");
    }

    #[test]
    fn test_start_connected_to_end() {
        assert_eq!(solve_part::<Solver>("start-end", 1), "1");
        assert_eq!(solve_part::<Solver>("start-end", 2), "1");
    }

    #[test]
    fn test_rejects_malformed_graphs() {
        assert!(matches!(Solver::parse("start-A\nA-B\nB-end"), Err(ParseError::InvalidFormat(msg)) if msg.starts_with("(line 2)")));
        assert!(matches!(Solver::parse("start-a\na-b"), Err(ParseError::MissingData(_))));
        assert!(matches!(Solver::parse("start-aB"), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(Solver::parse("start end"), Err(ParseError::InvalidFormat(_))));
    }
}
