//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::ExecutorError;
use crate::inputs::InputStore;
use aoc_solver::{SolverError, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;
use std::time::{Duration, Instant};
use tracing::debug;

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub title: &'static str,
    pub parts: RangeInclusive<u8>,
}

/// Outcome of one solver run
#[derive(Debug, Clone)]
pub struct DayReport {
    pub year: u16,
    pub day: u8,
    pub title: &'static str,
    /// Answers of the parts that ran, in part order
    pub answers: Vec<(u8, String)>,
    pub parse_duration: TimeDelta,
    pub solve_duration: TimeDelta,
    /// Wall-clock time for reading, parsing and solving
    pub elapsed: Duration,
}

impl DayReport {
    pub fn answer(&self, part: u8) -> Option<&str> {
        self.answers
            .iter()
            .find(|(p, _)| *p == part)
            .map(|(_, answer)| answer.as_str())
    }
}

/// Runs the selected solvers one after another, stopping at the first error
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputStore,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            inputs: InputStore::new(config.input_dir.clone()),
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    /// Collect work items by filtering from registry metadata, ordered by year then day
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .storage()
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                title: info.title,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and the solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Run every work item in order
    pub fn execute(&self, work_items: &[WorkItem]) -> Result<Vec<DayReport>, ExecutorError> {
        work_items.iter().map(|work| self.run_solver(work)).collect()
    }

    fn run_solver(&self, work: &WorkItem) -> Result<DayReport, ExecutorError> {
        let (year, day) = (work.year, work.day);
        let started = Instant::now();

        let input = self
            .inputs
            .read(year, day)
            .map_err(|source| ExecutorError::Input { year, day, source })?;
        debug!(year, day, bytes = input.len(), "loaded input");

        let solver_error = |source: SolverError| ExecutorError::Solver { year, day, source };
        let mut solver = self.registry.create_solver(year, day, &input).map_err(solver_error)?;
        let parse_duration = solver.parse_duration();
        debug!(year, day, parse_us = parse_duration.num_microseconds(), "parsed input");

        let mut answers = Vec::new();
        let mut solve_duration = TimeDelta::zero();
        for part in work.parts.clone() {
            let result = solver
                .solve(part)
                .map_err(|e| solver_error(SolverError::SolveError(e)))?;
            debug!(year, day, part, solve_us = result.duration().num_microseconds(), "solved part");
            solve_duration += result.duration();
            answers.push((part, result.answer));
        }

        Ok(DayReport {
            year,
            day,
            title: work.title,
            answers,
            parse_duration,
            solve_duration,
            elapsed: started.elapsed(),
        })
    }
}
