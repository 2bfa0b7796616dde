use std::str::FromStr;

use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::parse_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, title = "Hydrothermal Venture")]
#[aoc(year = 2021, day = 5, tags = ["2021"])]
pub struct Solver;

type Point = (i32, i32);

/// A horizontal, vertical or exactly 45-degree line of vents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VentLine {
    start: Point,
    end: Point,
}

impl VentLine {
    fn is_axis_aligned(&self) -> bool {
        self.start.0 == self.end.0 || self.start.1 == self.end.1
    }

    /// Every point covered by the line, both endpoints included.
    fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let (x0, y0) = self.start;
        let dx = (self.end.0 - x0).signum();
        let dy = (self.end.1 - y0).signum();
        let steps = (self.end.0 - x0).abs().max((self.end.1 - y0).abs());
        (0..=steps).map(move |i| (x0 + i * dx, y0 + i * dy))
    }
}

fn parse_point(s: &str) -> anyhow::Result<Point> {
    let (x, y) = s
        .trim()
        .split_once(',')
        .ok_or_else(|| anyhow!("expected 'x,y', got {:?}", s))?;
    Ok((x.trim().parse()?, y.trim().parse()?))
}

impl FromStr for VentLine {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once("->")
            .ok_or_else(|| anyhow!("expected 'x1,y1 -> x2,y2'"))?;
        let line = VentLine {
            start: parse_point(start)?,
            end: parse_point(end)?,
        };
        let (dx, dy) = (line.end.0 - line.start.0, line.end.1 - line.start.1);
        if dx != 0 && dy != 0 && dx.abs() != dy.abs() {
            bail!("line is neither axis aligned nor diagonal");
        }
        Ok(line)
    }
}

fn count_overlaps<'a>(lines: impl Iterator<Item = &'a VentLine>) -> usize {
    lines
        .flat_map(VentLine::points)
        .counts()
        .values()
        .filter(|&&count| count > 1)
        .count()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<VentLine>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, str::parse)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_overlaps(shared.iter().filter(|line| line.is_axis_aligned())).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_overlaps(shared.iter()).to_string())
    }
}
