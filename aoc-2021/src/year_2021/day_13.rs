use std::collections::BTreeSet;

use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::solve_failed;

const GLYPH_WIDTH: u32 = 4;
const GLYPH_HEIGHT: u32 = 6;
const GLYPH_PITCH: u32 = GLYPH_WIDTH + 1;

/// Capital letters of the puzzle's 4x6 dot font.
const GLYPHS: [(char, [&str; GLYPH_HEIGHT as usize]); 18] = [
    ('A', [".##.", "#..#", "#..#", "####", "#..#", "#..#"]),
    ('B', ["###.", "#..#", "###.", "#..#", "#..#", "###."]),
    ('C', [".##.", "#..#", "#...", "#...", "#..#", ".##."]),
    ('E', ["####", "#...", "###.", "#...", "#...", "####"]),
    ('F', ["####", "#...", "###.", "#...", "#...", "#..."]),
    ('G', [".##.", "#..#", "#...", "#.##", "#..#", ".###"]),
    ('H', ["#..#", "#..#", "####", "#..#", "#..#", "#..#"]),
    ('I', [".###", "..#.", "..#.", "..#.", "..#.", ".###"]),
    ('J', ["..##", "...#", "...#", "...#", "#..#", ".##."]),
    ('K', ["#..#", "#.#.", "##..", "#.#.", "#.#.", "#..#"]),
    ('L', ["#...", "#...", "#...", "#...", "#...", "####"]),
    ('O', [".##.", "#..#", "#..#", "#..#", "#..#", ".##."]),
    ('P', ["###.", "#..#", "#..#", "###.", "#...", "#..."]),
    ('R', ["###.", "#..#", "#..#", "###.", "#.#.", "#..#"]),
    ('S', [".###", "#...", "#...", ".##.", "...#", "###."]),
    ('U', ["#..#", "#..#", "#..#", "#..#", "#..#", ".##."]),
    ('Y', ["#...", "#...", ".#.#", "..#.", "..#.", "..#."]),
    ('Z', ["####", "...#", "..#.", ".#..", "#...", "####"]),
];

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, title = "Transparent Origami")]
#[aoc(year = 2021, day = 13, tags = ["2021"])]
pub struct Solver;

type Dot = (u32, u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fold {
    /// Fold the right half over to the left along `x = n`.
    Left(u32),
    /// Fold the bottom half up along `y = n`.
    Up(u32),
}

impl Fold {
    fn apply(self, dots: &BTreeSet<Dot>) -> BTreeSet<Dot> {
        let mirror = |v: u32, line: u32| if v > line { (2 * line).saturating_sub(v) } else { v };
        dots.iter()
            .map(|&(x, y)| match self {
                Fold::Left(line) => (mirror(x, line), y),
                Fold::Up(line) => (x, mirror(y, line)),
            })
            .collect()
    }
}

#[derive(Debug)]
pub struct Manual {
    dots: BTreeSet<Dot>,
    folds: Vec<Fold>,
}

/// Draws the dots with `#` on a `.` background, one row per line.
fn render(dots: &BTreeSet<Dot>) -> String {
    let width = dots.iter().map(|&(x, _)| x + 1).max().unwrap_or(0);
    let height = dots.iter().map(|&(_, y)| y + 1).max().unwrap_or(0);
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| if dots.contains(&(x, y)) { '#' } else { '.' })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reads the folded dots as a row of capital letters, five columns apart.
fn read_letters(dots: &BTreeSet<Dot>) -> Option<String> {
    let width = dots.iter().map(|&(x, _)| x + 1).max()?;
    if dots.iter().any(|&(x, y)| y >= GLYPH_HEIGHT || x % GLYPH_PITCH == GLYPH_WIDTH) {
        return None;
    }
    (0..width.div_ceil(GLYPH_PITCH))
        .map(|letter| {
            let left = letter * GLYPH_PITCH;
            GLYPHS
                .iter()
                .find(|(_, rows)| {
                    rows.iter().zip(0..).all(|(row, y)| {
                        row.chars()
                            .zip(left..)
                            .all(|(ch, x)| (ch == '#') == dots.contains(&(x, y)))
                    })
                })
                .map(|&(letter, _)| letter)
        })
        .collect()
}

fn parse_dot(line: &str) -> anyhow::Result<Dot> {
    let (x, y) = line
        .split_once(',')
        .ok_or_else(|| anyhow!("expected 'x,y'"))?;
    Ok((x.trim().parse()?, y.trim().parse()?))
}

fn parse_fold(line: &str) -> anyhow::Result<Fold> {
    let (axis, at) = line
        .strip_prefix("fold along ")
        .and_then(|rest| rest.split_once('='))
        .ok_or_else(|| anyhow!("expected 'fold along x=<n>' or 'fold along y=<n>'"))?;
    let at = at.trim().parse()?;
    match axis {
        "x" => Ok(Fold::Left(at)),
        "y" => Ok(Fold::Up(at)),
        other => bail!("unknown fold axis {:?}", other),
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Manual;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut manual = Manual {
            dots: BTreeSet::new(),
            folds: Vec::new(),
        };
        for (idx, line) in input.trim().lines().map(str::trim).enumerate() {
            let parsed = if line.is_empty() {
                Ok(())
            } else if line.starts_with("fold") {
                parse_fold(line).map(|fold| manual.folds.push(fold))
            } else if manual.folds.is_empty() {
                parse_dot(line).map(|dot| {
                    manual.dots.insert(dot);
                })
            } else {
                Err(anyhow!("dots must come before the folds"))
            };
            parsed.map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", idx + 1, e)))?;
        }

        if manual.dots.is_empty() {
            return Err(ParseError::MissingData("no dots".into()));
        }
        Ok(manual)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let fold = shared
            .folds
            .first()
            .ok_or_else(|| solve_failed("no fold instructions"))?;
        Ok(fold.apply(&shared.dots).len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let folded = shared
            .folds
            .iter()
            .fold(shared.dots.clone(), |dots, fold| fold.apply(&dots));
        read_letters(&folded)
            .ok_or_else(|| solve_failed(format!("unrecognised letters:\n{}", render(&folded))))
    }
}
