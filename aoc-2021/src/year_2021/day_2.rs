use std::str::FromStr;

use anyhow::{anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2, title = "Dive!")]
#[aoc(year = 2021, day = 2, tags = ["2021"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Forward(i64),
    Down(i64),
    Up(i64),
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (direction, amount) = s
            .split_once(' ')
            .ok_or_else(|| anyhow!("expected '<direction> <amount>', got {:?}", s))?;
        let amount: i64 = amount.parse()?;
        if amount < 0 {
            bail!("amount must be non negative");
        }
        match direction {
            "forward" => Ok(Command::Forward(amount)),
            "down" => Ok(Command::Down(amount)),
            "up" => Ok(Command::Up(amount)),
            other => bail!("unknown direction {:?}", other),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Submarine {
    horizontal: i64,
    depth: i64,
    aim: i64,
}

impl Submarine {
    /// Commands move the submarine directly.
    fn drive(self, command: &Command) -> Self {
        match *command {
            Command::Forward(n) => Self { horizontal: self.horizontal + n, ..self },
            Command::Down(n) => Self { depth: self.depth + n, ..self },
            Command::Up(n) => Self { depth: self.depth - n, ..self },
        }
    }

    /// Up and down change the aim; forward moves along it.
    fn steer(self, command: &Command) -> Self {
        match *command {
            Command::Forward(n) => Self {
                horizontal: self.horizontal + n,
                depth: self.depth + self.aim * n,
                ..self
            },
            Command::Down(n) => Self { aim: self.aim + n, ..self },
            Command::Up(n) => Self { aim: self.aim - n, ..self },
        }
    }

    fn product(&self) -> i64 {
        self.horizontal * self.depth
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Command>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, str::parse)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let end = shared.iter().fold(Submarine::default(), Submarine::drive);
        Ok(end.product().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let end = shared.iter().fold(Submarine::default(), Submarine::steer);
        Ok(end.product().to_string())
    }
}
