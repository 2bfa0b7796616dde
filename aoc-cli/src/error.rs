//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Executor error
    #[error(transparent)]
    Executor(#[from] ExecutorError),
}

/// Executor-specific errors; the first one stops the run
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// Input could not be loaded
    #[error("Input for {year} day {day}: {source}")]
    Input {
        year: u16,
        day: u8,
        #[source]
        source: InputError,
    },

    /// Parsing or solving failed
    #[error("{year} day {day}: {source}")]
    Solver {
        year: u16,
        day: u8,
        #[source]
        source: aoc_solver::SolverError,
    },
}

/// Input loading errors
#[derive(Error, Debug)]
pub enum InputError {
    /// The input file does not exist
    #[error("missing input file {}", .path.display())]
    Missing { path: PathBuf },

    /// IO error while reading an existing path
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
