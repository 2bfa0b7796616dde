//! AOC CLI - Command-line interface for running Advent of Code solvers

mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod logging;
mod output;

// Import aoc-2021 to link the solver plugins
use aoc_2021 as _;

use aoc_solver::{SolverRegistry, SolverRegistryBuilder};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use output::{OutputFormatter, format_duration, format_std_duration};
use tracing::{debug, info};

fn main() {
    let args = Args::parse();
    logging::init_logger(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args);
    debug!(?config, "resolved configuration");

    let registry = build_registry(&config.tags)?;
    let executor = Executor::new(registry, &config);

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }
    info!(solvers = work_items.len(), input_dir = %config.input_dir.display(), "running solvers");

    let reports = executor.execute(&work_items)?;
    print!("{}", OutputFormatter::new(config.quiet).render(&reports));

    let parse_time: chrono::TimeDelta = reports.iter().map(|r| r.parse_duration).sum();
    let solve_time: chrono::TimeDelta = reports.iter().map(|r| r.solve_duration).sum();
    let elapsed: std::time::Duration = reports.iter().map(|r| r.elapsed).sum();
    info!(
        parse = %format_duration(parse_time),
        solve = %format_duration(solve_time),
        elapsed = %format_std_duration(elapsed),
        "finished"
    );
    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
