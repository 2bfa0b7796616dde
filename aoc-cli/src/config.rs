//! Configuration resolution from CLI args

use crate::cli::Args;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags a solver must all carry to be selected
    pub tags: Vec<String>,
    /// Root directory of the puzzle inputs
    pub input_dir: PathBuf,
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args. The input directory already carries the
    /// `AOC_INPUT_DIR` fallback from clap; here it only gets `~` expanded.
    pub fn from_args(args: Args) -> Self {
        Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags.into_iter().filter(|tag| !tag.is_empty()).collect(),
            input_dir: expand_tilde(&args.input_dir),
            quiet: args.quiet,
        }
    }
}

/// Expand a leading `~` to the home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}
