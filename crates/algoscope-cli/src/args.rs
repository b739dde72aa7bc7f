//! Command-line argument definitions for the algoscope CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Global arguments select the configuration file and the
//! logging verbosity; each subcommand plays back one family of algorithms.

use clap::{Parser, Subcommand};

use algoscope::{pathfind::PathAlgorithm, sort::SortAlgorithm};

/// Command-line arguments for the algoscope trace player
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sort a dataset and play back every frame
    Sort(SortArgs),
    /// Run linear and binary search on a sorted copy of a dataset
    Search(SearchArgs),
    /// Find a path from the top-left to the bottom-right corner of a grid
    Path(PathArgs),
}

/// Where the values for a sort or search come from.
#[derive(clap::Args, Debug)]
pub struct DatasetArgs {
    /// Comma-separated values to use instead of a random dataset
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub values: Option<Vec<i64>>,

    /// Number of random values to generate
    #[arg(long, conflicts_with = "values")]
    pub size: Option<usize>,

    /// Seed for the random dataset
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(clap::Args, Debug)]
pub struct SortArgs {
    /// Sorting algorithm (selection, quick, bubble)
    #[arg(short, long, default_value = "selection")]
    pub algorithm: SortAlgorithm,

    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Delay between rendered steps in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Stop bubble sort after this many comparisons
    #[arg(long)]
    pub step_limit: Option<u64>,
}

#[derive(clap::Args, Debug)]
pub struct SearchArgs {
    /// Value to search for
    #[arg(short, long, allow_hyphen_values = true)]
    pub target: i64,

    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Delay between probes in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

#[derive(clap::Args, Debug)]
pub struct PathArgs {
    /// Pathfinding algorithm (bfs, dfs, dijkstra, astar)
    #[arg(short, long, default_value = "bfs", conflicts_with = "all")]
    pub algorithm: PathAlgorithm,

    /// Run every algorithm on the same grid
    #[arg(long)]
    pub all: bool,

    /// Number of rows and columns
    #[arg(long)]
    pub size: Option<usize>,

    /// Percentage of cells that become walls
    #[arg(long)]
    pub density: Option<u8>,

    /// Percentage of cells that become forest
    #[arg(long)]
    pub forest: Option<u8>,

    /// Seed for the random grid
    #[arg(long)]
    pub seed: Option<u64>,

    /// Delay between visited cells in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,
}
