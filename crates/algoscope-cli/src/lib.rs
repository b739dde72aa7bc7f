//! CLI logic for the algoscope trace player.
//!
//! Loads the configuration, applies command-line overrides, runs the
//! requested engine and plays the resulting trace to a writer.

pub mod error_adapter;
pub mod player;

mod args;
mod config;
mod error;

pub use args::{Args, Command, DatasetArgs, PathArgs, SearchArgs, SortArgs};
pub use error::CliError;

use std::io::{self, Write};

use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

use algoscope::{
    AlgoscopeError, TraceLab,
    cancel::CancelToken,
    config::{AppConfig, PlaybackConfig},
    pathfind::PathAlgorithm,
    sort::{BubbleSort, SortAlgorithm},
};

use player::{Player, RunGuard};

/// Run the algoscope CLI application, playing to standard output.
///
/// # Errors
///
/// Returns [`CliError`] for configuration loading or validation errors,
/// invalid arguments, grid construction errors, and output failures.
pub fn run(args: &Args) -> Result<(), CliError> {
    let stdout = io::stdout();
    run_with_writer(args, stdout.lock())
}

/// Run the algoscope CLI application, playing to `out`.
///
/// # Errors
///
/// See [`run`].
pub fn run_with_writer<W: Write>(args: &Args, out: W) -> Result<(), CliError> {
    let mut app_config = config::load_config(args.config.as_ref())?;
    apply_overrides(&mut app_config, &args.command);
    app_config.validate()?;
    debug!(config:? = app_config; "Effective configuration");

    let lab = TraceLab::new(app_config);
    let mut player = Player::new(out, lab.config().playback().clone(), RunGuard::new());

    match &args.command {
        Command::Sort(sort) => run_sort(&lab, &mut player, sort),
        Command::Search(search) => run_search(&lab, &mut player, search),
        Command::Path(path) => run_path(&lab, &mut player, path),
    }
}

/// Copies command-line values over the loaded configuration.
fn apply_overrides(config: &mut AppConfig, command: &Command) {
    let (dataset, delay_ms) = match command {
        Command::Sort(sort) => (Some(&sort.dataset), sort.delay_ms),
        Command::Search(search) => (Some(&search.dataset), search.delay_ms),
        Command::Path(path) => {
            let grid = config.grid_mut();
            if let Some(size) = path.size {
                grid.set_size(size);
            }
            if let Some(density) = path.density {
                grid.set_obstacle_density(density);
            }
            if let Some(forest) = path.forest {
                grid.set_forest_density(forest);
            }
            if path.seed.is_some() {
                grid.set_seed(path.seed);
            }
            (None, path.delay_ms)
        }
    };

    if let Some(size) = dataset.and_then(|dataset| dataset.size) {
        config.dataset_mut().set_size(size);
    }
    if let Some(delay_ms) = delay_ms {
        *config.playback_mut() = PlaybackConfig::uniform(delay_ms);
    }
}

fn rng_from(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

/// Returns the explicit values, or a dataset drawn from the configuration.
fn dataset_values(lab: &TraceLab, dataset: &DatasetArgs) -> Result<Vec<i64>, AlgoscopeError> {
    match &dataset.values {
        Some(values) if values.is_empty() => Err(AlgoscopeError::InvalidArgument(
            "--values needs at least one number".to_string(),
        )),
        Some(values) => Ok(values.clone()),
        None => lab.dataset(&mut rng_from(dataset.seed)),
    }
}

fn run_sort<W: Write>(
    lab: &TraceLab,
    player: &mut Player<W>,
    args: &SortArgs,
) -> Result<(), CliError> {
    let values = dataset_values(lab, &args.dataset)?;
    info!(algorithm:% = args.algorithm, len = values.len(); "Running sort");

    match (args.algorithm, args.step_limit) {
        (SortAlgorithm::Bubble, step_limit) => {
            let cancel = CancelToken::new();
            let sorter = BubbleSort::new(&values, cancel.clone());
            player.play_bubble(sorter, &cancel, step_limit)?;
        }
        (_, Some(_)) => {
            return Err(AlgoscopeError::InvalidArgument(
                "--step-limit only applies to bubble sort".to_string(),
            )
            .into());
        }
        (algorithm, None) => {
            let trace = lab.sort(&values, algorithm);
            player.play_sort(algorithm, &trace)?;
        }
    }
    Ok(())
}

fn run_search<W: Write>(
    lab: &TraceLab,
    player: &mut Player<W>,
    args: &SearchArgs,
) -> Result<(), CliError> {
    let values = dataset_values(lab, &args.dataset)?;
    let comparison = lab.search(&values, args.target);
    player.play_search(&comparison, args.target)?;
    Ok(())
}

fn run_path<W: Write>(
    lab: &TraceLab,
    player: &mut Player<W>,
    args: &PathArgs,
) -> Result<(), CliError> {
    let grid = lab.build_grid(&mut rng_from(lab.config().grid().seed()))?;

    let algorithms = if args.all {
        PathAlgorithm::ALL.to_vec()
    } else {
        vec![args.algorithm]
    };
    for algorithm in algorithms {
        let result = lab.find_path(&grid, algorithm);
        player.play_path(algorithm, &grid, &result)?;
    }
    Ok(())
}
